// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::lookup::transport::{FormTransport, PostRequest, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned bodies in order and records every request it sees.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<String, TransportError>>>,
    requests: Mutex<Vec<PostRequest>>,
}

impl StubTransport {
    pub fn with_body(body: impl Into<String>) -> Self {
        let stub = Self::default();
        stub.push(Ok(body.into()));
        stub
    }

    pub fn with_error(error: TransportError) -> Self {
        let stub = Self::default();
        stub.push(Err(error));
        stub
    }

    pub fn push(&self, response: Result<String, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<PostRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormTransport for StubTransport {
    async fn post(&self, request: &PostRequest) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no canned response left".to_string())))
    }
}
