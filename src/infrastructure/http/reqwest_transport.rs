// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::domain::lookup::transport::{FormTransport, ParamEncoding, PostRequest, TransportError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// POST transport backed by reqwest.
///
/// Every call builds its own client, so cookies and pooled connections live
/// exactly as long as one request/response cycle.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    user_agent: String,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_settings(settings: &HttpSettings) -> Self {
        let transport = Self::new(settings.user_agent.clone());
        match settings.timeout_secs {
            Some(secs) => transport.with_timeout(Duration::from_secs(secs)),
            None => transport,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl FormTransport for ReqwestTransport {
    async fn post(&self, request: &PostRequest) -> Result<String, TransportError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .cookie_store(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let pending = client.post(&request.url);
        let pending = match request.encoding {
            ParamEncoding::Form => pending.form(&request.params),
            ParamEncoding::Query => pending.query(&request.params),
        };

        let response = pending.send().await?;
        let status = response.status();
        debug!(url = %request.url, status = status.as_u16(), "Received response");
        if !status.is_success() {
            warn!(url = %request.url, status = status.as_u16(), "Upstream returned non-success status");
        }

        Ok(response.text().await?)
    }
}
