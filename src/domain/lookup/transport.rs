// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// Failure below the parsing layer: connecting, sending or reading the body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("Request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Short class name used when reporting a failed provider to the caller.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::Timeout(_) => "Timeout",
            TransportError::Connect(_) => "ConnectionError",
            TransportError::Body(_) => "ContentDecodingError",
            TransportError::Request(_) => "RequestException",
        }
    }
}

/// Where the parameters of a POST travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamEncoding {
    /// `application/x-www-form-urlencoded` request body.
    Form,
    /// URL query string with an empty body.
    Query,
}

/// A single POST with string parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub encoding: ParamEncoding,
}

impl PostRequest {
    pub fn form(url: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            url: url.into(),
            params,
            encoding: ParamEncoding::Form,
        }
    }

    pub fn query(url: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            url: url.into(),
            params,
            encoding: ParamEncoding::Query,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP POST capability the providers are built on.
///
/// Implementations open whatever session they need for one call and release
/// it before returning, on success and failure alike.
#[async_trait]
pub trait FormTransport: Send + Sync {
    /// Sends the request and returns the response body as text. Non-success
    /// status codes are not errors here; the body is handed back regardless.
    async fn post(&self, request: &PostRequest) -> Result<String, TransportError>;
}
