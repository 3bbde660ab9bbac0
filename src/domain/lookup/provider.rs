// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::lookup::transport::TransportError;
use crate::domain::models::inmate::{InmateRecord, Jurisdiction};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// Rejected before any request is sent.
    #[error("{value} is not a valid {jurisdiction} inmate number")]
    InvalidIdentifier {
        value: String,
        jurisdiction: Jurisdiction,
    },
    /// The source returned several rows for an identifier that should be unique.
    #[error("Unexpectedly got {count} matches on ID {id}")]
    UpstreamInconsistency { id: String, count: usize },
    #[error("Result row is missing column '{0}'")]
    MissingColumn(String),
    #[error("Malformed response body: {0}")]
    Decode(String),
    #[error("No provider registered for {0}")]
    UnsupportedJurisdiction(Jurisdiction),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A corrections system that can be searched by name or inmate number.
#[async_trait]
pub trait InmateProvider: Send + Sync {
    /// Search by free-text name fragments, passed to the source unmodified.
    async fn query_by_name(&self, first: &str, last: &str)
        -> Result<Vec<InmateRecord>, LookupError>;

    /// Exact lookup by inmate number. `Ok(None)` when nothing matched.
    async fn query_by_identifier(&self, id: &str) -> Result<Option<InmateRecord>, LookupError>;

    /// Canonical textual form of an inmate number for this source.
    fn format_identifier(&self, id: &str) -> Result<String, LookupError>;

    fn jurisdiction(&self) -> Jurisdiction;

    /// Short agency name, used in logs and error reports.
    fn name(&self) -> &'static str;
}
