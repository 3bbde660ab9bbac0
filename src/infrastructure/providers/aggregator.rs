// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::lookup::provider::{InmateProvider, LookupError};
use crate::domain::lookup::transport::TransportError;
use crate::domain::models::inmate::{InmateRecord, Jurisdiction};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// Records found across providers plus one message per provider that could
/// not be reached.
#[derive(Debug, Default, Serialize)]
pub struct LookupReport {
    pub inmates: Vec<InmateRecord>,
    pub errors: Vec<String>,
}

impl LookupReport {
    fn record_failure(&mut self, provider: &dyn InmateProvider, err: &TransportError) {
        error!(
            provider = provider.name(),
            kind = err.kind(),
            error = %err,
            "Query returned request exception"
        );
        self.errors.push(format!(
            "{} query returned {} request exception",
            provider.name(),
            err.kind()
        ));
    }
}

/// Queries several providers one after another.
///
/// Transport failures of one provider are collected in the report so the
/// others still answer. Every other error aborts the lookup.
pub struct Lookup {
    providers: Vec<Arc<dyn InmateProvider>>,
}

impl Lookup {
    pub fn new(providers: Vec<Arc<dyn InmateProvider>>) -> Self {
        Self { providers }
    }

    pub fn provider(&self, jurisdiction: Jurisdiction) -> Result<&dyn InmateProvider, LookupError> {
        self.providers
            .iter()
            .find(|p| p.jurisdiction() == jurisdiction)
            .map(|p| p.as_ref())
            .ok_or(LookupError::UnsupportedJurisdiction(jurisdiction))
    }

    pub fn jurisdictions(&self) -> Vec<Jurisdiction> {
        self.providers.iter().map(|p| p.jurisdiction()).collect()
    }

    /// Looks the number up in each requested jurisdiction, in the given order.
    pub async fn query_by_identifier(
        &self,
        id: &str,
        jurisdictions: &[Jurisdiction],
    ) -> Result<LookupReport, LookupError> {
        let mut report = LookupReport::default();

        for &jurisdiction in jurisdictions {
            let provider = self.provider(jurisdiction)?;
            match provider.query_by_identifier(id).await {
                Ok(Some(inmate)) => report.inmates.push(inmate),
                Ok(None) => {}
                Err(LookupError::Transport(err)) => report.record_failure(provider, &err),
                Err(err) => return Err(err),
            }
        }

        info!(
            found = report.inmates.len(),
            failed = report.errors.len(),
            "Identifier lookup finished"
        );
        Ok(report)
    }

    /// Searches every registered provider by name.
    pub async fn query_by_name(&self, first: &str, last: &str) -> Result<LookupReport, LookupError> {
        let mut report = LookupReport::default();

        for provider in &self.providers {
            match provider.query_by_name(first, last).await {
                Ok(inmates) => report.inmates.extend(inmates),
                Err(LookupError::Transport(err)) => report.record_failure(provider.as_ref(), &err),
                Err(err) => return Err(err),
            }
        }

        info!(
            found = report.inmates.len(),
            failed = report.errors.len(),
            "Name lookup finished"
        );
        Ok(report)
    }
}
