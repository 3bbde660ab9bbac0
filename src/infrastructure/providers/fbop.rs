// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::lookup::identifier::parse_eight_digits;
use crate::domain::lookup::provider::{InmateProvider, LookupError};
use crate::domain::lookup::transport::{FormTransport, PostRequest};
use crate::domain::models::inmate::{InmateRecord, Jurisdiction, ReleaseDate};
use async_trait::async_trait;
use chrono::{Local, NaiveDate, Utc};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, Instrument, Span};

pub const DEFAULT_URL: &str = "https://www.bop.gov/PublicInfo/execute/inmateloc";

/// Federal facilities located in Texas.
pub const TEXAS_UNITS: &[&str] = &[
    "BAS", "BML", "BMM", "BMP", "BSC", "BIG", "BRY", "CRW", "EDN", "FTW", "DAL", "HOU", "LAT",
    "REE", "RVS", "SEA", "TEX", "TRV",
];

/// Placements that are not a facility but still keep the inmate in scope.
pub const SPECIAL_UNITS: &[&str] = &["TEMP RELEASE", "IN TRANSIT"];

const RELEASE_FORMAT: &str = "%m/%d/%Y";

const DEFAULT_PARAMS: &[(&str, &str)] = &[
    ("age", ""),
    ("inmateNum", ""),
    ("nameFirst", ""),
    ("nameLast", ""),
    ("nameMiddle", ""),
    ("output", "json"),
    ("race", ""),
    ("sex", ""),
    ("todo", "query"),
];

#[derive(Debug, Deserialize)]
struct LocatorResponse {
    #[serde(rename = "InmateLocator")]
    inmates: Vec<LocatorEntry>,
}

/// One entry of the inmate locator's JSON answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorEntry {
    pub inmate_num: String,
    pub name_first: String,
    pub name_last: String,
    #[serde(default)]
    pub facl_code: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub act_rel_date: String,
    #[serde(default)]
    pub proj_rel_date: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Formats a register number as `NNNNN-NNN`, zero-padding to eight digits.
///
/// Dashes in the input are ignored, so `"12345-678"`, `12345678` and
/// `"1234"` become `12345-678`, `12345-678` and `00001-234`.
pub fn format_identifier<T: fmt::Display>(id: T) -> Result<String, LookupError> {
    let raw = id.to_string();
    let digits = raw.replace('-', "");
    let padded = parse_eight_digits(&digits)
        .map(|n| format!("{:08}", n))
        .ok_or(LookupError::InvalidIdentifier {
            value: raw,
            jurisdiction: Jurisdiction::Federal,
        })?;
    let (head, tail) = padded.split_at(5);
    Ok(format!("{}-{}", head, tail))
}

pub fn build_params(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = DEFAULT_PARAMS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for (key, value) in fields {
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.to_string(),
            None => params.push((key.to_string(), value.to_string())),
        }
    }

    params
}

/// Normalizes one locator entry. The actual release date wins over the
/// projected one; when neither parses the projected text is kept.
pub fn entry_to_inmate(entry: LocatorEntry) -> InmateRecord {
    let release = match ReleaseDate::parse(&entry.act_rel_date, RELEASE_FORMAT) {
        date @ ReleaseDate::Date(_) => date,
        ReleaseDate::RawText(_) => ReleaseDate::parse(&entry.proj_rel_date, RELEASE_FORMAT),
    };

    let inmate = InmateRecord {
        id: entry.inmate_num,
        jurisdiction: Jurisdiction::Federal,
        first_name: entry.name_first,
        last_name: entry.name_last,
        unit: non_empty(entry.facl_code),
        race: non_empty(entry.race),
        sex: non_empty(entry.sex),
        url: None,
        release,
        datetime_fetched: Utc::now(),
    };

    debug!(
        last = %inmate.last_name,
        first = %inmate.first_name,
        id = %inmate.id,
        "MATCHES"
    );

    inmate
}

/// True when the inmate is housed in, or in transit within, Texas.
pub fn is_in_texas(inmate: &InmateRecord) -> bool {
    let in_texas = inmate
        .unit
        .as_deref()
        .is_some_and(|unit| TEXAS_UNITS.contains(&unit) || SPECIAL_UNITS.contains(&unit));

    if !in_texas {
        debug!(
            last = %inmate.last_name,
            first = %inmate.first_name,
            id = %inmate.id,
            unit = ?inmate.unit,
            "Unit NOT IN TEXAS"
        );
    }

    in_texas
}

/// False once a dated release is on or before `today`. Text releases such as
/// `LIFE` never count as released.
pub fn has_not_been_released(inmate: &InmateRecord, today: NaiveDate) -> bool {
    let released = inmate.release.as_date().is_some_and(|date| today >= date);

    if released {
        debug!(
            last = %inmate.last_name,
            first = %inmate.first_name,
            id = %inmate.id,
            release = %inmate.release,
            "RELEASED"
        );
    }

    !released
}

/// Client for the Federal Bureau of Prisons inmate locator.
///
/// Only inmates still held in Texas are returned.
pub struct FbopClient {
    transport: Arc<dyn FormTransport>,
    url: String,
    span: Span,
}

impl FbopClient {
    pub fn new(transport: Arc<dyn FormTransport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
            span: tracing::info_span!("fbop"),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub async fn query_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Vec<InmateRecord>, LookupError> {
        self.span
            .in_scope(|| debug!(first = %first, last = %last, "Querying with name"));
        let matches = self
            .query(&[("nameFirst", first), ("nameLast", last)])
            .await?;

        self.span.in_scope(|| {
            if matches.is_empty() {
                debug!("No results were returned");
            } else {
                debug!(count = matches.len(), "Result(s) returned");
            }
        });
        Ok(matches)
    }

    pub async fn query_by_identifier<T: fmt::Display>(
        &self,
        id: T,
    ) -> Result<Option<InmateRecord>, LookupError> {
        let id = self.span.in_scope(|| {
            format_identifier(id).inspect_err(|err| debug!(error = %err, "Rejected identifier"))
        })?;

        self.span.in_scope(|| debug!(id = %id, "Querying with ID"));
        let mut matches = self.query(&[("inmateNum", id.as_str())]).await?;

        match matches.len() {
            0 => {
                self.span.in_scope(|| debug!("No results were returned"));
                Ok(None)
            }
            1 => Ok(matches.pop()),
            count => Err(LookupError::UpstreamInconsistency { id, count }),
        }
    }

    async fn query(&self, fields: &[(&str, &str)]) -> Result<Vec<InmateRecord>, LookupError> {
        let request = PostRequest::query(self.url.clone(), build_params(fields));
        self.fetch(&request).instrument(self.span.clone()).await
    }

    async fn fetch(&self, request: &PostRequest) -> Result<Vec<InmateRecord>, LookupError> {
        let body = self.transport.post(request).await?;
        let response: LocatorResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        let today = Local::now().date_naive();
        Ok(response
            .inmates
            .into_iter()
            .map(entry_to_inmate)
            .filter(is_in_texas)
            .filter(|inmate| has_not_been_released(inmate, today))
            .collect())
    }
}

#[async_trait]
impl InmateProvider for FbopClient {
    async fn query_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Vec<InmateRecord>, LookupError> {
        FbopClient::query_by_name(self, first, last).await
    }

    async fn query_by_identifier(&self, id: &str) -> Result<Option<InmateRecord>, LookupError> {
        FbopClient::query_by_identifier(self, id).await
    }

    fn format_identifier(&self, id: &str) -> Result<String, LookupError> {
        format_identifier(id)
    }

    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Federal
    }

    fn name(&self) -> &'static str {
        "FBOP"
    }
}

#[cfg(test)]
#[path = "fbop_test.rs"]
mod tests;
