// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::lookup::identifier::parse_eight_digits;
use crate::domain::lookup::provider::{InmateProvider, LookupError};
use crate::domain::lookup::transport::{FormTransport, PostRequest};
use crate::domain::models::inmate::{InmateRecord, Jurisdiction, ReleaseDate};
use crate::domain::models::raw_row::RawRow;
use crate::domain::services::name_parser::HumanName;
use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, Instrument, Span};

pub const DEFAULT_BASE_URL: &str = "https://offender.tdcj.texas.gov";
pub const SEARCH_PATH: &str = "/OffenderSearch/search.action";

/// Title of the page the form renders when the search was accepted.
pub const RESULTS_TITLE: &str = "Offender Search List";

pub const COLUMN_NUMBER: &str = "TDCJ Number";
pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_UNIT: &str = "Unit of Assignment";
pub const COLUMN_RELEASE: &str = "Projected Release Date";
pub const COLUMN_RACE: &str = "Race";
pub const COLUMN_GENDER: &str = "Gender";

const RELEASE_FORMAT: &str = "%Y-%m-%d";

/// Form fields the search action expects, with the values of an empty search.
const DEFAULT_FIELDS: &[(&str, &str)] = &[
    ("btnSearch", "Search"),
    ("gender", "ALL"),
    ("page", "index"),
    ("race", "ALL"),
    ("tdcj", ""),
    ("sid", ""),
    ("lastName", ""),
    ("firstName", ""),
];

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector"));
static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.ws").expect("table selector"));
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("row selector"));
static HEADER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("header selector"));
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("cell selector"));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("link selector"));

/// Zero-pads a TDCJ number to eight digits.
///
/// Accepts anything whose text form is an integer in `0..=99999999`
/// (`12345`, `"12345"`, `" 00012345 "`).
pub fn format_identifier<T: fmt::Display>(id: T) -> Result<String, LookupError> {
    let raw = id.to_string();
    parse_eight_digits(&raw)
        .map(|n| format!("{:08}", n))
        .ok_or(LookupError::InvalidIdentifier {
            value: raw,
            jurisdiction: Jurisdiction::Texas,
        })
}

/// Overlays caller fields on the form defaults, keeping the form's field order.
pub fn build_params(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = DEFAULT_FIELDS
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

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the result rows from a search response.
///
/// Returns `None` when the page is not a results page (validation errors and
/// the bare form both render under a different title).
pub fn parse_results_page(html: &str) -> Option<Vec<RawRow>> {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|t| element_text(&t))?;
    if title != RESULTS_TITLE {
        debug!(title = %title, "Response is not a results page");
        return None;
    }

    let Some(table) = document.select(&TABLE_SELECTOR).next() else {
        return Some(Vec::new());
    };

    let mut rows = table.select(&ROW_SELECTOR);
    let keys: Vec<String> = match rows.next() {
        Some(header) => header
            .select(&HEADER_SELECTOR)
            .map(|th| element_text(&th))
            .collect(),
        None => return Some(Vec::new()),
    };

    let entries = rows
        .filter_map(|row| {
            let values: Vec<String> = row
                .select(&CELL_SELECTOR)
                .map(|td| element_text(&td))
                .collect();
            // spacer and footer rows carry no data cells
            if values.is_empty() {
                return None;
            }
            let href = row
                .select(&LINK_SELECTOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string);
            Some(RawRow::new(keys.iter().cloned(), values, href))
        })
        .collect();

    Some(entries)
}

/// Client for the TDCJ offender search form.
pub struct SearchClient {
    transport: Arc<dyn FormTransport>,
    base_url: String,
    span: Span,
}

impl SearchClient {
    pub fn new(transport: Arc<dyn FormTransport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            span: tracing::info_span!("tdcj"),
        }
    }

    /// Emits every event of this client inside `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// Search by name fragments. The form does its own fuzzy matching, so the
    /// fragments go out unmodified.
    pub async fn query_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Vec<InmateRecord>, LookupError> {
        self.span
            .in_scope(|| debug!(first = %first, last = %last, "Querying with name"));
        self.query(&[("firstName", first), ("lastName", last)])
            .await
    }

    /// Exact lookup by TDCJ number.
    ///
    /// Invalid numbers are rejected before anything is sent. Several rows for
    /// one number means the source broke its uniqueness guarantee and is
    /// reported as [`LookupError::UpstreamInconsistency`].
    pub async fn query_by_identifier<T: fmt::Display>(
        &self,
        id: T,
    ) -> Result<Option<InmateRecord>, LookupError> {
        let id = self.span.in_scope(|| {
            format_identifier(id).inspect_err(|err| debug!(error = %err, "Rejected identifier"))
        })?;

        self.span.in_scope(|| debug!(id = %id, "Querying with ID"));
        let mut matches = self.query(&[("tdcj", id.as_str())]).await?;

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            count => Err(LookupError::UpstreamInconsistency { id, count }),
        }
    }

    async fn query(&self, fields: &[(&str, &str)]) -> Result<Vec<InmateRecord>, LookupError> {
        let request = PostRequest::form(self.search_url(), build_params(fields));
        self.fetch(&request).instrument(self.span.clone()).await
    }

    async fn fetch(&self, request: &PostRequest) -> Result<Vec<InmateRecord>, LookupError> {
        let body = self.transport.post(request).await?;

        let Some(rows) = parse_results_page(&body) else {
            return Ok(Vec::new());
        };

        let inmates = rows
            .iter()
            .map(|row| self.entry_to_inmate(row))
            .collect::<Result<Vec<_>, _>>()?;

        if inmates.is_empty() {
            debug!("No results returned");
        }
        Ok(inmates)
    }

    /// Normalizes one result row.
    pub fn entry_to_inmate(&self, row: &RawRow) -> Result<InmateRecord, LookupError> {
        let required = |column: &str| {
            row.get(column)
                .map(str::to_string)
                .ok_or_else(|| LookupError::MissingColumn(column.to_string()))
        };

        let id = required(COLUMN_NUMBER)?;
        let unit = required(COLUMN_UNIT)?;
        let release_text = required(COLUMN_RELEASE)?;

        let name = HumanName::parse(row.get(COLUMN_NAME).unwrap_or_default());

        let release = ReleaseDate::parse(&release_text, RELEASE_FORMAT);
        if let ReleaseDate::RawText(text) = &release {
            debug!(release = %text, "Failed to convert release date to date");
        }

        let inmate = InmateRecord {
            id,
            jurisdiction: Jurisdiction::Texas,
            first_name: name.first,
            last_name: name.last,
            unit: Some(unit),
            race: row.get(COLUMN_RACE).map(str::to_string),
            sex: row.get(COLUMN_GENDER).map(str::to_string),
            url: row.href().map(|href| format!("{}{}", self.base_url, href)),
            release,
            datetime_fetched: Utc::now(),
        };

        debug!(
            last = %inmate.last_name,
            first = %inmate.first_name,
            id = %inmate.id,
            "MATCHES"
        );

        Ok(inmate)
    }
}

#[async_trait]
impl InmateProvider for SearchClient {
    async fn query_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Vec<InmateRecord>, LookupError> {
        SearchClient::query_by_name(self, first, last).await
    }

    async fn query_by_identifier(&self, id: &str) -> Result<Option<InmateRecord>, LookupError> {
        SearchClient::query_by_identifier(self, id).await
    }

    fn format_identifier(&self, id: &str) -> Result<String, LookupError> {
        format_identifier(id)
    }

    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Texas
    }

    fn name(&self) -> &'static str {
        "TDCJ"
    }
}

#[cfg(test)]
#[path = "tdcj_test.rs"]
mod tests;
