// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Corrections system an inmate record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    Texas,
    Federal,
}

impl Jurisdiction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::Texas => "Texas",
            Jurisdiction::Federal => "Federal",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "texas" | "tdcj" => Ok(Jurisdiction::Texas),
            "federal" | "fbop" => Ok(Jurisdiction::Federal),
            other => Err(format!("unknown jurisdiction: {}", other)),
        }
    }
}

/// Projected release as published by the source.
///
/// Sources mix real dates with placeholder text such as `LIFE` or
/// `DISCHARGED`; both shapes are kept so callers decide how to treat them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseDate {
    Date(NaiveDate),
    RawText(String),
}

impl ReleaseDate {
    /// Parses `raw` with the given `chrono` format, keeping the text on failure.
    pub fn parse(raw: &str, format: &str) -> Self {
        match NaiveDate::parse_from_str(raw, format) {
            Ok(date) => ReleaseDate::Date(date),
            Err(_) => ReleaseDate::RawText(raw.to_string()),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ReleaseDate::Date(date) => Some(*date),
            ReleaseDate::RawText(_) => None,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, ReleaseDate::Date(_))
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            ReleaseDate::RawText(text) => f.write_str(text),
        }
    }
}

/// One normalized search result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InmateRecord {
    pub id: String,
    pub jurisdiction: Jurisdiction,
    pub first_name: String,
    pub last_name: String,
    pub unit: Option<String>,
    pub race: Option<String>,
    pub sex: Option<String>,
    /// Absolute link to the source's detail page.
    pub url: Option<String>,
    pub release: ReleaseDate,
    /// When the record was captured, not part of the source data.
    pub datetime_fetched: DateTime<Utc>,
}
