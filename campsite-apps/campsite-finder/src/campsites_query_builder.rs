//!  Campsite Finder
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Campsites Query Builder
//!
//! Side-effect free construction of the recreation.gov search forms.
//! The three payload templates below mirror the site's own search form
//! field-for-field; the server rejects or silently ignores searches when
//! they drift.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

pub const BASE_URL: &str = "https://www.recreation.gov";
pub const UNIF_SEARCH: &str = "/unifSearch.do";
pub const UNIF_RESULTS: &str = "/unifSearchResults.do";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

// =============================================================================
// Form templates
// =============================================================================

/// Sets the search location to Yosemite.
pub const LOCATION_PAYLOAD: &[(&str, &str)] = &[
    ("currentMaximumWindow", "12"),
    ("locationCriteria", "yosemite"),
    ("interest", ""),
    ("locationPosition", ""),
    ("selectedLocationCriteria", ""),
    ("resetAllFilters", "false"),
    ("filtersFormSubmitted", "false"),
    ("glocIndex", "0"),
    (
        "googleLocations",
        "Yosemite National Park, Yosemite Village, CA 95389, USA|-119.53832940000001|37.8651011||LOCALITY",
    ),
];

/// Sets the search type to camping.
pub const CAMPING_PAYLOAD: &[(&str, &str)] = &[
    ("resetAllFilters", "false"),
    ("filtersFormSubmitted", "true"),
    ("sortBy", "RELEVANCE"),
    ("category", "camping"),
    ("selectedState", ""),
    ("selectedActivity", ""),
    ("selectedAgency", ""),
    ("interest", "camping"),
    ("usingCampingForm", "true"),
];

/// Runs the actual search once `arrivalDate` and `departureDate` are filled in.
pub const SEARCH_PAYLOAD: &[(&str, &str)] = &[
    ("resetAllFilters", "false"),
    ("filtersFormSubmitted", "true"),
    ("sortBy", "RELEVANCE"),
    ("category", "camping"),
    ("availability", "all"),
    ("interest", "camping"),
    ("usingCampingForm", "false"),
];

// =============================================================================
// Payloads
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPayload {
    fields: BTreeMap<String, String>,
}

impl SearchPayload {
    /// Owned copy of a template. The template itself is never touched.
    pub fn from_template(template: &[(&str, &str)]) -> Self {
        let fields = template
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { fields }
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", quote_plus(k), quote_plus(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encode with spaces as `+`, the way HTML forms are submitted.
pub fn quote_plus(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

// =============================================================================
// Dates
// =============================================================================

pub fn parse_iso_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, ISO_DATE_FORMAT)
        .with_context(|| format!("Invalid date: {}. Use YYYY-MM-DD", date))
}

/// `2024-07-04` -> `Thu Jul 04 2024`
pub fn format_date(date: &str) -> Result<String> {
    Ok(display_date(parse_iso_date(date)?))
}

fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// The ISO date one calendar day after `date`.
pub fn next_day(date: &str) -> Result<String> {
    let next = following_day(parse_iso_date(date)?)?;
    Ok(next.format(ISO_DATE_FORMAT).to_string())
}

fn following_day(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .with_context(|| format!("No calendar day after {}", date))
}

/// Copy of [`SEARCH_PAYLOAD`] with the stay dates in display form.
pub fn generate_payload(start: &str, end: &str) -> Result<SearchPayload> {
    Ok(build_payload(parse_iso_date(start)?, parse_iso_date(end)?))
}

fn build_payload(arrival: NaiveDate, departure: NaiveDate) -> SearchPayload {
    let mut payload = SearchPayload::from_template(SEARCH_PAYLOAD);
    payload.set("arrivalDate", display_date(arrival));
    payload.set("departureDate", display_date(departure));
    payload
}

/// The requested stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SearchDates {
    /// Parses both ISO dates; a missing end date means a one-night stay.
    pub fn new(start_date: &str, end_date: Option<&str>) -> Result<Self> {
        let start_date = parse_iso_date(start_date)?;
        let end_date = match end_date {
            Some(end) if !end.is_empty() => parse_iso_date(end)?,
            _ => following_day(start_date)?,
        };
        if end_date <= start_date {
            tracing::warn!(
                "End date {} is not after start date {}; the site will likely find nothing",
                end_date,
                start_date
            );
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn arrival(&self) -> String {
        display_date(self.start_date)
    }

    pub fn departure(&self) -> String {
        display_date(self.end_date)
    }

    pub fn payload(&self) -> SearchPayload {
        build_payload(self.start_date, self.end_date)
    }
}

// =============================================================================
// Tests
// =============================================================================
