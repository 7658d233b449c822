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

//! # Recreation.gov Search Client
//!
//! Effectful (network) operations for recreation.gov campground search.
//!
//! The site keeps search filters in the server-side session, so one search is
//! four requests sharing a cookie jar:
//! 1. GET the results page to obtain a session cookie
//! 2. POST the location form
//! 3. POST the camping category form
//! 4. POST the dated search form, whose response carries the results

use anyhow::{Context, Result};
use thiserror::Error;
use wreq::redirect::Policy;
use wreq_util::Emulation;

use crate::campsites_query_builder::{
    BASE_URL, CAMPING_PAYLOAD, LOCATION_PAYLOAD, SearchDates, SearchPayload, UNIF_RESULTS,
    UNIF_SEARCH,
};
use crate::campsites_results_parser::CampsiteSearchResult;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampsiteSearchError {
    #[error("ERROR, {status} code received from {url}")]
    FailedRequest { status: u16, url: String },
}

#[derive(Debug, Clone)]
pub struct RecreationGovClient {
    base_url: String,
}

impl RecreationGovClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, UNIF_SEARCH)
    }

    pub fn results_url(&self) -> String {
        format!("{}{}", self.base_url, UNIF_RESULTS)
    }
}

impl Default for RecreationGovClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One cookie jar per search, dropped with the client.
fn build_session() -> Result<wreq::Client> {
    wreq::Client::builder()
        .emulation(Emulation::Safari18_5)
        .redirect(Policy::default())
        .cookie_store(true)
        .build()
        .context("Failed to build HTTP client")
}

async fn post_form(
    session: &wreq::Client,
    url: &str,
    payload: &SearchPayload,
) -> Result<wreq::Response> {
    session
        .post(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(payload.to_form_body())
        .send()
        .await
        .with_context(|| format!("POST {} failed", url))
}

impl RecreationGovClient {
    /// Runs the four-step search and returns the final response body.
    ///
    /// Only the final status is checked: anything but 200 is a
    /// [`CampsiteSearchError::FailedRequest`]. Nothing is retried.
    pub async fn fetch_raw(&self, payload: &SearchPayload) -> Result<String> {
        let session = build_session()?;
        let results_url = self.results_url();
        let search_url = self.search_url();
        let start = std::time::Instant::now();

        tracing::info!("Opening session at {}", results_url);
        let resp = session
            .get(&results_url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", results_url))?;
        tracing::debug!("[session] HTTP Status: {}", resp.status().as_u16());

        tracing::info!("Setting search location");
        let location = SearchPayload::from_template(LOCATION_PAYLOAD);
        let resp = post_form(&session, &search_url, &location).await?;
        tracing::debug!("[location] HTTP Status: {}", resp.status().as_u16());

        tracing::info!("Setting search category");
        let camping = SearchPayload::from_template(CAMPING_PAYLOAD);
        let resp = post_form(&session, &search_url, &camping).await?;
        tracing::debug!("[category] HTTP Status: {}", resp.status().as_u16());

        tracing::info!(
            "Searching {} to {}",
            payload.get("arrivalDate").unwrap_or("?"),
            payload.get("departureDate").unwrap_or("?")
        );
        let resp = post_form(&session, &search_url, payload).await?;
        let status = resp.status();
        tracing::debug!(
            "[search] HTTP Status: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );

        if status.as_u16() != 200 {
            return Err(CampsiteSearchError::FailedRequest {
                status: status.as_u16(),
                url: search_url,
            }
            .into());
        }

        let body = resp.text().await.context("Read body")?;
        tracing::debug!(
            "Search completed in {:?}: {} KB",
            start.elapsed(),
            body.len() / 1024
        );
        Ok(body)
    }

    pub async fn search_campsites(&self, dates: &SearchDates) -> Result<CampsiteSearchResult> {
        let html = self.fetch_raw(&dates.payload()).await?;
        let result = CampsiteSearchResult::from_html_with_base(&html, &self.base_url);

        if result.is_empty() && !html.contains("check_avail_panel") && html.len() > 1000 {
            tracing::warn!("Page may have changed - no availability panels found");
        }
        tracing::info!("Found {} whitelisted booking(s)", result.len());
        Ok(result)
    }
}
