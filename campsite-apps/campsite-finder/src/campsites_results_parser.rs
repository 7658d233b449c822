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

//! # Campsites Results Parser
//!
//! Side-effect free HTML parsing for recreation.gov search results.
//! Raw HTML in, whitelisted bookings out: everything that knows about the
//! site's markup lives here.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::campsites_query_builder::BASE_URL;

/// Campgrounds worth sleeping at, keyed by recreation.gov `parkId`.
pub const PARKS: &[(&str, &str)] = &[
    ("70925", "UPPER PINES"),
    ("70926", "TUOLOMNE MEADOWS"),
    ("70927", "NORTH PINES"),
    ("70928", "LOWER PINES"),
    ("70929", "HODGDON MEADOW"),
    ("70930", "CRANE FLAT"),
    ("73635", "STANISLAUS"),
];

pub fn park_name(park_id: &str) -> Option<&'static str> {
    PARKS
        .iter()
        .find(|(id, _)| *id == park_id)
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub name: String,
    pub url: String,
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Booking Url: {}", self.name, self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampsiteSearchResult {
    pub bookings: Vec<Booking>,
}

static AVAILABILITY_PANEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div.check_avail_panel"#).unwrap());
static BOOK_NOW: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"a.book_now"#).unwrap());

impl CampsiteSearchResult {
    pub fn from_html(html: &str) -> Self {
        Self::from_html_with_base(html, BASE_URL)
    }

    /// Bookings in document order. The same site listed twice yields two bookings.
    pub fn from_html_with_base(html: &str, base_url: &str) -> Self {
        let document = Html::parse_document(html);
        let mut bookings = Vec::new();

        for panel in document.select(&AVAILABILITY_PANEL) {
            let Some(link) = panel.select(&BOOK_NOW).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                tracing::debug!("book_now link without href, skipping");
                continue;
            };

            let query = match href.find('?') {
                Some(pos) => &href[pos + 1..],
                None => href,
            };
            if query.is_empty() {
                continue;
            }

            let params = parse_query_string(query);
            let Some(park_id) = params.get("parkId").and_then(|ids| ids.first()) else {
                tracing::debug!("No parkId in {}", href);
                continue;
            };
            let Some(name) = park_name(park_id) else {
                tracing::trace!("parkId {} not in whitelist", park_id);
                continue;
            };

            bookings.push(Booking {
                name: name.to_string(),
                url: format!("{}{}", base_url, href),
            });
        }

        Self { bookings }
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Decode a query string into key -> values.
///
/// Pairs are separated by `&` or `;`. Pairs without `=` and pairs with an
/// empty value are dropped. `+` decodes to a space before percent-decoding.
pub fn parse_query_string(query: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();

    for pair in query.split(['&', ';']) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        params
            .entry(unquote_plus(key))
            .or_default()
            .push(unquote_plus(value));
    }

    params
}

fn unquote_plus(s: &str) -> String {
    let spaced = s.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
