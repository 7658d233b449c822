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

// Library for campsite-finder
// Availability checks for Yosemite campgrounds on recreation.gov

mod campsites_query_builder;
mod campsites_report;
mod campsites_results_parser;
mod campsites_search;

// Re-export campsites_query_builder
pub use campsites_query_builder::{
    BASE_URL, CAMPING_PAYLOAD, LOCATION_PAYLOAD, SEARCH_PAYLOAD, SearchDates, SearchPayload,
    UNIF_RESULTS, UNIF_SEARCH, format_date, generate_payload, next_day, parse_iso_date,
    quote_plus,
};

// Re-export campsites_results_parser
pub use campsites_results_parser::{
    Booking, CampsiteSearchResult, PARKS, park_name, parse_query_string,
};

// Re-export campsites_search
pub use campsites_search::{CampsiteSearchError, RecreationGovClient};

// Re-export campsites_report
pub use campsites_report::{NOTHING_FOUND, render_bookings};
