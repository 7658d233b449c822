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

//! Parsing tests against saved recreation.gov result pages.
//!
//! Run with:
//!     cargo test --test t_campsites_parsing_fixtures

use std::path::Path;

use campsite_finder::{CampsiteSearchResult, SearchDates, render_bookings};

fn load_fixture(name: &str) -> String {
    let fixtures_dir =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures-campsites-parsing");
    let fixture_path = fixtures_dir.join(format!("{}.html", name));

    std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}' at {:?}: {}",
            name, fixture_path, e
        )
    })
}

#[test]
fn test_parse_single_upper_pines() {
    let html = load_fixture("single-upper-pines");
    let result = CampsiteSearchResult::from_html(&html);

    assert_eq!(result.len(), 1, "Expected exactly one booking");
    assert_eq!(result.bookings[0].name, "UPPER PINES");
    assert_eq!(
        result.bookings[0].url,
        "https://www.recreation.gov/camping/campsites/12345?parkId=70925&other=1"
    );
}

#[test]
fn test_parse_not_whitelisted() {
    let html = load_fixture("not-whitelisted");
    let result = CampsiteSearchResult::from_html(&html);

    assert!(
        result.is_empty(),
        "parkId 99999 is not whitelisted, got {:?}",
        result.bookings
    );
}

#[test]
fn test_parse_no_panels_reports_nothing_found() {
    let html = load_fixture("no-panels");
    let result = CampsiteSearchResult::from_html(&html);
    assert!(result.is_empty());

    let dates = SearchDates::new("2024-07-04", None).expect("valid dates");
    assert_eq!(render_bookings(&result, &dates), vec!["Nothing Found"]);
}

#[test]
fn test_parse_mixed_results_in_document_order() {
    let html = load_fixture("mixed-results");
    let result = CampsiteSearchResult::from_html(&html);

    let names: Vec<&str> = result.bookings().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["NORTH PINES", "CRANE FLAT", "NORTH PINES"]);

    // Repeated campgrounds are kept, one line per panel
    assert_eq!(
        result.bookings[0].url,
        "https://www.recreation.gov/camping/North_Pines/r/campsiteDetails.do?siteId=1&contractCode=NRSO&parkId=70927"
    );
    assert_eq!(
        result.bookings[2].url,
        "https://www.recreation.gov/camping/North_Pines/r/campsiteDetails.do?siteId=4&contractCode=NRSO&parkId=70927"
    );
}

#[test]
fn test_parse_malformed_links() {
    let html = load_fixture("malformed-links");
    let result = CampsiteSearchResult::from_html(&html);

    // Only the href without '?' survives: the whole href is read as a query string
    assert_eq!(result.len(), 1, "got {:?}", result.bookings);
    assert_eq!(result.bookings[0].name, "STANISLAUS");
    assert_eq!(result.bookings[0].url, "https://www.recreation.govparkId=73635");
}

#[test]
fn test_report_lines_for_fixture() {
    let html = load_fixture("single-upper-pines");
    let result = CampsiteSearchResult::from_html(&html);
    let dates = SearchDates::new("2024-07-04", Some("2024-07-06")).expect("valid dates");

    let lines = render_bookings(&result, &dates);
    assert_eq!(
        lines,
        vec![
            "UPPER PINES, Booking Url: https://www.recreation.gov/camping/campsites/12345?parkId=70925&other=1&arrivalDate=Thu+Jul+04+2024&departureDate=Sat+Jul+06+2024"
        ]
    );
}
