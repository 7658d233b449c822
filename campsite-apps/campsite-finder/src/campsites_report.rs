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

//! # Campsites Report
//!
//! Plain-text rendering of a search, one line per bookable site.

use crate::campsites_query_builder::{SearchDates, quote_plus};
use crate::campsites_results_parser::CampsiteSearchResult;

pub const NOTHING_FOUND: &str = "Nothing Found";

/// Report lines for `result`, or the single [`NOTHING_FOUND`] line.
///
/// The requested stay is appended to each booking URL so the link opens on
/// the searched dates.
pub fn render_bookings(result: &CampsiteSearchResult, dates: &SearchDates) -> Vec<String> {
    if result.is_empty() {
        return vec![NOTHING_FOUND.to_string()];
    }

    let stay = format!(
        "&arrivalDate={}&departureDate={}",
        quote_plus(&dates.arrival()),
        quote_plus(&dates.departure())
    );
    result
        .bookings()
        .map(|booking| format!("{}{}", booking, stay))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campsites_results_parser::Booking;

    fn dates() -> SearchDates {
        SearchDates::new("2024-07-04", Some("2024-07-05")).unwrap()
    }

    #[test]
    fn nothing_found() {
        let lines = render_bookings(&CampsiteSearchResult::default(), &dates());
        assert_eq!(lines, vec!["Nothing Found"]);
    }

    #[test]
    fn booking_lines_carry_stay() {
        let result = CampsiteSearchResult {
            bookings: vec![
                Booking {
                    name: "UPPER PINES".to_string(),
                    url: "https://www.recreation.gov/camping/campsites/12345?parkId=70925&other=1"
                        .to_string(),
                },
                Booking {
                    name: "NORTH PINES".to_string(),
                    url: "https://www.recreation.gov/camping/campsites/9?parkId=70927".to_string(),
                },
            ],
        };
        let lines = render_bookings(&result, &dates());
        assert_eq!(
            lines,
            vec![
                "UPPER PINES, Booking Url: https://www.recreation.gov/camping/campsites/12345?parkId=70925&other=1&arrivalDate=Thu+Jul+04+2024&departureDate=Fri+Jul+05+2024",
                "NORTH PINES, Booking Url: https://www.recreation.gov/camping/campsites/9?parkId=70927&arrivalDate=Thu+Jul+04+2024&departureDate=Fri+Jul+05+2024",
            ]
        );
    }
}
