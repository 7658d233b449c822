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
//!
//! # Examples
//!
//! ## One night
//!
//! ```bash
//! campsite-finder --start_date 2026-07-04
//! ```
//!
//! ## Longer stay with request logging
//!
//! ```bash
//! campsite-finder --start_date 2026-07-04 --end_date 2026-07-07 --verbose
//! ```
//!
//! ## Dry run (show forms only)
//!
//! ```bash
//! campsite-finder --start_date 2026-07-04 --dry_run
//! ```
//!
//! # Output
//!
//! One line per bookable whitelisted campground with its booking link,
//! or `Nothing Found`. Logs go to stderr.

use anyhow::{Context, Result};
use campsite_finder::{
    BASE_URL, CAMPING_PAYLOAD, CampsiteSearchResult, LOCATION_PAYLOAD, RecreationGovClient,
    SearchDates, SearchPayload, render_bookings,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "campsite-finder")]
#[command(author, version, about = "Find bookable Yosemite campsites on recreation.gov", long_about = None)]
struct CliArgs {
    /// Start date [YYYY-MM-DD]
    #[arg(long = "start_date")]
    start_date: String,

    /// End date [YYYY-MM-DD], defaults to the day after the start date
    #[arg(long = "end_date")]
    end_date: Option<String>,

    /// Verbose logging on stderr
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Print the endpoints and encoded forms without making requests
    #[arg(long = "dry_run")]
    dry_run: bool,

    /// Save the raw search response HTML to a file for debugging
    #[arg(long = "save_html")]
    save_html: bool,

    /// Site to query
    #[arg(long = "base_url", default_value = BASE_URL)]
    base_url: String,
}

/// Configure logging based on verbosity level; `RUST_LOG` takes precedence.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .init();
}

fn print_dry_run(client: &RecreationGovClient, dates: &SearchDates) {
    println!("GET  {}", client.results_url());
    for payload in [
        SearchPayload::from_template(LOCATION_PAYLOAD),
        SearchPayload::from_template(CAMPING_PAYLOAD),
        dates.payload(),
    ] {
        println!("POST {}\n     {}", client.search_url(), payload.to_form_body());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    tracing::debug!("Args: {:?}", args);

    let dates = SearchDates::new(&args.start_date, args.end_date.as_deref())?;
    tracing::info!("Searching {} to {}", dates.start_date, dates.end_date);

    let client = RecreationGovClient::with_base_url(args.base_url);

    if args.dry_run {
        print_dry_run(&client, &dates);
        return Ok(());
    }

    let result = if args.save_html {
        let html = client
            .fetch_raw(&dates.payload())
            .await
            .context("Fetch failed")?;
        let filename = format!("debug_campsites_{}_{}.html", dates.start_date, dates.end_date);
        std::fs::write(&filename, &html).context("Failed to write HTML file")?;
        tracing::info!("Saved HTML to {}", filename);

        CampsiteSearchResult::from_html_with_base(&html, client.base_url())
    } else {
        client
            .search_campsites(&dates)
            .await
            .context("Search failed")?
    };

    for line in render_bookings(&result, &dates) {
        println!("{}", line);
    }

    Ok(())
}
