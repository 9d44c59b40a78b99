//! # CLI Module
//!
//! Command implementations behind the `shelfview` binary.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the records page server, optionally opening it in the
//!   default browser
//! - [`records`] - Fetches the records and prints them as a table
//! - [`render`] - Fetches the records and writes the rendered page to a file
//!
//! Every command needs `ILS_API_KEY`; a missing or malformed configuration
//! stops the command with a message naming the offending variable.
//!
//! ## Usage Patterns
//!
//! ```bash
//! shelfview serve --open
//! shelfview records --sort-method descending_publish_date
//! shelfview render --sort-method ascending_publish_date --output results.html
//! ```

mod records;
mod render;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use records::records;
pub use render::render;
pub use serve::serve;

use crate::{
    config::Config,
    error,
    ils::{BibliographicApi, DEFAULT_BACKOFF_FACTOR},
    sort::RecordOrder,
    types::BookEntry,
};

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    }
}

/// Fetches the records for a one-shot command, behind a spinner. Verbose
/// request logging would interleave with the spinner, so it stays off here.
async fn fetch_ordered(config: &Config, sort_method: Option<&str>) -> (Vec<BookEntry>, RecordOrder) {
    let api = BibliographicApi::new(&config.endpoint_url, &config.api_key, &config.format)
        .with_retry_policy(config.max_retries, DEFAULT_BACKOFF_FACTOR);
    let order = RecordOrder::resolve(sort_method);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching records from library system...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let records = match api.get_records().await {
        Ok(records) => records,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch records. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    (order.apply(records), order)
}
