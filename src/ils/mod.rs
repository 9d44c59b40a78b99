//! # Library System Integration Module
//!
//! Client for the library system (ILS) API the page is built from. The
//! endpoint lists the members of a configured record set; each member links
//! to a detail record carrying bibliographic and holding data.
//!
//! ## Request Flow
//!
//! ```text
//! GET <endpoint>?apikey=..&format=json        -> member links + total count
//!   └── GET <member link>?apikey=..&format=json  (one per member)
//!         -> bib_data { title, author, isbn, date_of_publication }
//!            holding_data { call_number }
//! ```
//!
//! ## Error Handling
//!
//! - Status 400 and 401 are retried with exponential backoff (the first
//!   retry is immediate), five times by default
//! - A member whose detail request fails with any other status is skipped
//! - Transport errors drop the request URL, which contains the API key
//!
//! ## Usage
//!
//! ```rust,ignore
//! let api = BibliographicApi::new(endpoint_url, api_key, "json");
//! let records = api.get_records().await?;
//! ```

mod client;

pub use client::BibliographicApi;
pub use client::DEFAULT_BACKOFF_FACTOR;
pub use client::RETRY_STATUSES;
