use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    config::DEFAULT_MAX_RETRIES,
    error::IlsError,
    info,
    types::{BibRecordResponse, BookEntry, MembersResponse},
    utils, warning,
};

/// Statuses answered by the library system while it is rejecting or
/// throttling a key; these are retried.
pub const RETRY_STATUSES: [StatusCode; 2] = [StatusCode::BAD_REQUEST, StatusCode::UNAUTHORIZED];
pub const DEFAULT_BACKOFF_FACTOR: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct BibliographicApi {
    client: Client,
    endpoint_url: String,
    api_key: String,
    format: String,
    max_retries: u32,
    backoff_factor: Duration,
    verbose: bool,
}

impl BibliographicApi {
    pub fn new(
        endpoint_url: impl Into<String>,
        api_key: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
            format: format.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            verbose: false,
        }
    }

    pub fn with_retry_policy(mut self, max_retries: u32, backoff_factor: Duration) -> Self {
        self.max_retries = max_retries;
        self.backoff_factor = backoff_factor;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Fetches every record of the configured set.
    ///
    /// Requests the member listing, then each member's detail record in
    /// listing order. Members without a link, and members whose detail
    /// request ends with a non-success status, are left out.
    ///
    /// # Errors
    ///
    /// - [`IlsError::Request`] on transport or decoding failures
    /// - [`IlsError::RetriesExhausted`] when 400/401 answers persist
    /// - [`IlsError::Status`] when the listing itself is rejected
    pub async fn get_records(&self) -> Result<Vec<BookEntry>, IlsError> {
        self.log(format_args!("Obtaining ILS member data from endpoint URL."));
        let response = self.get_with_retry(&self.endpoint_url).await?;
        if !response.status().is_success() {
            return Err(IlsError::Status {
                url: self.endpoint_url.clone(),
                status: response.status(),
            });
        }

        let members = response
            .json::<MembersResponse>()
            .await
            .map_err(IlsError::request)?;
        self.log(format_args!(
            "Total Record Count: {}",
            members.total_record_count
        ));

        let mut records = Vec::with_capacity(members.member.len());
        let mut index = 1;
        for member in members.member {
            let Some(link) = member.link.filter(|link| !link.is_empty()) else {
                continue;
            };

            self.log(format_args!("[Record {index}] Requesting {link}"));
            let response = self.get_with_retry(&link).await?;
            let status = response.status();
            self.log(format_args!("[Record {index}] Status Code {status}"));

            if status.is_success() {
                let record = response
                    .json::<BibRecordResponse>()
                    .await
                    .map_err(IlsError::request)?;
                let entry = BookEntry::from_record(&record);
                self.log(format_args!("[Record {index}]\n{entry}"));
                records.push(entry);
            } else if self.verbose {
                warning!("[Record {index}] Skipped, library system answered {status}");
            }

            index += 1;
        }

        Ok(records)
    }

    /// Sends a GET with the key and format parameters, retrying statuses in
    /// [`RETRY_STATUSES`]. Any other response is returned as is.
    async fn get_with_retry(&self, url: &str) -> Result<Response, IlsError> {
        let mut failures: u32 = 0;

        loop {
            let response = self
                .client
                .get(url)
                .query(&[("apikey", &self.api_key), ("format", &self.format)])
                .send()
                .await
                .map_err(IlsError::request)?;

            let status = response.status();
            if !RETRY_STATUSES.contains(&status) {
                return Ok(response);
            }

            failures += 1;
            if failures > self.max_retries {
                return Err(IlsError::RetriesExhausted {
                    url: url.to_string(),
                    status,
                    attempts: failures,
                });
            }

            let delay = utils::backoff_delay(self.backoff_factor, failures);
            if self.verbose {
                warning!(
                    "Library system answered {status}, retrying in {}s ({failures}/{})",
                    delay.as_secs_f32(),
                    self.max_retries
                );
            }
            sleep(delay).await;
        }
    }

    fn log(&self, message: std::fmt::Arguments<'_>) {
        if self.verbose {
            info!("{}", message);
        }
    }
}
