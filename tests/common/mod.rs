#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use shelfview::{ils::BibliographicApi, types::BookEntry};

pub const API_KEY: &str = "test-key";

struct MockState {
    base_url: String,
    records: Vec<Option<Value>>,
    listing_hits: AtomicUsize,
    listing_failures: AtomicUsize,
    listing_status: Option<StatusCode>,
}

/// In-process stand-in for the library system API.
///
/// `GET /members` lists one member per entry of `records` plus one member
/// without a link; `GET /bibs/{id}` answers the entry, or 404 for `None`.
/// Both require `apikey=test-key` and answer 401 otherwise.
pub struct MockIls {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockIls {
    pub async fn start(records: Vec<Option<Value>>) -> Self {
        Self::start_with(records, 0, None).await
    }

    /// `listing_failures` answers the listing with 400 that many times
    /// before succeeding; `listing_status` replaces the listing response.
    pub async fn start_with(
        records: Vec<Option<Value>>,
        listing_failures: usize,
        listing_status: Option<StatusCode>,
    ) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock ils");
        let base_url = format!("http://{}", listener.local_addr().expect("mock addr"));

        let state = Arc::new(MockState {
            base_url: base_url.clone(),
            records,
            listing_hits: AtomicUsize::new(0),
            listing_failures: AtomicUsize::new(listing_failures),
            listing_status,
        });

        let app = Router::new()
            .route("/members", get(members))
            .route("/bibs/{id}", get(bib))
            .with_state(Arc::clone(&state));

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock ils server");
        });

        Self { base_url, state }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/members", self.base_url)
    }

    pub fn listing_hits(&self) -> usize {
        self.state.listing_hits.load(Ordering::SeqCst)
    }

    pub fn api(&self, api_key: &str) -> BibliographicApi {
        BibliographicApi::new(self.endpoint(), api_key, "json").with_retry_policy(5, Duration::ZERO)
    }
}

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("apikey").map(String::as_str) == Some(API_KEY)
        && params.get("format").map(String::as_str) == Some("json")
}

async fn members(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.listing_hits.fetch_add(1, Ordering::SeqCst);

    if !authorized(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if let Some(status) = state.listing_status {
        return status.into_response();
    }
    if state
        .listing_failures
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
    {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let mut member: Vec<Value> = (0..state.records.len())
        .map(|id| json!({ "link": format!("{}/bibs/{}", state.base_url, id) }))
        .collect();
    member.push(json!({ "link": null }));

    Json(json!({
        "member": member,
        "total_record_count": state.records.len(),
    }))
    .into_response()
}

async fn bib(
    State(state): State<Arc<MockState>>,
    Path(id): Path<usize>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match state.records.get(id) {
        Some(Some(record)) => Json(record.clone()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn bib_record(title: &str, author: &str, isbn: &str, date: &str, call_number: &str) -> Value {
    json!({
        "bib_data": {
            "title": title,
            "author": author,
            "isbn": isbn,
            "date_of_publication": date,
        },
        "holding_data": {
            "call_number": call_number,
        },
    })
}

pub fn book(title: &str, date: &str) -> BookEntry {
    BookEntry {
        title: title.to_string(),
        author: "Author".to_string(),
        isbn: "N/A".to_string(),
        date_of_publication: date.to_string(),
        call_number: "QA76".to_string(),
    }
}

pub fn titles(records: &[BookEntry]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}
