//! Error types for configuration, the library system client, the redirect
//! controller and page rendering.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ILS_API_KEY is not set. Add it to the environment or the shelfview .env file")]
    MissingApiKey,

    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum IlsError {
    #[error("Request to library system failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Library system answered {status} for {url} after {attempts} attempts")]
    RetriesExhausted {
        url: String,
        status: reqwest::StatusCode,
        attempts: u32,
    },

    #[error("Library system answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl IlsError {
    /// Wraps a transport error without the request URL, which carries the
    /// API key as a query parameter.
    pub fn request(err: reqwest::Error) -> Self {
        IlsError::Request(err.without_url())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedirectError {
    #[error("Sort control #{id} not found in document")]
    ControlNotFound { id: String },

    #[error("Invalid origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Upstream(#[from] IlsError),

    #[error("Failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match self {
            PageError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            PageError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = format!(
            "<h2>Records unavailable.</h2><p>{}</p>",
            escape_text(&self.to_string())
        );
        (status, Html(body)).into_response()
    }
}

fn escape_text(text: &str) -> String {
    minijinja::HtmlEscape(text).to_string()
}
