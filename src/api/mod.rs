//! # API Module
//!
//! HTTP endpoints of the shelfview page server.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`: the records page. Reads the optional `sort_method`
//!   query parameter, fetches records from the library system, orders them
//!   and renders the page with the matching dropdown option selected. Any
//!   other query parameter is ignored.
//! - [`health`] - `GET /health`: application status and version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use shelfview::api::{health, index};
//!
//! let app = Router::new()
//!     .route("/", get(index))
//!     .route("/health", get(health))
//!     .layer(Extension(state));
//! ```

mod health;
mod index;

pub use health::health;
pub use index::PageQuery;
pub use index::index;
