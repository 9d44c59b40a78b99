use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{Extension, Router, routing::get};

use crate::{Res, api, config::Config, ils::BibliographicApi, render::PageRenderer};

/// State shared by all requests. Nothing in it changes between requests;
/// every page load fetches its records anew.
pub struct AppState {
    pub api: BibliographicApi,
    pub renderer: PageRenderer,
    pub snapshot_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(api: BibliographicApi, snapshot_path: Option<PathBuf>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            api,
            renderer: PageRenderer::new()?,
            snapshot_path,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, minijinja::Error> {
        let api = BibliographicApi::new(&config.endpoint_url, &config.api_key, &config.format)
            .with_retry_policy(config.max_retries, crate::ils::DEFAULT_BACKOFF_FACTOR)
            .verbose(config.verbose);
        Self::new(api, config.snapshot_path.clone())
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> Res<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
