use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};
use serde::Deserialize;

use crate::{error::PageError, render, server::AppState, sort::RecordOrder, warning};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub sort_method: Option<String>,
}

pub async fn index(
    Query(query): Query<PageQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let order = RecordOrder::resolve(query.sort_method.as_deref());

    let records = state.api.get_records().await?;
    let html = state.renderer.render(&order.apply(records), order)?;

    if let Some(path) = &state.snapshot_path {
        if let Err(e) = render::write_snapshot(path, &html).await {
            warning!("Failed to write page snapshot to {}: {}", path.display(), e);
        }
    }

    Ok(Html(html))
}
