use std::path::PathBuf;

use crate::{
    cli::{fetch_ordered, load_config},
    error,
    render::{PageRenderer, write_snapshot},
    success,
};

/// Renders the records page once and writes it to `output`.
pub async fn render(sort_method: Option<String>, output: PathBuf) {
    let config = load_config();
    let (records, order) = fetch_ordered(&config, sort_method.as_deref()).await;

    let html = match PageRenderer::new().and_then(|renderer| renderer.render(&records, order)) {
        Ok(html) => html,
        Err(e) => error!("Failed to render page. Err: {}", e),
    };

    if let Err(e) = write_snapshot(&output, &html).await {
        error!("Failed to write {}. Err: {}", output.display(), e);
    }

    success!(
        "Wrote {} records to {} ({}).",
        records.len(),
        output.display(),
        order.label()
    );
}
