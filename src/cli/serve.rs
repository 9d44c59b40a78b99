use std::sync::Arc;

use crate::{
    cli::load_config,
    error, info,
    server::{AppState, start_server},
    warning,
};

/// Runs the page server on the configured address until it fails.
///
/// With `open` set, the page is opened in the default browser once the
/// server task is running.
pub async fn serve(open: bool) {
    let config = load_config();

    let state = match AppState::from_config(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => error!("Failed to load page template. Err: {}", e),
    };

    let addr = config.server_addr;
    let server = tokio::spawn(async move { start_server(addr, state).await });
    info!("Serving records on {}", config.page_url());

    if open && webbrowser::open(&config.page_url()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            config.page_url()
        );
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Server stopped. Err: {}", e),
        Err(e) => error!("Server task failed. Err: {}", e),
    }
}
