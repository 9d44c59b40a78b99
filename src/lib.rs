//! Library System Sort Viewer
//!
//! This library renders bibliographic records fetched from a library system
//! (ILS) API as a single web page, ordered by a sort method that travels in
//! the page URL as the `sort_method` query parameter. A dropdown on the page
//! redirects the browser to the same origin with the newly chosen method.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the page and health endpoints
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared across the crate
//! - `ils` - Library system API client
//! - `redirect` - Sort redirect controller and its browser adapter
//! - `render` - HTML page rendering and snapshots
//! - `server` - HTTP server setup and shared state
//! - `sort` - Sort method tokens and record ordering
//! - `types` - Data structures and type definitions
//! - `utils` - Cleaning, sorting and retry helpers
//!
//! # Example
//!
//! ```
//! use shelfview::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> shelfview::Res<()> {
//!     config::load_env().await?;
//!     cli::serve(false).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod ils;
pub mod redirect;
pub mod render;
pub mod server;
pub mod sort;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the binary edge where errors of different modules meet. Library
/// code returns the typed errors from [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching records...");
/// info!("Total Record Count: {}", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal errors at the binary edge (CLI commands). Library and
/// request handling code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a failed snapshot write or a retried
/// upstream request.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
