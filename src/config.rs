//! Configuration management for shelfview.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/shelfview/.env`)
//! 4. Application defaults (where applicable)

use std::{env, io::ErrorKind, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::error::ConfigError;

/// Set members endpoint of the Alma configuration API.
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://api-na.hosted.exlibrisgroup.com/almaws/v1/conf/sets/15528919710002976/members";
pub const DEFAULT_FORMAT: &str = "json";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_RETRIES: u32 = 5;

pub const ENV_API_KEY: &str = "ILS_API_KEY";
pub const ENV_ENDPOINT_URL: &str = "ILS_ENDPOINT_URL";
pub const ENV_FORMAT: &str = "ILS_FORMAT";
pub const ENV_MAX_RETRIES: &str = "ILS_MAX_RETRIES";
pub const ENV_VERBOSE: &str = "ILS_VERBOSE";
pub const ENV_SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const ENV_SNAPSHOT: &str = "RESULTS_SNAPSHOT";

/// Loads environment variables from `.env` files.
///
/// Reads `.env` from the working directory and from the platform-specific
/// local data directory, creating the latter's parent directory if needed.
/// Missing files are skipped; variables already set are not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/shelfview/.env`
/// - macOS: `~/Library/Application Support/shelfview/.env`
/// - Windows: `%LOCALAPPDATA%/shelfview/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or a `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    skip_missing(dotenv::dotenv().map(|_| ()))?;

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shelfview/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    skip_missing(dotenv::from_path(path))
}

fn skip_missing(result: Result<(), dotenv::Error>) -> Result<(), String> {
    match result {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint_url: String,
    pub format: String,
    pub server_addr: SocketAddr,
    pub max_retries: u32,
    pub verbose: bool,
    pub snapshot_path: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            endpoint_url: get(ENV_ENDPOINT_URL).unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()),
            format: get(ENV_FORMAT).unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            server_addr: parse_or(
                ENV_SERVER_ADDRESS,
                get(ENV_SERVER_ADDRESS),
                DEFAULT_SERVER_ADDRESS,
            )?,
            max_retries: parse_or(
                ENV_MAX_RETRIES,
                get(ENV_MAX_RETRIES),
                &DEFAULT_MAX_RETRIES.to_string(),
            )?,
            verbose: match get(ENV_VERBOSE) {
                Some(value) => parse_flag(ENV_VERBOSE, &value)?,
                None => true,
            },
            snapshot_path: get(ENV_SNAPSHOT).map(PathBuf::from),
        })
    }

    /// Address of the rendered page, as opened in a browser.
    pub fn page_url(&self) -> String {
        format!("http://{}/", self.server_addr)
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = value.unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
