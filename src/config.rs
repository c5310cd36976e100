//! Application configuration loaded from environment variables.
//!
//! Every value is optional and falls back to a default:
//! - `COINTRACK_ENDPOINT`: asset-listing URL
//! - `COINTRACK_REFRESH_MS`: refresh interval in milliseconds (default 30000)
//! - `COINTRACK_TRACKED_IDS`: comma-separated asset ids
//!   (default `bitcoin,ethereum,tether`)
//! - `COINTRACK_LOADING`: `every` or `first`: whether refreshes after the
//!   first one show the loading state
//! - `COINTRACK_LOG_FILE`: log destination while the dashboard owns the
//!   terminal (default `cointrack.log`)

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetcher::DEFAULT_ENDPOINT;
use crate::poller::{LoadingMode, PollerConfig};

/// Default log file used in dashboard mode.
const DEFAULT_LOG_FILE: &str = "cointrack.log";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub poll: PollerConfig,
    pub log_file: PathBuf,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`CointrackError::Config`](crate::CointrackError::Config) if the
/// refresh interval is not a positive integer, the tracked-id list is
/// empty after trimming, or the loading mode is unknown.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let endpoint =
        non_empty_var("COINTRACK_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let mut poll = PollerConfig::default();

    if let Some(raw) = non_empty_var("COINTRACK_REFRESH_MS") {
        poll.interval = parse_interval(&raw)?;
    }

    if let Some(raw) = non_empty_var("COINTRACK_TRACKED_IDS") {
        poll.tracked_ids = parse_tracked_ids(&raw)?;
    }

    if let Some(raw) = non_empty_var("COINTRACK_LOADING") {
        poll.loading = parse_loading_mode(&raw)?;
    }

    let log_file = non_empty_var("COINTRACK_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(AppConfig {
        endpoint,
        poll,
        log_file,
    })
}

fn parse_interval(raw: &str) -> crate::Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(crate::CointrackError::Config(format!(
            "COINTRACK_REFRESH_MS must be a positive integer, got {raw:?}"
        ))),
    }
}

fn parse_tracked_ids(raw: &str) -> crate::Result<HashSet<String>> {
    let ids: HashSet<String> = raw
        .split(',')
        .map(|id| id.trim().to_lowercase())
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        return Err(crate::CointrackError::Config(
            "COINTRACK_TRACKED_IDS does not name any asset".to_string(),
        ));
    }
    Ok(ids)
}

fn parse_loading_mode(raw: &str) -> crate::Result<LoadingMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "every" => Ok(LoadingMode::EveryCycle),
        "first" => Ok(LoadingMode::FirstCycleOnly),
        other => Err(crate::CointrackError::Config(format!(
            "COINTRACK_LOADING must be `every` or `first`, got {other:?}"
        ))),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
