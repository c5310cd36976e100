//! Periodic price tracker for a fixed set of crypto assets.
//!
//! Polls an asset-listing endpoint on a fixed cadence, keeps only the
//! tracked assets ordered by market-cap rank, and publishes the result as a
//! loading / ready / failed state to a subscriber such as the terminal
//! dashboard.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod models;
pub mod poller;
pub mod tui;

pub use error::{CointrackError, FetchError, Result};
