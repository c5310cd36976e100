//! Crate-level error types.
//!
//! [`CointrackError`] unifies the error sources of the application shell
//! (configuration, terminal and file I/O) behind a single enum so callers can
//! match on the variant they care about while still using `?`.
//!
//! [`FetchError`] is narrower: it classifies why one snapshot request
//! failed. The poller swallows it after logging, so it never reaches a
//! subscriber.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CointrackError>;

/// Top-level error type returned by the public shell APIs.
#[derive(Debug, thiserror::Error)]
pub enum CointrackError {
    /// An environment variable held a value that could not be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),
}

/// Failure classes for a single asset-listing request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure: DNS, connect, TLS, or a body read that broke off.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected http status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The body was not the expected `{ "data": [...] }` document.
    #[error("malformed response: {0}")]
    Parse(String),
}
