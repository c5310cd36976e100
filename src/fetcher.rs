//! Single-shot retrieval of the asset listing.
//!
//! [`HttpFetcher`] performs exactly one GET per call and classifies any
//! failure as a [`FetchError`]. There is no retry and no cache; the poller's
//! timer is the only thing that asks again.

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{AssetListResponse, AssetRecord};

/// Default asset-listing endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.coincap.io/v2/assets";

/// Anything that can produce one unfiltered asset listing.
///
/// The poller only depends on this trait, which lets tests drive it with
/// scripted sources instead of a live endpoint.
pub trait AssetSource: Send + Sync + 'static {
    /// Fetches the listing in server order.
    fn fetch(&self) -> impl Future<Output = Result<Vec<AssetRecord>, FetchError>> + Send;
}

/// Fetches the listing over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFetcher {
    /// Creates a fetcher for `endpoint` with a default client.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a fetcher that reuses an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AssetSource for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<AssetRecord>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        let records = parse_listing(&body)?;
        debug!(count = records.len(), "Fetched asset listing");
        Ok(records)
    }
}

/// Decodes a listing body into records, preserving server order.
///
/// Elements that are not objects with string `id`, `rank` and `name` are
/// dropped and logged. Numeric fields are not validated.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body is not JSON or has no `data`
/// array.
pub fn parse_listing(body: &[u8]) -> Result<Vec<AssetRecord>, FetchError> {
    let response: AssetListResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let records = response
        .data
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, value)| match serde_json::from_value::<AssetRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, "Dropping malformed asset record: {e}");
                    None
                }
            },
        )
        .collect();

    Ok(records)
}
