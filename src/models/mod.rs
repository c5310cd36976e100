//! Wire models for the asset-listing endpoint.

pub mod asset;

use serde::Deserialize;

pub use asset::AssetRecord;

/// Top-level body of `GET /v2/assets`.
///
/// The elements stay untyped so that a single malformed record can be
/// dropped without failing the whole listing.
#[derive(Debug, Deserialize)]
pub struct AssetListResponse {
    pub data: Vec<serde_json::Value>,
}
