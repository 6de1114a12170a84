//! Loading the collection from the static JSON resource.

use crate::dom;
use fallacy_core::{DATA_PATH, DataError, DataLoader, FallacyCollection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Invalid data: {0}")]
    Data(#[from] DataError),
}

/// Address the collection is fetched from.
#[must_use]
pub fn data_url() -> String {
    crate::paths::asset_path(DATA_PATH)
}

/// Fetch and parse the collection once. No retry: a failure is terminal.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a valid collection.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_collection(url: &str) -> Result<FallacyCollection, LoadError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|e| LoadError::Network(dom::js_error_message(&e)))?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let body = dom::response_text(&response)
        .await
        .map_err(|e| LoadError::Network(dom::js_error_message(&e)))?;
    let collection = FallacyCollection::from_json(&body)?;
    log::info!("loaded {} fallacies from {url}", collection.len());
    Ok(collection)
}

/// Loader backed by the copy of the resource compiled into the crate.
pub struct BundledLoader;

impl DataLoader for BundledLoader {
    type Error = LoadError;

    fn load_collection(&self) -> Result<FallacyCollection, Self::Error> {
        let json = include_str!("../static/fallacies.json");
        FallacyCollection::from_json(json).map_err(LoadError::Data)
    }
}
