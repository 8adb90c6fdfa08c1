//! One-shot catalog loader.
//!
//! The catalog is a static JSON resource fetched exactly once at startup.
//! There is no retry, no refresh endpoint, and no partial application: a
//! failed or malformed fetch is logged and the page runs on the empty
//! catalog it started with.

use goldenrod_core::Catalog;
use thiserror::Error;
use tracing::instrument;

/// Errors that can occur fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the static catalog resource.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a client for the given catalog URL.
    #[must_use]
    pub fn new(catalog_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: catalog_url.to_string(),
        }
    }

    /// Issue the single read request and parse the payload.
    ///
    /// The body is read as text first so parse failures can log a snippet
    /// of what the server actually sent.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a
    /// malformed payload.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog fetch returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        parse_catalog(&body)
    }

    /// Fetch the catalog, falling back to the empty catalog on any failure.
    ///
    /// This is the startup policy: log and continue. The page stays fully
    /// interactive with an empty catalog.
    pub async fn load_or_empty(&self) -> Catalog {
        match self.fetch().await {
            Ok(catalog) => {
                tracing::info!(
                    categories = catalog.categories.len(),
                    "Catalog loaded"
                );
                catalog
            }
            Err(e) => {
                tracing::error!("Failed to load catalog, starting empty: {e}");
                Catalog::default()
            }
        }
    }
}

/// Parse a catalog payload.
fn parse_catalog(body: &str) -> Result<Catalog, CatalogError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(200).collect::<String>(),
            "Failed to parse catalog payload"
        );
        CatalogError::Parse(e)
    })
}
