use tracing::{debug, instrument};

use crate::convert::parse_catalog;
use crate::error::CatalogError;
use crate::model::Item;

/// Default endpoint of a locally running content API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

const CATALOG_PATH: &str = "/api/vegetables?populate=*";

/// Client for the produce content API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the full catalog.
    ///
    /// Issues exactly one GET per call; no retry, no timeout. Transport
    /// failures, non-2xx statuses and undecodable bodies each surface as
    /// their own [`CatalogError`] variant.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_catalog(&self) -> Result<Vec<Item>, CatalogError> {
        debug!("Requesting catalog");

        let response = self
            .http
            .get(format!("{}{}", self.base_url, CATALOG_PATH))
            .send()
            .await?;

        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Received catalog response");

        parse_catalog(&body)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
