//! Character listing client
//!
//! Fetch failures never reach the caller: they are logged and replaced by an
//! empty page.

use super::models::CharactersResponse;
use crate::config::ApiConfig;
use crate::cursor::{FetchOutcome, PageSource};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Client for a paginated character listing
#[derive(Debug)]
pub struct CharacterApi {
    client: HttpClient,
    resource: String,
}

impl CharacterApi {
    /// Create an API over an existing HTTP client
    pub fn new(client: HttpClient, resource: impl Into<String>) -> Self {
        let resource: String = resource.into();
        Self {
            client,
            resource: resource.trim_matches('/').to_string(),
        }
    }

    /// Create an API from configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(config.http_config())?;
        Ok(Self::new(client, &config.resource))
    }

    /// Listing path relative to the base URL
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Fetch a page, surfacing any error
    ///
    /// `None` requests the listing without a `page` parameter (the API's first
    /// page).
    pub async fn try_fetch_characters(&self, page: Option<u32>) -> Result<CharactersResponse> {
        let mut request = RequestConfig::new();
        if let Some(page) = page {
            request = request.query("page", page.to_string());
        }

        let response: CharactersResponse = self
            .client
            .get_json_with_config(&self.resource, request)
            .await?;
        debug!(
            ?page,
            results = response.results.len(),
            "Fetched character page"
        );
        Ok(response)
    }

    /// Fetch a page, degrading to an empty page on error
    pub async fn fetch_characters(&self, page: Option<u32>) -> CharactersResponse {
        self.fetch_outcome(page).await.into_payload()
    }

    async fn fetch_outcome(&self, page: Option<u32>) -> FetchOutcome<CharactersResponse> {
        match self.try_fetch_characters(page).await {
            Ok(response) => FetchOutcome::Fetched(response),
            Err(e) => {
                warn!(?page, error = %e, "Error on response, returning an empty page");
                FetchOutcome::degraded(CharactersResponse::empty(), e.to_string())
            }
        }
    }
}

#[async_trait]
impl PageSource for CharacterApi {
    type Page = CharactersResponse;

    async fn fetch_page(&self, page: u32) -> FetchOutcome<CharactersResponse> {
        self.fetch_outcome(Some(page)).await
    }
}
