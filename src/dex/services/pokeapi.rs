//! # PokeAPI Client
//!
//! Typed access to the two endpoints the listing needs:
//!
//! - `GET {base_url}/pokemon?limit={n}` returns `{ results: [{ name, url }] }`
//! - `GET {detail_url}` returns a record with `sprites.front_default`
//!
//! Non-2xx statuses and undecodable bodies are reported as `FetchError`.

use crate::dex::models::{DetailPayload, Reference};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of collection and detail data
///
/// Production uses `HttpPokeApi`; tests plug in fakes that resolve on demand.
pub trait PokeApi: Send + Sync + 'static {
    /// Fetch the first `limit` references
    fn fetch_collection(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Reference>, FetchError>> + Send;

    /// Fetch the detail payload behind a reference's URL
    fn fetch_detail(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<DetailPayload, FetchError>> + Send;
}

#[derive(Debug, Deserialize)]
struct CollectionPage {
    results: Vec<Reference>,
}

#[derive(Debug, Deserialize)]
struct DetailRecord {
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

impl From<DetailRecord> for DetailPayload {
    fn from(record: DetailRecord) -> Self {
        Self {
            image_url: record.sprites.front_default,
        }
    }
}

/// PokeAPI client over reqwest
#[derive(Debug, Clone)]
pub struct HttpPokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPokeApi {
    /// Create a client for `base_url` (e.g. `https://pokeapi.co/api/v2`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        tracing::debug!("Creating PokeAPI client for {base_url}");
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokeline/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the collection endpoint, without the query string
    pub fn collection_url(&self) -> String {
        format!("{}/pokemon", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl PokeApi for HttpPokeApi {
    async fn fetch_collection(&self, limit: usize) -> Result<Vec<Reference>, FetchError> {
        let url = self.collection_url();
        let request = self.client.get(&url).query(&[("limit", limit)]);
        let page: CollectionPage = self.get_json(request, &url).await?;
        tracing::info!("Fetched {} references (limit {limit})", page.results.len());
        Ok(page.results)
    }

    async fn fetch_detail(&self, url: &str) -> Result<DetailPayload, FetchError> {
        let request = self.client.get(url);
        let record: DetailRecord = self.get_json(request, url).await?;
        Ok(record.into())
    }
}
