//! Testing infrastructure for listing components
//!
//! Provides an in-memory `PokeApi` so view models, the dispatcher and the
//! controller can be exercised without network access. `GatedPokeApi` holds
//! each fetch until the test releases it, which lets tests choose the order
//! in which responses land.

use crate::dex::models::{DetailPayload, Reference};
use crate::dex::services::{FetchError, PokeApi};
use std::collections::HashMap;
use std::future::{ready, Future};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct FakeState {
    collection: Vec<Reference>,
    collection_failure: Option<u16>,
    details: HashMap<String, DetailPayload>,
    collection_calls: Vec<usize>,
    detail_calls: Vec<String>,
}

/// In-memory PokeAPI
///
/// Collection fetches return the first `limit` configured references. Detail
/// fetches for URLs without a configured payload fail with HTTP 404.
/// Clones share state, so a test can keep a handle after moving one into a
/// dispatcher.
#[derive(Debug, Clone, Default)]
pub struct FakePokeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakePokeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(references: Vec<Reference>) -> Self {
        let api = Self::new();
        api.set_collection(references);
        api
    }

    pub fn set_collection(&self, references: Vec<Reference>) {
        self.lock().collection = references;
    }

    /// Make collection fetches fail with `status` until `succeed_collection`
    pub fn fail_collection(&self, status: u16) {
        self.lock().collection_failure = Some(status);
    }

    pub fn succeed_collection(&self) {
        self.lock().collection_failure = None;
    }

    pub fn set_detail(&self, url: &str, payload: DetailPayload) {
        self.lock().details.insert(url.to_string(), payload);
    }

    /// Limits of every collection fetch so far
    pub fn collection_calls(&self) -> Vec<usize> {
        self.lock().collection_calls.clone()
    }

    /// URLs of every detail fetch so far
    pub fn detail_calls(&self) -> Vec<String> {
        self.lock().detail_calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl PokeApi for FakePokeApi {
    fn fetch_collection(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Reference>, FetchError>> + Send {
        let mut state = self.lock();
        state.collection_calls.push(limit);
        let result = match state.collection_failure {
            Some(status) => Err(FetchError::Status {
                status,
                url: format!("fake://pokemon?limit={limit}"),
            }),
            None => Ok(state.collection.iter().take(limit).cloned().collect()),
        };
        ready(result)
    }

    fn fetch_detail(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<DetailPayload, FetchError>> + Send {
        let mut state = self.lock();
        state.detail_calls.push(url.to_string());
        let result = state
            .details
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            });
        ready(result)
    }
}

/// `FakePokeApi` whose fetches wait for an explicit release
///
/// Each collection limit and each detail URL has its own gate. Releasing a
/// gate before the fetch reaches it is remembered, so release order is the
/// only thing that decides completion order.
#[derive(Debug, Clone, Default)]
pub struct GatedPokeApi {
    inner: FakePokeApi,
    gates: Arc<Mutex<HashMap<String, Arc<Notify>>>>,
}

impl GatedPokeApi {
    pub fn new(inner: FakePokeApi) -> Self {
        Self {
            inner,
            gates: Arc::default(),
        }
    }

    /// The underlying fake, for configuring data and reading call logs
    pub fn inner(&self) -> &FakePokeApi {
        &self.inner
    }

    /// Let the collection fetch for `limit` complete
    pub fn release_collection(&self, limit: usize) {
        self.gate(&collection_key(limit)).notify_one();
    }

    /// Let the detail fetch for `url` complete
    pub fn release_detail(&self, url: &str) {
        self.gate(url).notify_one();
    }

    fn gate(&self, key: &str) -> Arc<Notify> {
        let mut gates = self
            .gates
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::clone(gates.entry(key.to_string()).or_default())
    }
}

fn collection_key(limit: usize) -> String {
    format!("collection:{limit}")
}

impl PokeApi for GatedPokeApi {
    fn fetch_collection(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Reference>, FetchError>> + Send {
        let gate = self.gate(&collection_key(limit));
        let inner = self.inner.clone();
        async move {
            gate.notified().await;
            inner.fetch_collection(limit).await
        }
    }

    fn fetch_detail(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<DetailPayload, FetchError>> + Send {
        let gate = self.gate(url);
        let inner = self.inner.clone();
        let url = url.to_string();
        async move {
            gate.notified().await;
            inner.fetch_detail(&url).await
        }
    }
}
