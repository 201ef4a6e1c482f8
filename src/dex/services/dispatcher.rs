//! # Fetch Dispatcher
//!
//! Runs collection and detail fetches as tokio tasks and reports completions
//! through an unbounded channel, so the controller applies every result on
//! its own task without sharing state with the fetches.
//!
//! ```text
//! ListingViewModel ──▶ CollectionRequest/DetailRequest ──▶ FetchDispatcher
//!                                                             │ tokio::spawn
//!                                                             ▼
//! AppController ◀──────────── FetchMessage ◀──────────── PokeApi
//! ```
//!
//! Superseded work is aborted: a new collection fetch aborts the previous
//! one, and a new batch of detail fetches aborts the outstanding batch.

use super::pokeapi::{FetchError, PokeApi};
use crate::dex::events::{ItemId, RequestTag};
use crate::dex::models::{DetailPayload, Reference};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::AbortHandle;

/// A collection fetch issued by the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionRequest {
    pub tag: RequestTag,
}

impl CollectionRequest {
    pub fn size(&self) -> usize {
        self.tag.size
    }
}

/// A detail fetch issued by one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub item_id: ItemId,
    pub url: String,
}

/// Completion of a background fetch
#[derive(Debug)]
pub enum FetchMessage {
    Collection {
        tag: RequestTag,
        result: Result<Vec<Reference>, FetchError>,
    },
    Detail {
        item_id: ItemId,
        result: Result<DetailPayload, FetchError>,
    },
}

/// Spawns fetch tasks against a `PokeApi`
pub struct FetchDispatcher<A: PokeApi> {
    api: Arc<A>,
    sender: mpsc::UnboundedSender<FetchMessage>,
    detail_permits: Arc<Semaphore>,
    collection_task: Option<AbortHandle>,
    detail_tasks: Vec<AbortHandle>,
}

impl<A: PokeApi> FetchDispatcher<A> {
    /// Create a dispatcher and the receiving end of its completion channel
    ///
    /// At most `detail_concurrency` detail fetches run at once.
    pub fn new(api: A, detail_concurrency: usize) -> (Self, mpsc::UnboundedReceiver<FetchMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let dispatcher = Self {
            api: Arc::new(api),
            sender,
            detail_permits: Arc::new(Semaphore::new(detail_concurrency.max(1))),
            collection_task: None,
            detail_tasks: Vec::new(),
        };
        (dispatcher, receiver)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Start a collection fetch, aborting any collection fetch still running
    pub fn dispatch_collection(&mut self, request: CollectionRequest) {
        if let Some(previous) = self.collection_task.take() {
            if !previous.is_finished() {
                tracing::debug!("Aborting superseded collection fetch");
            }
            previous.abort();
        }

        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        let tag = request.tag;
        tracing::debug!("Dispatching collection fetch {:?}", tag);

        let handle = tokio::spawn(async move {
            let result = api.fetch_collection(tag.size).await;
            // Receiver gone means the controller shut down
            let _ = sender.send(FetchMessage::Collection { tag, result });
        });
        self.collection_task = Some(handle.abort_handle());
    }

    /// Start detail fetches for a freshly built set of items
    ///
    /// Fetches from the previous batch belong to torn-down items and are
    /// aborted first.
    pub fn replace_details(&mut self, requests: Vec<DetailRequest>) {
        self.cancel_details();
        tracing::debug!("Dispatching {} detail fetches", requests.len());

        for request in requests {
            let api = Arc::clone(&self.api);
            let sender = self.sender.clone();
            let permits = Arc::clone(&self.detail_permits);

            let handle = tokio::spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return;
                };
                let result = api.fetch_detail(&request.url).await;
                let _ = sender.send(FetchMessage::Detail {
                    item_id: request.item_id,
                    result,
                });
            });
            self.detail_tasks.push(handle.abort_handle());
        }
    }

    /// Abort every outstanding detail fetch
    pub fn cancel_details(&mut self) {
        let aborted = self
            .detail_tasks
            .drain(..)
            .filter(|task| !task.is_finished())
            .inspect(AbortHandle::abort)
            .count();
        if aborted > 0 {
            tracing::debug!("Aborted {aborted} detail fetches");
        }
    }

    /// Number of fetch tasks that have not finished yet
    pub fn in_flight(&self) -> usize {
        let collection = self
            .collection_task
            .as_ref()
            .is_some_and(|task| !task.is_finished());
        let details = self
            .detail_tasks
            .iter()
            .filter(|task| !task.is_finished())
            .count();
        details + usize::from(collection)
    }
}

impl<A: PokeApi> Drop for FetchDispatcher<A> {
    fn drop(&mut self) {
        if let Some(task) = self.collection_task.take() {
            task.abort();
        }
        self.cancel_details();
    }
}
