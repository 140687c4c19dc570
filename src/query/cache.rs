//! Query cache with in-flight request sharing.
//!
//! One slot per [`QueryKey`]. A slot holds a `Shared` fetch future: the first caller
//! creates it, every caller with the same key awaits a clone of it. Whichever clone is
//! polled drives the fetch, so dropping one caller never cancels the request for the
//! others. A resolved slot is served until `stale_time` elapses, then replaced by a
//! fresh slot. Slots are only ever inserted, replaced or removed, never mutated in place.
//!
//! Failed fetches are handed to every waiter but not kept, so the next call retries.
//! Expired and failed slots under other keys are pruned whenever a slot is inserted.

use super::key::QueryKey;
use super::state::QueryState;
use crate::error::QueryError;

use async_lock::RwLock;
use futures_util::future::{self, BoxFuture, Either, Shared};
use futures_util::FutureExt;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default freshness window for cached results.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(60);

/// Default upper bound on a single fetch.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
struct Resolved {
    state: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
    failed: bool,
}

struct Slot {
    fetch: Shared<BoxFuture<'static, Resolved>>,
}

impl Slot {
    /// In flight, or resolved successfully within the freshness window.
    fn is_usable(&self, stale_time: Duration) -> bool {
        match self.fetch.peek() {
            None => true,
            Some(r) => !r.failed && r.fetched_at.elapsed() < stale_time,
        }
    }
}

/// Shared, keyed cache of query results. Cheap to clone.
#[derive(Clone)]
pub struct QueryCache {
    slots: Arc<RwLock<HashMap<QueryKey, Arc<Slot>>>>,
    stale_time: Duration,
    request_timeout: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME, DEFAULT_REQUEST_TIMEOUT)
    }
}

impl QueryCache {
    pub fn new(stale_time: Duration, request_timeout: Duration) -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
            stale_time,
            request_timeout,
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Resolve `key`, running `fetcher` only if no usable entry or in-flight fetch exists.
    ///
    /// `fetcher` yields `Ok(None)` for a successful fetch with no rows.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, QueryError>> + Send + 'static,
    {
        let slot = self.slot_for(&key, fetcher).await;
        let resolved = slot.fetch.clone().await;

        if resolved.failed {
            self.evict_slot(&key, &slot).await;
        }

        downcast::<T>(&key, &resolved)
    }

    /// Current state for `key` without fetching.
    ///
    /// `Loading` while a fetch is in flight, the cached state once resolved (even if
    /// stale), `Idle` if nothing was ever requested.
    pub async fn peek<T>(&self, key: &QueryKey) -> QueryState<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let slots = self.slots.read().await;
        match slots.get(key).map(|slot| slot.fetch.peek()) {
            None => QueryState::Idle,
            Some(None) => QueryState::Loading,
            Some(Some(resolved)) => downcast::<T>(key, resolved),
        }
    }

    /// Drop the entry for `key`; the next fetch goes to the network.
    pub async fn invalidate(&self, key: &QueryKey) {
        if self.slots.write().await.remove(key).is_some() {
            tracing::debug!(key = %key, "Query invalidated");
        }
    }

    /// Drop every entry whose key matches `predicate`.
    pub async fn invalidate_where(&self, predicate: impl Fn(&QueryKey) -> bool) -> usize {
        let mut slots = self.slots.write().await;
        let before = slots.len();
        slots.retain(|key, _| !predicate(key));
        let removed = before - slots.len();
        if removed > 0 {
            tracing::debug!(removed, "Queries invalidated");
        }
        removed
    }

    pub async fn clear(&self) {
        self.slots.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    async fn slot_for<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Arc<Slot>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, QueryError>> + Send + 'static,
    {
        {
            let slots = self.slots.read().await;
            if let Some(slot) = slots.get(key) {
                if slot.is_usable(self.stale_time) {
                    tracing::debug!(key = %key, "Query cache hit");
                    return slot.clone();
                }
            }
        }

        let mut slots = self.slots.write().await;
        if let Some(slot) = slots.get(key) {
            if slot.is_usable(self.stale_time) {
                return slot.clone();
            }
        }

        let before = slots.len();
        slots.retain(|_, slot| slot.is_usable(self.stale_time));
        let pruned = before - slots.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Pruned expired query slots");
        }

        tracing::debug!(key = %key, "Query cache miss, fetching");
        let slot = Arc::new(Slot {
            fetch: run_fetch(key.clone(), fetcher(), self.request_timeout)
                .boxed()
                .shared(),
        });
        slots.insert(key.clone(), slot.clone());
        slot
    }

    /// Remove `slot` if it is still the one stored under `key`.
    async fn evict_slot(&self, key: &QueryKey, slot: &Arc<Slot>) {
        let mut slots = self.slots.write().await;
        if slots.get(key).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            slots.remove(key);
        }
    }
}

async fn run_fetch<T, Fut>(key: QueryKey, fut: Fut, timeout: Duration) -> Resolved
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Option<T>, QueryError>>,
{
    let state = match with_timeout(fut, timeout).await {
        Some(Ok(value)) => QueryState::from_option(value),
        Some(Err(e)) => {
            tracing::warn!(key = %key, error = %e, "Query failed");
            QueryState::Error(e)
        }
        None => {
            let ms = timeout.as_millis() as u64;
            tracing::warn!(key = %key, timeout_ms = ms, "Query timed out");
            QueryState::Error(QueryError::Timeout(ms))
        }
    };
    Resolved {
        failed: state.is_error(),
        state: Arc::new(state),
        fetched_at: Instant::now(),
    }
}

fn downcast<T: Clone + 'static>(key: &QueryKey, resolved: &Resolved) -> QueryState<T> {
    match resolved.state.downcast_ref::<QueryState<T>>() {
        Some(state) => state.clone(),
        None => {
            tracing::warn!(key = %key, "Cached value has an unexpected type");
            QueryState::Error(QueryError::Decode(format!(
                "cache entry for {} has an unexpected type",
                key
            )))
        }
    }
}

/// Run `fut`, giving up after `timeout`. `None` on timeout.
pub async fn with_timeout<F: Future>(fut: F, timeout: Duration) -> Option<F::Output> {
    let fut = pin!(fut);
    match future::select(fut, futures_timer::Delay::new(timeout)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
