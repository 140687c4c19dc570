//! High-level client: `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared query cache, and accessor methods.

use crate::domain::market::client::Markets;
use crate::domain::order::client::Orders;
use crate::domain::position::client::Positions;
use crate::domain::price::client::Prices;
use crate::domain::rate::client::Rates;
use crate::domain::trade::client::Trades;
use crate::error::{QueryError, SdkError};
use crate::graphql::{self, GraphqlRequest, GraphqlTransport};
use crate::network::{EndpointDomain, Endpoints, NetworkId};
use crate::query::{QueryCache, QueryKey, QueryState, DEFAULT_REQUEST_TIMEOUT, DEFAULT_STALE_TIME};
use crate::shared::WalletAddress;

#[cfg(feature = "http")]
use crate::http::{RetryPolicy, SubgraphHttp};

use futures_util::future;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::position::client::Positions as PositionsClient;
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::rate::client::Rates as RatesClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for dashboard queries.
///
/// Provides nested sub-client accessors for each domain:
/// `client.orders()`, `client.trades()`, etc. Clones share the transport and cache.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) transport: Arc<dyn GraphqlTransport>,
    pub(crate) endpoints: Endpoints,
    pub(crate) cache: QueryCache,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn rates(&self) -> Rates<'_> {
        Rates { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ── Cache management ─────────────────────────────────────────────────

    /// Drop every cached entry for `network`.
    pub async fn invalidate_network(&self, network: NetworkId) -> usize {
        self.cache.invalidate_where(|k| k.network() == network).await
    }

    /// Drop every cached entry keyed on `wallet`.
    pub async fn invalidate_account(&self, wallet: &WalletAddress) -> usize {
        self.cache
            .invalidate_where(|k| k.involves_account(wallet))
            .await
    }

    pub async fn clear_all_caches(&self) {
        self.cache.clear().await;
    }

    // ── Query plumbing ───────────────────────────────────────────────────

    /// Run an enabled query through the cache.
    ///
    /// The endpoint is resolved before anything is fetched: an unsupported network is
    /// an `Err`, never a cached state. `convert` maps the decoded payload to
    /// `Some(rows)` or `None` for no rows.
    pub(crate) async fn query<W, T, C>(
        &self,
        domain: EndpointDomain,
        key: QueryKey,
        request: GraphqlRequest,
        convert: C,
    ) -> Result<QueryState<T>, SdkError>
    where
        W: DeserializeOwned + 'static,
        T: Clone + Send + Sync + 'static,
        C: FnOnce(W) -> Result<Option<T>, QueryError> + Send + 'static,
    {
        let endpoint = self.endpoints.resolve(domain, key.network())?;
        let transport = self.transport.clone();

        let state = self
            .cache
            .fetch(key, move || async move {
                let payload: W = graphql::execute(transport.as_ref(), &endpoint, &request).await?;
                convert(payload)
            })
            .await;
        Ok(state)
    }

    /// Like [`query`](Self::query), for several requests cached under one key.
    ///
    /// The requests run concurrently and `convert` receives the payloads in request
    /// order. Any failed request fails the whole entry.
    pub(crate) async fn query_batch<W, T, C>(
        &self,
        domain: EndpointDomain,
        key: QueryKey,
        requests: Vec<GraphqlRequest>,
        convert: C,
    ) -> Result<QueryState<T>, SdkError>
    where
        W: DeserializeOwned + Send + 'static,
        T: Clone + Send + Sync + 'static,
        C: FnOnce(Vec<W>) -> Result<Option<T>, QueryError> + Send + 'static,
    {
        let endpoint = self.endpoints.resolve(domain, key.network())?;
        let transport = self.transport.clone();

        let state = self
            .cache
            .fetch(key, move || async move {
                let pending = requests
                    .iter()
                    .map(|request| graphql::execute::<W>(transport.as_ref(), &endpoint, request));
                let payloads = future::try_join_all(pending).await?;
                convert(payloads)
            })
            .await;
        Ok(state)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    endpoints: Endpoints,
    stale_time: Duration,
    request_timeout: Duration,
    transport: Option<Arc<dyn GraphqlTransport>>,
    #[cfg(feature = "http")]
    retry: RetryPolicy,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::new(),
            stale_time: DEFAULT_STALE_TIME,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            transport: None,
            #[cfg(feature = "http")]
            retry: RetryPolicy::default(),
        }
    }
}

impl DashboardClientBuilder {
    /// Override the subgraph URL for one (domain, network) pair.
    pub fn endpoint(mut self, domain: EndpointDomain, network: NetworkId, url: &str) -> Self {
        self.endpoints.set(domain, network, url);
        self
    }

    /// How long a successful result is served before it is refetched.
    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Upper bound on a single fetch, retries included.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[cfg(feature = "http")]
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Use a custom transport instead of the built-in HTTP one.
    pub fn transport(mut self, transport: Arc<dyn GraphqlTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<DashboardClient, SdkError> {
        let transport = match self.transport {
            Some(t) => t,
            None => self.default_transport()?,
        };

        Ok(DashboardClient {
            transport,
            endpoints: self.endpoints,
            cache: QueryCache::new(self.stale_time, self.request_timeout),
        })
    }

    #[cfg(feature = "http")]
    fn default_transport(&self) -> Result<Arc<dyn GraphqlTransport>, SdkError> {
        Ok(Arc::new(SubgraphHttp::new(
            self.request_timeout,
            self.retry.clone(),
        )?))
    }

    #[cfg(not(feature = "http"))]
    fn default_transport(&self) -> Result<Arc<dyn GraphqlTransport>, SdkError> {
        Err(SdkError::Other(
            "no transport configured; enable the `http` feature or call `transport()`".to_string(),
        ))
    }
}
