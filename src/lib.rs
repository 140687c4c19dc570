//! # synth-dashboard
//!
//! Read models for a synth futures trading dashboard: typed subgraph queries behind a
//! deduplicating cache, unit normalization, derived rows and paginated table views.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared newtypes, domain models, networks, errors (no I/O)
//! 2. **Query**: Session gating, cache keys, `QueryState`, `QueryCache`
//! 3. **Transport**: GraphQL envelope + `GraphqlTransport` port; `SubgraphHttp` (feature `http`)
//! 4. **High-Level Client**: `DashboardClient` with nested sub-clients
//! 5. **Views**: Tables, cells, comparators and overview tabs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use synth_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder().build()?;
//! let ctx = SessionContext::ready(Network::new(NetworkId::OPTIMISM, "optimism"), true, true)
//!     .with_wallet("0xabc…");
//!
//! let orders = client.orders().open_orders(&ctx, Some(&"sETH".into())).await?;
//! let history = TradesHistory::load(&client, &ctx, Some(&"sETH".into()), 16).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, unit scaling, bytes32 codec and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network ids, endpoint resolution and explorer links.
pub mod network;

// ── Layer 2: Query ───────────────────────────────────────────────────────────

/// Session context every query is gated on.
pub mod context;

/// Cache keys, result states and the shared query cache.
pub mod query;

// ── Layer 3: Transport ───────────────────────────────────────────────────────

/// GraphQL request/response envelope and the transport port.
pub mod graphql;

/// HTTP transport with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient`: the primary entry point.
pub mod client;

// ── Layer 5: Views ───────────────────────────────────────────────────────────

/// Table models, cells, comparators and overview tabs.
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CurrencyKey, WalletAddress, NO_VALUE};

    // Session + networks
    pub use crate::context::SessionContext;
    pub use crate::network::{ChainClass, EndpointDomain, Network, NetworkId};

    // Domain types
    pub use crate::domain::balance::{BalanceRow, Rates, SynthBalance, SynthMetadata};
    pub use crate::domain::market::FuturesMarket;
    pub use crate::domain::order::{FuturesOrderType, OpenOrder};
    pub use crate::domain::position::{FuturesPosition, PositionRow, PositionSide};
    pub use crate::domain::price::Price;
    pub use crate::domain::rate::RateUpdate;
    pub use crate::domain::trade::{FuturesTrade, TradeRow};

    // Query layer
    pub use crate::query::{abortable, Aborted, QueryCache, QueryKey, QueryState};

    // Errors
    pub use crate::error::{QueryError, SdkError, UnsupportedNetworkError};

    // Client + sub-clients
    pub use crate::client::{
        DashboardClient, DashboardClientBuilder, MarketsClient, OrdersClient, PositionsClient,
        PricesClient, RatesClient, TradesClient,
    };
    pub use crate::graphql::GraphqlTransport;
    #[cfg(feature = "http")]
    pub use crate::http::{RetryConfig, RetryPolicy};

    // Views
    pub use crate::view::balances::{BalanceInputs, SynthBalances};
    pub use crate::view::trades::TradesHistory;
    pub use crate::view::{Cell, Overview, Table, TableBody};
}
