//! Network identifiers, subgraph endpoint resolution and block-explorer links.

use crate::error::UnsupportedNetworkError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── NetworkId ───────────────────────────────────────────────────────────────

/// EVM chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u64);

impl NetworkId {
    pub const MAINNET: NetworkId = NetworkId(1);
    pub const KOVAN: NetworkId = NetworkId(42);
    pub const OPTIMISM: NetworkId = NetworkId(10);
    pub const OPTIMISM_KOVAN: NetworkId = NetworkId(69);

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A network as reported by the wallet/session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: NetworkId,
    pub name: String,
}

impl Network {
    pub fn new(id: impl Into<NetworkId>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
        }
    }
}

// ─── ChainClass ──────────────────────────────────────────────────────────────

/// Mainnet vs test network. Selects the block explorer used for outbound links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainClass {
    Mainnet,
    Testnet,
}

impl ChainClass {
    pub fn from_is_mainnet(is_mainnet: bool) -> Self {
        if is_mainnet {
            ChainClass::Mainnet
        } else {
            ChainClass::Testnet
        }
    }

    /// Base URL for transaction pages on this chain class.
    pub fn explorer_base(&self) -> &'static str {
        match self {
            ChainClass::Mainnet => OPTIMISM_EXPLORER,
            ChainClass::Testnet => OPTIMISM_KOVAN_EXPLORER,
        }
    }
}

pub const OPTIMISM_EXPLORER: &str = "https://optimistic.etherscan.io/tx";
pub const OPTIMISM_KOVAN_EXPLORER: &str = "https://kovan-optimistic.etherscan.io/tx";

/// Explorer page for a transaction hash.
pub fn explorer_tx_url(class: ChainClass, txn_hash: &str) -> String {
    format!("{}/{}", class.explorer_base(), txn_hash)
}

// ─── Endpoints ───────────────────────────────────────────────────────────────

/// Which indexer a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointDomain {
    /// Futures activity: orders, trades, positions, markets.
    Futures,
    /// Exchange-rate updates.
    Rates,
}

impl EndpointDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointDomain::Futures => "futures",
            EndpointDomain::Rates => "rates",
        }
    }
}

impl std::fmt::Display for EndpointDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const SUBGRAPH_BASE: &str = "https://api.thegraph.com/subgraphs/name/kwenta";

/// Built-in subgraph URL for a (domain, network) pair.
///
/// Futures indexers only exist on the Optimism networks.
pub fn resolve_endpoint(
    domain: EndpointDomain,
    network: NetworkId,
) -> Result<String, UnsupportedNetworkError> {
    let path = match (domain, network) {
        (EndpointDomain::Futures, NetworkId::OPTIMISM) => "optimism-main",
        (EndpointDomain::Futures, NetworkId::OPTIMISM_KOVAN) => "optimism-kovan-main",
        (EndpointDomain::Rates, NetworkId::MAINNET) => "mainnet-latest-rates",
        (EndpointDomain::Rates, NetworkId::KOVAN) => "kovan-latest-rates",
        (EndpointDomain::Rates, NetworkId::OPTIMISM) => "optimism-latest-rates",
        (EndpointDomain::Rates, NetworkId::OPTIMISM_KOVAN) => "optimism-kovan-latest-rates",
        _ => return Err(UnsupportedNetworkError { domain, network }),
    };
    Ok(format!("{}/{}", SUBGRAPH_BASE, path))
}

/// Endpoint table with per-(domain, network) overrides.
///
/// Overrides win over the built-in table; networks absent from both are unsupported.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    overrides: HashMap<(EndpointDomain, NetworkId), String>,
}

impl Endpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, domain: EndpointDomain, network: NetworkId, url: &str) {
        self.overrides
            .insert((domain, network), url.trim_end_matches('/').to_string());
    }

    pub fn resolve(
        &self,
        domain: EndpointDomain,
        network: NetworkId,
    ) -> Result<String, UnsupportedNetworkError> {
        match self.overrides.get(&(domain, network)) {
            Some(url) => Ok(url.clone()),
            None => resolve_endpoint(domain, network),
        }
    }
}
