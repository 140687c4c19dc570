//! Session context: the wallet/session state every query is gated on.
//!
//! Passed explicitly into each query rather than read from global state, so tests can
//! inject whatever session they need.

use crate::network::{ChainClass, Network, NetworkId};
use crate::shared::WalletAddress;
use serde::{Deserialize, Serialize};

/// Snapshot of the wallet/session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub app_ready: bool,
    pub is_layer2: bool,
    pub network: Network,
    pub wallet_address: Option<WalletAddress>,
    pub is_mainnet: bool,
}

impl SessionContext {
    /// A ready session on the given network with no wallet connected.
    pub fn ready(network: Network, is_layer2: bool, is_mainnet: bool) -> Self {
        Self {
            app_ready: true,
            is_layer2,
            network,
            wallet_address: None,
            is_mainnet,
        }
    }

    pub fn with_wallet(mut self, wallet: impl Into<WalletAddress>) -> Self {
        self.wallet_address = Some(wallet.into());
        self
    }

    pub fn network_id(&self) -> NetworkId {
        self.network.id
    }

    pub fn chain_class(&self) -> ChainClass {
        ChainClass::from_is_mainnet(self.is_mainnet)
    }

    /// True when the session is on layer 2 and mainnet.
    pub fn is_l2_mainnet(&self) -> bool {
        self.is_layer2 && self.is_mainnet
    }

    /// Gate for queries against the futures indexer.
    pub fn layer2_ready(&self) -> bool {
        self.app_ready && self.is_layer2
    }

    /// The connected wallet, only if the layer-2 gate also holds.
    pub fn layer2_wallet(&self) -> Option<&WalletAddress> {
        if self.layer2_ready() {
            self.wallet_address.as_ref()
        } else {
            None
        }
    }
}
