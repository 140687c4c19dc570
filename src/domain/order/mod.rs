//! Order domain: pending futures orders for an account.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{CurrencyKey, WalletAddress};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── FuturesOrderType ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuturesOrderType {
    NextPrice,
    Limit,
    Stop,
    Market,
    /// A type this crate does not know yet, kept verbatim.
    Other(String),
}

impl FuturesOrderType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "NextPrice" => FuturesOrderType::NextPrice,
            "Limit" => FuturesOrderType::Limit,
            "Stop" => FuturesOrderType::Stop,
            "Market" => FuturesOrderType::Market,
            other => FuturesOrderType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for FuturesOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FuturesOrderType::NextPrice => write!(f, "Next-Price"),
            FuturesOrderType::Limit => write!(f, "Limit"),
            FuturesOrderType::Stop => write!(f, "Stop"),
            FuturesOrderType::Market => write!(f, "Market"),
            FuturesOrderType::Other(s) => write!(f, "{}", s),
        }
    }
}

// ─── OpenOrder ───────────────────────────────────────────────────────────────

/// A pending futures order, as indexed. Snapshots are refetched, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub id: String,
    pub account: WalletAddress,
    /// Signed size in asset units (negative = short).
    pub size: Decimal,
    /// Market contract address.
    pub market: String,
    pub asset: CurrencyKey,
    pub timestamp: DateTime<Utc>,
    pub order_type: FuturesOrderType,
}
