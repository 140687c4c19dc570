//! Trade domain: executed futures trades for a market.

pub mod client;
mod convert;
pub mod wire;

use crate::network::{explorer_tx_url, ChainClass};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of trades the history panel asks for by default.
pub const DEFAULT_TRADES_LIMIT: u32 = 16;

/// A futures trade. Every field may be missing from the indexer; `None` is the
/// "no value" marker and renders as the placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturesTrade {
    /// Fill price in quote units.
    pub price: Option<Decimal>,
    /// Signed size in asset units (negative = sell).
    pub size: Option<Decimal>,
    pub timestamp: Option<DateTime<Utc>>,
    pub txn_hash: Option<String>,
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One row of the trade-history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRow {
    pub price: Option<Decimal>,
    /// Signed: positive is a buy, negative a sell.
    pub amount: Option<Decimal>,
    pub time: Option<DateTime<Utc>>,
    pub id: Option<String>,
}

impl TradeRow {
    /// `None` when the amount is absent.
    pub fn is_buy(&self) -> Option<bool> {
        self.amount.map(|a| a.is_sign_positive() && !a.is_zero())
    }

    /// Block-explorer page for this trade's transaction. `None` when the id is absent.
    pub fn explorer_url(&self, class: ChainClass) -> Option<String> {
        self.id.as_deref().map(|hash| explorer_tx_url(class, hash))
    }
}

impl From<&FuturesTrade> for TradeRow {
    fn from(t: &FuturesTrade) -> Self {
        Self {
            price: t.price,
            amount: t.size,
            time: t.timestamp,
            id: t.txn_hash.clone(),
        }
    }
}

/// One row per trade, in input order.
pub fn map_trade_rows(trades: &[FuturesTrade]) -> Vec<TradeRow> {
    trades.iter().map(TradeRow::from).collect()
}
