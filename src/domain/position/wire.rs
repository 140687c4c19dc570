//! Wire types for the futures-positions subgraph query.

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const POSITIONS_QUERY: &str = r#"
query FuturesPositions($account: String!) {
  futuresPositions(where: { account: $account, isOpen: true }) {
    id
    lastTxHash
    timestamp
    openTimestamp
    closeTimestamp
    market
    asset
    account
    isOpen
    isLiquidated
    size
    margin
    entryPrice
    lastPrice
    pnl
    feesPaid
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsResponse {
    pub futures_positions: Vec<PositionResponse>,
}

/// Magnitudes are 18-decimal fixed-point integers; `asset` is `bytes32` hex.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub id: String,
    #[serde(default)]
    pub last_tx_hash: Option<String>,
    #[serde(with = "crate::shared::serde_util::timestamp_secs")]
    pub open_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub close_timestamp: Option<String>,
    pub market: String,
    pub asset: String,
    pub account: String,
    pub is_open: bool,
    pub is_liquidated: bool,
    pub size: String,
    pub margin: String,
    pub entry_price: String,
    pub last_price: String,
    pub pnl: String,
    pub fees_paid: String,
}
