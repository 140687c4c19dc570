//! Wire types for the futures-markets subgraph query.

use serde::Deserialize;

pub const MARKETS_QUERY: &str = r#"
query FuturesMarkets {
  futuresMarkets(where: { isActive: true }) {
    id
    asset
    marketKey
    isActive
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketsResponse {
    pub futures_markets: Vec<MarketResponse>,
}

/// `asset` and `marketKey` are bytes32 hex strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResponse {
    pub id: String,
    pub asset: String,
    pub market_key: String,
    pub is_active: bool,
}
