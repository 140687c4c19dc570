//! Wire types for the futures-trades subgraph query.

use serde::Deserialize;

pub const TRADES_QUERY: &str = r#"
query FuturesTrades($currencyKey: String!, $first: Int!) {
  futuresTrades(
    where: { asset: $currencyKey }
    first: $first
    orderBy: timestamp
    orderDirection: desc
  ) {
    id
    timestamp
    account
    size
    asset
    price
    orderType
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesResponse {
    pub futures_trades: Vec<TradeResponse>,
}

/// Raw trade row. `id` is `<txHash>-<logIndex>`; `size`/`price` are 18-decimal
/// fixed-point integers. Every field is optional at this boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub order_type: Option<String>,
}
