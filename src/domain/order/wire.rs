//! Wire types for the futures-orders subgraph query.

use serde::Deserialize;

pub const OPEN_ORDERS_QUERY: &str = r#"
query OpenOrders($account: String!) {
  futuresOrders(where: { account: $account, status: Pending }) {
    id
    account
    size
    market
    asset
    timestamp
    orderType
  }
}
"#;

/// `data` payload of `OpenOrders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrdersResponse {
    pub futures_orders: Vec<FuturesOrderResponse>,
}

/// A single order row. `size` is Wei, `asset` is `bytes32` hex, `timestamp` is seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrderResponse {
    pub id: String,
    pub account: String,
    pub size: String,
    pub market: String,
    pub asset: String,
    pub timestamp: String,
    pub order_type: String,
}
