//! Wire types for the lagged daily price query.

use serde::Deserialize;

/// Newest rate update of one synth at or before `$before`. Sent once per synth.
pub const LAGGED_DAILY_PRICE_QUERY: &str = r#"
query laggedDailyPrice($synth: String!, $before: BigInt!) {
  rateUpdates(
    where: { synth: $synth, timestamp_lte: $before }
    orderBy: timestamp
    orderDirection: desc
    first: 1
  ) {
    synth
    rate
    timestamp
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaggedPricesResponse {
    pub rate_updates: Vec<LaggedPriceResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaggedPriceResponse {
    pub synth: String,
    pub rate: String,
    pub timestamp: String,
}
