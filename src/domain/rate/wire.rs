//! Wire types for rate-update queries.

use serde::Deserialize;

/// Newest update for one synth: descending timestamp, one row.
pub const LATEST_RATE_UPDATE_QUERY: &str = r#"
query rateUpdates($synth: String!) {
  rateUpdates(
    where: { synth: $synth }
    orderBy: timestamp
    orderDirection: desc
    first: 1
  ) {
    id
    currencyKey
    synth
    rate
    timestamp
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateUpdatesResponse {
    pub rate_updates: Vec<RateUpdateResponse>,
}

/// `rate` is a `BigDecimal` string (already in display units); `timestamp` is seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateUpdateResponse {
    pub id: String,
    pub currency_key: String,
    pub synth: String,
    pub rate: String,
    pub timestamp: String,
}
