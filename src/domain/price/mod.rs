//! Price domain: lagged daily prices used for 24h change.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::CurrencyKey;
use chrono::{DateTime, Duration, DurationRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Most recent rate of `synth` at or before the lag cut-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub synth: CurrencyKey,
    pub price: Decimal,
}

/// How far back the lagged price looks.
pub const PRICE_LAG_HOURS: i64 = 24;

/// `now - 24h`, truncated to the hour so repeated calls within an hour share a key.
pub fn lag_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    let lagged = now - Duration::hours(PRICE_LAG_HOURS);
    lagged
        .duration_trunc(Duration::hours(1))
        .unwrap_or(lagged)
}

/// Find the lagged price for `synth`.
pub fn find_price<'p>(prices: &'p [Price], synth: &CurrencyKey) -> Option<&'p Price> {
    prices.iter().find(|p| &p.synth == synth)
}
