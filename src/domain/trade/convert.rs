//! Conversions from wire types to domain types for trades.
//!
//! Fields are converted independently: one malformed field becomes `None` without
//! discarding the rest of the row.

use super::wire::TradeResponse;
use super::FuturesTrade;
use crate::shared::serde_util::secs_to_datetime;
use crate::shared::units::{from_fixed_point, FIXED_POINT_DECIMALS};
use rust_decimal::Decimal;

fn fixed_point_field(name: &'static str, raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?;
    match from_fixed_point(raw, FIXED_POINT_DECIMALS) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(field = name, error = %e, "Dropping malformed trade field");
            None
        }
    }
}

impl From<TradeResponse> for FuturesTrade {
    fn from(t: TradeResponse) -> Self {
        Self {
            price: fixed_point_field("price", t.price.as_deref()),
            size: fixed_point_field("size", t.size.as_deref()),
            timestamp: t
                .timestamp
                .as_deref()
                .and_then(|s| s.parse::<i64>().ok())
                .and_then(secs_to_datetime),
            txn_hash: t
                .id
                .as_deref()
                .and_then(|id| id.split('-').next())
                .filter(|hash| !hash.is_empty())
                .map(str::to_string),
        }
    }
}
