//! Conversions from wire types to domain types for lagged prices.

use super::wire::LaggedPriceResponse;
use super::Price;
use crate::error::DecodeError;
use crate::shared::CurrencyKey;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;

impl TryFrom<LaggedPriceResponse> for Price {
    type Error = DecodeError;

    fn try_from(r: LaggedPriceResponse) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&r.rate).map_err(|e| DecodeError::InvalidFixedPoint {
            input: r.rate.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            synth: CurrencyKey::from(r.synth),
            price,
        })
    }
}

/// Keep the first (newest) row per synth. Rows must be sorted by descending timestamp.
pub(crate) fn newest_per_synth(rows: Vec<LaggedPriceResponse>) -> Result<Vec<Price>, DecodeError> {
    let mut seen = HashSet::new();
    let mut prices = Vec::new();
    for row in rows {
        if seen.insert(row.synth.clone()) {
            prices.push(Price::try_from(row)?);
        }
    }
    Ok(prices)
}
