//! Conversions from wire types to domain types for rate updates.

use super::wire::RateUpdateResponse;
use super::RateUpdate;
use crate::error::DecodeError;
use crate::shared::serde_util::secs_to_datetime;
use crate::shared::CurrencyKey;
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<RateUpdateResponse> for RateUpdate {
    type Error = DecodeError;

    fn try_from(r: RateUpdateResponse) -> Result<Self, Self::Error> {
        let rate = Decimal::from_str(&r.rate).map_err(|e| DecodeError::InvalidFixedPoint {
            input: r.rate.clone(),
            reason: e.to_string(),
        })?;
        let timestamp = r
            .timestamp
            .parse::<i64>()
            .ok()
            .and_then(secs_to_datetime)
            .ok_or_else(|| DecodeError::InvalidTimestamp(r.timestamp.clone()))?;

        Ok(Self {
            currency_key: CurrencyKey::from(r.currency_key),
            synth: CurrencyKey::from(r.synth),
            rate,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_update_conversion() {
        let update = RateUpdate::try_from(RateUpdateResponse {
            id: "0xabc-1".to_string(),
            currency_key: "sETH".to_string(),
            synth: "sETH".to_string(),
            rate: "2034.51".to_string(),
            timestamp: "1700000000".to_string(),
        })
        .unwrap();
        assert_eq!(update.rate, Decimal::new(203451, 2));
        assert_eq!(update.timestamp.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_bad_rate_fails() {
        let err = RateUpdate::try_from(RateUpdateResponse {
            id: "x".to_string(),
            currency_key: "sETH".to_string(),
            synth: "sETH".to_string(),
            rate: "NaN".to_string(),
            timestamp: "1".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidFixedPoint { .. }));
    }
}
