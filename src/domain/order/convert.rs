//! Conversions from wire types to domain types for orders.

use super::wire::FuturesOrderResponse;
use super::{FuturesOrderType, OpenOrder};
use crate::error::DecodeError;
use crate::shared::serde_util::secs_to_datetime;
use crate::shared::{parse_bytes32_string, units, CurrencyKey, WalletAddress};

impl TryFrom<FuturesOrderResponse> for OpenOrder {
    type Error = DecodeError;

    fn try_from(o: FuturesOrderResponse) -> Result<Self, Self::Error> {
        let timestamp = o
            .timestamp
            .parse::<i64>()
            .ok()
            .and_then(secs_to_datetime)
            .ok_or_else(|| DecodeError::InvalidTimestamp(o.timestamp.clone()))?;

        Ok(Self {
            asset: CurrencyKey::from(parse_bytes32_string(&o.asset)?),
            size: units::parse_wei(&o.size)?,
            account: WalletAddress::from(o.account),
            order_type: FuturesOrderType::parse(&o.order_type),
            id: o.id,
            market: o.market,
            timestamp,
        })
    }
}
