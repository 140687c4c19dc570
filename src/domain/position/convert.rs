//! Conversions from wire types to domain types for positions.

use super::wire::PositionResponse;
use super::FuturesPosition;
use crate::error::DecodeError;
use crate::shared::serde_util::secs_to_datetime;
use crate::shared::units::{from_fixed_point, FIXED_POINT_DECIMALS};
use crate::shared::{parse_bytes32_string, CurrencyKey, WalletAddress};
use rust_decimal::Decimal;

fn scaled(raw: &str) -> Result<Decimal, DecodeError> {
    from_fixed_point(raw, FIXED_POINT_DECIMALS)
}

impl TryFrom<PositionResponse> for FuturesPosition {
    type Error = DecodeError;

    fn try_from(p: PositionResponse) -> Result<Self, Self::Error> {
        let close_timestamp = match p.close_timestamp.as_deref() {
            None => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .ok()
                    .and_then(secs_to_datetime)
                    .ok_or_else(|| DecodeError::InvalidTimestamp(raw.to_string()))?,
            ),
        };

        Ok(Self {
            id: p.id,
            market: p.market.to_lowercase(),
            asset: CurrencyKey::new(parse_bytes32_string(&p.asset)?),
            account: WalletAddress::new(&p.account),
            is_open: p.is_open,
            is_liquidated: p.is_liquidated,
            size: scaled(&p.size)?,
            margin: scaled(&p.margin)?,
            entry_price: scaled(&p.entry_price)?,
            last_price: scaled(&p.last_price)?,
            pnl: scaled(&p.pnl)?,
            fees_paid: scaled(&p.fees_paid)?,
            open_timestamp: p.open_timestamp,
            close_timestamp,
        })
    }
}
