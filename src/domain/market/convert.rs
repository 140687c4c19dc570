//! Conversions from wire types to domain types for markets.

use super::wire::MarketResponse;
use super::FuturesMarket;
use crate::error::DecodeError;
use crate::shared::{parse_bytes32_string, CurrencyKey};

impl TryFrom<MarketResponse> for FuturesMarket {
    type Error = DecodeError;

    fn try_from(m: MarketResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            address: m.id.to_lowercase(),
            asset: CurrencyKey::new(parse_bytes32_string(&m.asset)?),
            market_key: CurrencyKey::new(parse_bytes32_string(&m.market_key)?),
            is_active: m.is_active,
        })
    }
}
