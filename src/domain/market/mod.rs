//! Market domain: active futures markets.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::CurrencyKey;
use serde::{Deserialize, Serialize};

/// A futures market contract as indexed by the futures subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuturesMarket {
    /// Market contract address (lowercase hex), the subgraph entity id.
    pub address: String,
    /// Underlying synth, decoded from bytes32.
    pub asset: CurrencyKey,
    /// Market key, decoded from bytes32.
    pub market_key: CurrencyKey,
    pub is_active: bool,
}

/// Find a market by contract address, ignoring case.
pub fn find_by_address<'m>(markets: &'m [FuturesMarket], address: &str) -> Option<&'m FuturesMarket> {
    markets
        .iter()
        .find(|m| m.address.eq_ignore_ascii_case(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_address_ignores_case() {
        let markets = vec![FuturesMarket {
            address: "0xabcdef".to_string(),
            asset: "sETH".into(),
            market_key: "sETH".into(),
            is_active: true,
        }];
        assert!(find_by_address(&markets, "0xABCDEF").is_some());
        assert!(find_by_address(&markets, "0x123").is_none());
    }
}
