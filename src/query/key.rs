//! Cache keys.
//!
//! Every parameter that changes a query's result is part of its key, so a network or
//! account switch can never be answered from another session's entry.

use crate::network::NetworkId;
use crate::shared::{CurrencyKey, WalletAddress};
use chrono::{DateTime, Utc};

/// Deterministic cache key: domain discriminator, network, then the query's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    domain: &'static str,
    network: NetworkId,
    params: Vec<String>,
}

impl QueryKey {
    pub fn new(domain: &'static str, network: NetworkId, params: Vec<String>) -> Self {
        Self {
            domain,
            network,
            params,
        }
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// True if `wallet` is one of this key's parameters.
    pub fn involves_account(&self, wallet: &WalletAddress) -> bool {
        self.params.iter().any(|p| p == wallet.as_str())
    }

    // ── Futures indexer ──────────────────────────────────────────────────

    pub fn open_orders(network: NetworkId, wallet: &WalletAddress) -> Self {
        Self::new("futures.openOrders", network, vec![wallet.to_string()])
    }

    pub fn trades(network: NetworkId, currency: &CurrencyKey, first: u32) -> Self {
        Self::new(
            "futures.trades",
            network,
            vec![currency.to_string(), first.to_string()],
        )
    }

    pub fn markets(network: NetworkId) -> Self {
        Self::new("futures.markets", network, Vec::new())
    }

    pub fn positions(network: NetworkId, wallet: &WalletAddress) -> Self {
        Self::new("futures.positions", network, vec![wallet.to_string()])
    }

    // ── Rates indexer ────────────────────────────────────────────────────

    pub fn latest_rate_update(network: NetworkId, currency: &CurrencyKey) -> Self {
        Self::new("rates.latestUpdate", network, vec![currency.to_string()])
    }

    /// Synths are sorted and deduplicated so the order callers pass them in does not
    /// split the cache.
    pub fn lagged_daily_price(
        network: NetworkId,
        synths: &[CurrencyKey],
        before: DateTime<Utc>,
    ) -> Self {
        let mut sorted: Vec<&CurrencyKey> = synths.iter().collect();
        sorted.sort();
        sorted.dedup();
        let mut params = vec![before.timestamp().to_string()];
        params.extend(sorted.into_iter().map(|s| s.to_string()));
        Self::new("rates.laggedDailyPrice", network, params)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.domain, self.network)?;
        for p in &self.params {
            write!(f, ":{}", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_differ_by_network() {
        let wallet = WalletAddress::from("0xabc");
        assert_ne!(
            QueryKey::open_orders(NetworkId::OPTIMISM, &wallet),
            QueryKey::open_orders(NetworkId::OPTIMISM_KOVAN, &wallet)
        );
    }

    #[test]
    fn test_keys_differ_by_account_and_domain() {
        let a = WalletAddress::from("0xaaa");
        let b = WalletAddress::from("0xbbb");
        let net = NetworkId::OPTIMISM;
        assert_ne!(QueryKey::open_orders(net, &a), QueryKey::open_orders(net, &b));
        assert_ne!(QueryKey::open_orders(net, &a), QueryKey::positions(net, &a));
    }

    #[test]
    fn test_trades_key_includes_limit() {
        let eth = CurrencyKey::from("sETH");
        let net = NetworkId::OPTIMISM;
        assert_ne!(QueryKey::trades(net, &eth, 16), QueryKey::trades(net, &eth, 32));
    }

    #[test]
    fn test_lagged_price_key_is_order_insensitive() {
        let before = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let net = NetworkId::OPTIMISM;
        let a = QueryKey::lagged_daily_price(net, &["sETH".into(), "sBTC".into()], before);
        let b = QueryKey::lagged_daily_price(net, &["sBTC".into(), "sETH".into(), "sETH".into()], before);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "rates.laggedDailyPrice:10:1700000000:sBTC:sETH");
    }

    #[test]
    fn test_involves_account() {
        let wallet = WalletAddress::from("0xABC");
        let key = QueryKey::positions(NetworkId::OPTIMISM, &wallet);
        assert!(key.involves_account(&WalletAddress::from("0xabc")));
        assert!(!QueryKey::markets(NetworkId::OPTIMISM).involves_account(&wallet));
    }
}
