//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the indexers send, so they can be used directly in wire types
//! without conversion overhead.

pub mod bytes32;
pub mod fmt;
pub mod serde_util;
pub mod units;

pub use bytes32::{format_bytes32_string, parse_bytes32_string};
pub use units::{div_eth_unit, from_fixed_point, ETH_UNIT};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Placeholder rendered wherever a value is absent.
pub const NO_VALUE: &str = "-";

// ─── CurrencyKey ─────────────────────────────────────────────────────────────

/// Synth currency key (e.g. `"sETH"`, `"sUSD"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyKey(String);

impl CurrencyKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// EUR forex synths are quoted with more decimals.
    pub fn is_eur_forex(&self) -> bool {
        self.0 == "sEUR"
    }
}

impl std::fmt::Display for CurrencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CurrencyKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CurrencyKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyKey(s.to_string()))
    }
}

impl Serialize for CurrencyKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CurrencyKey(s))
    }
}

// ─── WalletAddress ───────────────────────────────────────────────────────────

/// An EVM account address, stored lowercase.
///
/// Subgraphs index addresses in lowercase, and the address is part of cache keys,
/// so `0xABC…` and `0xabc…` must map to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(s: &str) -> Self {
        Self(s.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WalletAddress {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl Serialize for WalletAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(WalletAddress::new(&s))
    }
}
