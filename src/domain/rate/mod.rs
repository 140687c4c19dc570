//! Rate domain: exchange-rate updates from the rates indexer.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::CurrencyKey;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An on-chain exchange-rate update for a synth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateUpdate {
    pub currency_key: CurrencyKey,
    pub synth: CurrencyKey,
    pub rate: Decimal,
    pub timestamp: DateTime<Utc>,
}
