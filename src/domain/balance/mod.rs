//! Balance domain: synth balances joined with rates, lagged prices and metadata.
//!
//! Balances, exchange rates and synth metadata are supplied by the caller (they come
//! from contract reads outside this crate). Only the lagged daily prices are queried
//! here, through [`crate::domain::price`].

use crate::domain::price::{find_price, Price};
use crate::shared::CurrencyKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current exchange rate per synth, in USD.
pub type Rates = HashMap<CurrencyKey, Decimal>;

/// A wallet's balance of one synth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthBalance {
    pub currency_key: CurrencyKey,
    pub balance: Decimal,
    pub usd_balance: Decimal,
}

/// Static synth description (e.g. `sETH` → `Ether`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthMetadata {
    pub name: CurrencyKey,
    pub description: String,
}

/// Lookups joined onto each balance. Any of them may be missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceJoins<'a> {
    pub rates: Option<&'a Rates>,
    pub lagged_prices: &'a [Price],
    pub metadata: Option<&'a HashMap<CurrencyKey, SynthMetadata>>,
}

/// One row of the synth-balances table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub synth: CurrencyKey,
    pub description: Option<String>,
    pub balance: Decimal,
    pub usd_balance: Decimal,
    pub price: Option<Decimal>,
    /// Fractional 24h change: `0.0909` is +9.09%.
    pub price_change: Option<Decimal>,
}

/// `(current - past) / current`.
///
/// `None` when either price is missing, the current price is zero, or the change
/// overflows.
pub fn price_change(current: Option<Decimal>, past: Option<&Price>) -> Option<Decimal> {
    let current = current?;
    let past = past?;
    if current.is_zero() {
        return None;
    }
    current.checked_sub(past.price)?.checked_div(current)
}

/// One row per balance, in input order.
pub fn map_balance_rows(balances: &[SynthBalance], joins: BalanceJoins<'_>) -> Vec<BalanceRow> {
    balances
        .iter()
        .map(|b| {
            let price = joins
                .rates
                .and_then(|rates| rates.get(&b.currency_key))
                .copied();
            let past = find_price(joins.lagged_prices, &b.currency_key);
            BalanceRow {
                synth: b.currency_key.clone(),
                description: joins
                    .metadata
                    .and_then(|m| m.get(&b.currency_key))
                    .map(|m| m.description.clone()),
                balance: b.balance,
                usd_balance: b.usd_balance,
                price,
                price_change: price_change(price, past),
            }
        })
        .collect()
}

/// Currency keys of `balances`, in order. Input for the lagged price query.
pub fn synth_names(balances: &[SynthBalance]) -> Vec<CurrencyKey> {
    balances.iter().map(|b| b.currency_key.clone()).collect()
}
