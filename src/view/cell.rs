//! Table cells and their text rendering.

use crate::shared::fmt::{format_currency, format_number, format_percent, time_ago};
use crate::shared::NO_VALUE;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Decimals for amounts (sizes, balances).
pub const AMOUNT_DECIMALS: u32 = 4;
/// Decimals for USD prices and values.
pub const PRICE_DECIMALS: u32 = 2;
/// Decimals for EUR forex prices.
pub const FOREX_PRICE_DECIMALS: u32 = 4;
/// Decimals for percentages.
pub const PERCENT_DECIMALS: u32 = 2;

const USD_SIGN: &str = "$";

/// A single table cell. Absent values are `NoValue`, rendered as the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Plain number with at least `min_decimals` decimals.
    Amount { value: Decimal, min_decimals: u32 },
    /// USD value with exactly `decimals` decimals.
    Price { value: Decimal, decimals: u32 },
    /// A fraction rendered as a signed percentage.
    Percent(Decimal),
    /// Relative time, evaluated at render time.
    TimeAgo(DateTime<Utc>),
    NoValue,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// `NoValue` for `None`, otherwise `f(value)`.
    pub fn from_option<T>(value: Option<T>, f: impl FnOnce(T) -> Cell) -> Self {
        value.map(f).unwrap_or(Cell::NoValue)
    }

    pub fn amount(value: Decimal) -> Self {
        Cell::Amount {
            value,
            min_decimals: AMOUNT_DECIMALS,
        }
    }

    pub fn usd(value: Decimal) -> Self {
        Cell::Price {
            value,
            decimals: PRICE_DECIMALS,
        }
    }

    pub fn is_no_value(&self) -> bool {
        matches!(self, Cell::NoValue)
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Amount {
                value,
                min_decimals,
            } => {
                let decimals = value.normalize().scale().max(*min_decimals);
                format_number(value, decimals)
            }
            Cell::Price { value, decimals } => format_currency(value, USD_SIGN, *decimals),
            Cell::Percent(fraction) => {
                format_percent(fraction, PERCENT_DECIMALS).unwrap_or_else(|| NO_VALUE.to_string())
            }
            Cell::TimeAgo(time) => time_ago(*time, now).unwrap_or_else(|| NO_VALUE.to_string()),
            Cell::NoValue => NO_VALUE.to_string(),
        }
    }
}
