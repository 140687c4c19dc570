//! Position domain: open futures positions for an account.

pub mod client;
mod convert;
pub mod wire;

use crate::domain::market::{find_by_address, FuturesMarket};
use crate::shared::{CurrencyKey, WalletAddress};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Side ────────────────────────────────────────────────────────────────────

/// Direction of a position, derived from the sign of its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionSide::Long => write!(f, "LONG"),
            PositionSide::Short => write!(f, "SHORT"),
        }
    }
}

// ─── FuturesPosition ─────────────────────────────────────────────────────────

/// A futures position. Magnitudes are already divided by the 1e18 unit scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturesPosition {
    pub id: String,
    /// Market contract address (lowercase).
    pub market: String,
    pub asset: CurrencyKey,
    pub account: WalletAddress,
    pub is_open: bool,
    pub is_liquidated: bool,
    /// Signed size in asset units.
    pub size: Decimal,
    pub margin: Decimal,
    pub entry_price: Decimal,
    pub last_price: Decimal,
    pub pnl: Decimal,
    pub fees_paid: Decimal,
    pub open_timestamp: DateTime<Utc>,
    pub close_timestamp: Option<DateTime<Utc>>,
}

impl FuturesPosition {
    /// `None` for a zero-size position.
    pub fn side(&self) -> Option<PositionSide> {
        if self.size.is_sign_positive() && !self.size.is_zero() {
            Some(PositionSide::Long)
        } else if self.size.is_sign_negative() && !self.size.is_zero() {
            Some(PositionSide::Short)
        } else {
            None
        }
    }

    /// `|size| * last_price`.
    pub fn notional_value(&self) -> Decimal {
        self.size.abs() * self.last_price
    }

    /// Notional over margin. `None` when the position has no margin.
    pub fn leverage(&self) -> Option<Decimal> {
        if self.margin.is_zero() {
            return None;
        }
        self.notional_value().checked_div(self.margin)
    }

    /// Profit and loss relative to margin. `None` when the position has no margin.
    pub fn pnl_pct(&self) -> Option<Decimal> {
        if self.margin.is_zero() {
            return None;
        }
        self.pnl.checked_div(self.margin)
    }
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One row of the futures-positions table: a position joined with its market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRow {
    pub asset: CurrencyKey,
    /// Market key of the joined market, `None` if the market is unknown.
    pub market_key: Option<CurrencyKey>,
    pub side: Option<PositionSide>,
    pub size: Decimal,
    pub notional_value: Decimal,
    pub leverage: Option<Decimal>,
    pub entry_price: Decimal,
    pub last_price: Decimal,
    pub pnl: Decimal,
    pub pnl_pct: Option<Decimal>,
    pub margin: Decimal,
}

/// One row per position, in input order, joined with its market by address.
pub fn map_position_rows(
    positions: &[FuturesPosition],
    markets: &[FuturesMarket],
) -> Vec<PositionRow> {
    positions
        .iter()
        .map(|p| PositionRow {
            asset: p.asset.clone(),
            market_key: find_by_address(markets, &p.market).map(|m| m.market_key.clone()),
            side: p.side(),
            size: p.size.abs(),
            notional_value: p.notional_value(),
            leverage: p.leverage(),
            entry_price: p.entry_price,
            last_price: p.last_price,
            pnl: p.pnl,
            pnl_pct: p.pnl_pct(),
            margin: p.margin,
        })
        .collect()
}
