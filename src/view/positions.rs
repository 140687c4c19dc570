//! Futures-positions table.

use super::cell::{Cell, PRICE_DECIMALS};
use super::sort::{sort_by_key, AbsentPolicy};
use super::table::{Column, Table};
use crate::domain::position::PositionRow;
use crate::error::TableError;

fn market_cell(r: &PositionRow) -> Cell {
    Cell::text(r.market_key.as_ref().unwrap_or(&r.asset).as_str())
}

fn side_cell(r: &PositionRow) -> Cell {
    Cell::from_option(r.side, |s| Cell::text(s.to_string()))
}

fn leverage_cell(r: &PositionRow) -> Cell {
    Cell::from_option(r.leverage, |l| {
        Cell::text(format!("{}x", l.round_dp(PRICE_DECIMALS)))
    })
}

pub fn position_columns() -> Vec<Column<PositionRow>> {
    vec![
        Column::new("market", "Market", market_cell),
        Column::new("side", "Side", side_cell),
        Column::new("size", "Size", |r: &PositionRow| Cell::amount(r.size))
            .sortable(sort_by_key(|r: &PositionRow| Some(r.size), AbsentPolicy::Last)),
        Column::new("notional", "Notional Value", |r: &PositionRow| {
            Cell::usd(r.notional_value)
        })
        .sortable(sort_by_key(
            |r: &PositionRow| Some(r.notional_value),
            AbsentPolicy::Last,
        )),
        Column::new("leverage", "Leverage", leverage_cell)
            .sortable(sort_by_key(|r: &PositionRow| r.leverage, AbsentPolicy::Last)),
        Column::new("pnl", "PnL", |r: &PositionRow| Cell::usd(r.pnl))
            .sortable(sort_by_key(|r: &PositionRow| Some(r.pnl), AbsentPolicy::Last)),
        Column::new("pnlPct", "PnL %", |r: &PositionRow| {
            Cell::from_option(r.pnl_pct, Cell::Percent)
        }),
        Column::new("entryPrice", "Avg Entry", |r: &PositionRow| {
            Cell::usd(r.entry_price)
        }),
        Column::new("lastPrice", "Last Price", |r: &PositionRow| {
            Cell::usd(r.last_price)
        }),
        Column::new("margin", "Margin", |r: &PositionRow| Cell::usd(r.margin)),
    ]
}

pub fn futures_positions_table(
    rows: Vec<PositionRow>,
    page_size: usize,
) -> Result<Table<PositionRow>, TableError> {
    Table::new(rows, position_columns(), page_size)
}
