//! Trade-history panel: the last N trades of a market.

use super::cell::{Cell, PRICE_DECIMALS};
use super::table::{Column, Table, TableBody};
use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::trade::{map_trade_rows, TradeRow};
use crate::error::{SdkError, TableError};
use crate::network::ChainClass;
use crate::shared::CurrencyKey;

fn amount_cell(row: &TradeRow) -> Cell {
    Cell::from_option(row.amount, |a| Cell::amount(a.abs()))
}

fn price_cell(row: &TradeRow) -> Cell {
    Cell::from_option(row.price, |value| Cell::Amount {
        value,
        min_decimals: PRICE_DECIMALS,
    })
}

fn time_cell(row: &TradeRow) -> Cell {
    Cell::from_option(row.time, Cell::TimeAgo)
}

pub fn trade_columns() -> Vec<Column<TradeRow>> {
    vec![
        Column::new("amount", "Amount", amount_cell),
        Column::new("price", "Price", price_cell),
        Column::new("time", "Time", time_cell),
    ]
}

/// Trade-history table. One page holds `number_of_trades` rows.
pub fn trades_history_table(
    rows: Vec<TradeRow>,
    number_of_trades: usize,
) -> Result<Table<TradeRow>, TableError> {
    Table::new(rows, trade_columns(), number_of_trades)
}

/// Loaded state of the trade-history panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TradesHistory {
    pub body: TableBody<TradeRow>,
    pub number_of_trades: u32,
    pub chain: ChainClass,
}

impl TradesHistory {
    pub async fn load(
        client: &DashboardClient,
        ctx: &SessionContext,
        currency_key: Option<&CurrencyKey>,
        number_of_trades: u32,
    ) -> Result<Self, SdkError> {
        let state = client
            .trades()
            .history(ctx, currency_key, number_of_trades)
            .await?;
        Ok(Self {
            body: TableBody::from_state_with(state, |trades| map_trade_rows(&trades)),
            number_of_trades,
            chain: ctx.chain_class(),
        })
    }

    pub fn table(&self) -> Result<Table<TradeRow>, TableError> {
        trades_history_table(self.body.rows().to_vec(), self.number_of_trades as usize)
    }

    /// Explorer link opened when `row` is clicked; `None` without a transaction id.
    pub fn row_link(&self, row: &TradeRow) -> Option<String> {
        row.explorer_url(self.chain)
    }
}
