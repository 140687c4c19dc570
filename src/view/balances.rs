//! Synth-balances table: wallet balances with oracle price and 24h change.

use super::cell::{Cell, FOREX_PRICE_DECIMALS, PRICE_DECIMALS};
use super::sort::{sort_by_key, AbsentPolicy};
use super::table::{Column, Table, TableBody, DEFAULT_PAGE_SIZE};
use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::balance::{
    map_balance_rows, synth_names, BalanceJoins, BalanceRow, Rates, SynthBalance, SynthMetadata,
};
use crate::error::{SdkError, TableError};
use crate::shared::CurrencyKey;
use std::collections::HashMap;

fn price_decimals(synth: &CurrencyKey) -> u32 {
    if synth.is_eur_forex() {
        FOREX_PRICE_DECIMALS
    } else {
        PRICE_DECIMALS
    }
}

pub fn balance_columns() -> Vec<Column<BalanceRow>> {
    vec![
        Column::new("market", "Market", |r: &BalanceRow| {
            Cell::text(r.synth.as_str())
        }),
        Column::new("description", "Name", |r: &BalanceRow| {
            Cell::from_option(r.description.clone(), Cell::Text)
        }),
        Column::new("amount", "Amount", |r: &BalanceRow| Cell::Amount {
            value: r.balance,
            min_decimals: PRICE_DECIMALS,
        })
        .sortable(sort_by_key(|r: &BalanceRow| Some(r.balance), AbsentPolicy::Last)),
        Column::new("valueInUSD", "Value in USD", |r: &BalanceRow| {
            Cell::usd(r.usd_balance)
        })
        .sortable(sort_by_key(|r: &BalanceRow| Some(r.usd_balance), AbsentPolicy::Last)),
        Column::new("price", "Oracle Price", |r: &BalanceRow| {
            Cell::from_option(r.price, |value| Cell::Price {
                value,
                decimals: price_decimals(&r.synth),
            })
        })
        .sortable(sort_by_key(|r: &BalanceRow| r.price, AbsentPolicy::Last)),
        Column::new("priceChange", "24H Change", |r: &BalanceRow| {
            Cell::from_option(r.price_change, Cell::Percent)
        })
        .sortable(sort_by_key(|r: &BalanceRow| r.price_change, AbsentPolicy::Last)),
    ]
}

pub fn synth_balances_table(
    rows: Vec<BalanceRow>,
    page_size: usize,
) -> Result<Table<BalanceRow>, TableError> {
    Table::new(rows, balance_columns(), page_size)
}

/// Balances supplied by the wallet provider, joined on load with lagged prices.
#[derive(Debug, Clone, Default)]
pub struct BalanceInputs {
    pub balances: Vec<SynthBalance>,
    pub rates: Option<Rates>,
    pub metadata: Option<HashMap<CurrencyKey, SynthMetadata>>,
}

/// Loaded state of the synth-balances table.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthBalances {
    pub body: TableBody<BalanceRow>,
}

impl SynthBalances {
    /// Join `inputs` with the lagged daily prices of the held synths.
    ///
    /// A failed or disabled price query still yields rows; only the 24h change is
    /// absent.
    pub async fn load(
        client: &DashboardClient,
        ctx: &SessionContext,
        inputs: &BalanceInputs,
    ) -> Result<Self, SdkError> {
        let prices = client
            .prices()
            .lagged_daily(ctx, &synth_names(&inputs.balances))
            .await?;
        if let Some(e) = prices.error() {
            tracing::warn!(error = %e, "Lagged prices unavailable, omitting 24h change");
        }
        let lagged = prices.data_or_default();

        let rows = map_balance_rows(
            &inputs.balances,
            BalanceJoins {
                rates: inputs.rates.as_ref(),
                lagged_prices: &lagged,
                metadata: inputs.metadata.as_ref(),
            },
        );
        let body = if rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(rows)
        };
        Ok(Self { body })
    }

    pub fn table(&self) -> Result<Table<BalanceRow>, TableError> {
        synth_balances_table(self.body.rows().to_vec(), DEFAULT_PAGE_SIZE)
    }
}
