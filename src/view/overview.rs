//! Dashboard overview: positions and markets tab groups.
//!
//! Only the futures tabs are live; the other tabs are listed but disabled.

use super::positions::futures_positions_table;
use super::table::{Table, TableBody, DEFAULT_PAGE_SIZE};
use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::market::FuturesMarket;
use crate::domain::position::{map_position_rows, FuturesPosition, PositionRow};
use crate::error::{SdkError, TableError};
use crate::query::QueryState;
use futures_util::future;
use serde::{Deserialize, Serialize};

// ─── Tabs ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionsTab {
    Futures,
    Shorts,
    Spot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketsTab {
    Futures,
    Spot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<K> {
    pub name: K,
    pub disabled: bool,
    pub badge: Option<usize>,
}

impl<K> Tab<K> {
    pub fn enabled(name: K) -> Self {
        Self {
            name,
            disabled: false,
            badge: None,
        }
    }

    pub fn disabled(name: K) -> Self {
        Self {
            name,
            disabled: true,
            badge: None,
        }
    }
}

/// A row of tab buttons with exactly one active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup<K> {
    tabs: Vec<Tab<K>>,
    active: K,
}

impl<K: Copy + PartialEq> TabGroup<K> {
    pub fn new(tabs: Vec<Tab<K>>, active: K) -> Self {
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab<K>] {
        &self.tabs
    }

    pub fn active(&self) -> K {
        self.active
    }

    pub fn is_active(&self, name: K) -> bool {
        self.active == name
    }

    /// Make `name` the active tab. Disabled or unknown tabs are ignored (`false`).
    pub fn select(&mut self, name: K) -> bool {
        match self.tabs.iter().find(|t| t.name == name) {
            Some(tab) if !tab.disabled => {
                self.active = name;
                true
            }
            _ => false,
        }
    }

    pub fn set_badge(&mut self, name: K, badge: Option<usize>) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.name == name) {
            tab.badge = badge;
        }
    }
}

pub fn positions_tabs() -> TabGroup<PositionsTab> {
    TabGroup::new(
        vec![
            Tab::enabled(PositionsTab::Futures),
            Tab::disabled(PositionsTab::Shorts),
            Tab::disabled(PositionsTab::Spot),
        ],
        PositionsTab::Futures,
    )
}

pub fn markets_tabs() -> TabGroup<MarketsTab> {
    TabGroup::new(
        vec![
            Tab::enabled(MarketsTab::Futures),
            Tab::disabled(MarketsTab::Spot),
        ],
        MarketsTab::Futures,
    )
}

// ─── Overview ────────────────────────────────────────────────────────────────

pub struct Overview {
    pub positions_tabs: TabGroup<PositionsTab>,
    pub markets_tabs: TabGroup<MarketsTab>,
    /// Body of the futures positions panel.
    pub body: TableBody<PositionRow>,
    positions: QueryState<Vec<FuturesPosition>>,
    markets: QueryState<Vec<FuturesMarket>>,
}

impl Default for Overview {
    fn default() -> Self {
        Self {
            positions_tabs: positions_tabs(),
            markets_tabs: markets_tabs(),
            body: TableBody::NotFetched,
            positions: QueryState::Idle,
            markets: QueryState::Idle,
        }
    }
}

impl Overview {
    /// Fetch positions and markets concurrently and build the overview.
    pub async fn load(client: &DashboardClient, ctx: &SessionContext) -> Result<Self, SdkError> {
        let positions_client = client.positions();
        let markets_client = client.markets();
        let (positions, markets) =
            future::join(positions_client.for_account(ctx), markets_client.active(ctx)).await;

        let mut overview = Self::default();
        overview.update(positions?, markets?);
        Ok(overview)
    }

    /// Replace both query states; tab selection is kept.
    pub fn update(
        &mut self,
        positions: QueryState<Vec<FuturesPosition>>,
        markets: QueryState<Vec<FuturesMarket>>,
    ) {
        let count = positions.data().map_or(0, Vec::len);
        self.positions_tabs
            .set_badge(PositionsTab::Futures, (count > 0).then_some(count));
        self.body = positions_body(&positions, &markets);
        self.positions = positions;
        self.markets = markets;
    }

    pub fn positions_state(&self) -> &QueryState<Vec<FuturesPosition>> {
        &self.positions
    }

    pub fn markets_state(&self) -> &QueryState<Vec<FuturesMarket>> {
        &self.markets
    }

    pub fn positions(&self) -> &[FuturesPosition] {
        self.positions.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn markets(&self) -> &[FuturesMarket] {
        self.markets.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Rows of the futures positions panel. Empty unless both positions and markets
    /// are present.
    pub fn position_rows(&self) -> &[PositionRow] {
        self.body.rows()
    }

    pub fn positions_table(&self) -> Result<Table<PositionRow>, TableError> {
        futures_positions_table(self.body.rows().to_vec(), DEFAULT_PAGE_SIZE)
    }
}

/// Join the two query states into one panel body. A failure of either query is
/// an error; rows need data from both.
fn positions_body(
    positions: &QueryState<Vec<FuturesPosition>>,
    markets: &QueryState<Vec<FuturesMarket>>,
) -> TableBody<PositionRow> {
    match (positions, markets) {
        (QueryState::Error(e), _) | (_, QueryState::Error(e)) => TableBody::Error(e.clone()),
        (QueryState::Loading, _) | (_, QueryState::Loading) => TableBody::Loading,
        (QueryState::Idle, _) | (_, QueryState::Idle) => TableBody::NotFetched,
        (QueryState::Data(positions), QueryState::Data(markets)) => {
            TableBody::from_state(QueryState::Data(map_position_rows(positions, markets)))
        }
        _ => TableBody::Empty,
    }
}
