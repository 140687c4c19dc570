//! Prices sub-client: lagged daily prices for a set of synths.

use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::price::convert::newest_per_synth;
use crate::domain::price::wire::{LaggedPricesResponse, LAGGED_DAILY_PRICE_QUERY};
use crate::domain::price::{lag_cutoff, Price};
use crate::error::{QueryError, SdkError};
use crate::graphql::GraphqlRequest;
use crate::network::EndpointDomain;
use crate::query::{non_empty, QueryKey, QueryState};
use crate::shared::CurrencyKey;
use chrono::{DateTime, Utc};
use serde_json::json;

pub struct Prices<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Prices<'a> {
    /// Price of each synth 24 hours ago (hour-aligned).
    pub async fn lagged_daily(
        &self,
        ctx: &SessionContext,
        synths: &[CurrencyKey],
    ) -> Result<QueryState<Vec<Price>>, SdkError> {
        self.lagged_before(ctx, synths, lag_cutoff(Utc::now()))
            .await
    }

    /// Newest price of each synth at or before `before`. Synths without an update
    /// before the cut-off are absent from the result.
    ///
    /// Does not require layer 2: the rates indexer exists on every supported network.
    pub async fn lagged_before(
        &self,
        ctx: &SessionContext,
        synths: &[CurrencyKey],
        before: DateTime<Utc>,
    ) -> Result<QueryState<Vec<Price>>, SdkError> {
        if !ctx.app_ready || synths.is_empty() {
            return Ok(QueryState::Idle);
        }

        let key = QueryKey::lagged_daily_price(ctx.network_id(), synths, before);
        // The key's params after the cut-off are the sorted, deduplicated synths.
        let before_secs = before.timestamp().to_string();
        let requests = key.params()[1..]
            .iter()
            .map(|synth| {
                GraphqlRequest::new(
                    "laggedDailyPrice",
                    LAGGED_DAILY_PRICE_QUERY,
                    json!({ "synth": synth, "before": before_secs }),
                )
            })
            .collect();

        self.client
            .query_batch(EndpointDomain::Rates, key, requests, |pages: Vec<LaggedPricesResponse>| {
                let rows = pages.into_iter().flat_map(|page| page.rate_updates).collect();
                let prices = newest_per_synth(rows).map_err(QueryError::from)?;
                Ok(non_empty(prices))
            })
            .await
    }
}
