//! Rates sub-client: latest rate update per synth.

use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::rate::wire::{RateUpdatesResponse, LATEST_RATE_UPDATE_QUERY};
use crate::domain::rate::RateUpdate;
use crate::error::{QueryError, SdkError};
use crate::graphql::GraphqlRequest;
use crate::network::EndpointDomain;
use crate::query::{QueryKey, QueryState};
use crate::shared::CurrencyKey;
use chrono::{DateTime, Utc};
use serde_json::json;

pub struct Rates<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Rates<'a> {
    /// Newest rate update for `base_currency_key`. `Empty` if the synth has none.
    pub async fn latest_update(
        &self,
        ctx: &SessionContext,
        base_currency_key: &CurrencyKey,
    ) -> Result<QueryState<RateUpdate>, SdkError> {
        if !ctx.layer2_ready() || base_currency_key.is_empty() {
            return Ok(QueryState::Idle);
        }

        let request = GraphqlRequest::new(
            "rateUpdates",
            LATEST_RATE_UPDATE_QUERY,
            json!({ "synth": base_currency_key.as_str() }),
        );

        self.client
            .query(
                EndpointDomain::Rates,
                QueryKey::latest_rate_update(ctx.network_id(), base_currency_key),
                request,
                |resp: RateUpdatesResponse| match resp.rate_updates.into_iter().next() {
                    Some(row) => Ok(Some(RateUpdate::try_from(row).map_err(QueryError::from)?)),
                    None => Ok(None),
                },
            )
            .await
    }

    /// Time of the newest rate update. `Empty` (no update time) when there is none;
    /// never substituted with the current time.
    pub async fn latest_update_time(
        &self,
        ctx: &SessionContext,
        base_currency_key: &CurrencyKey,
    ) -> Result<QueryState<DateTime<Utc>>, SdkError> {
        Ok(self
            .latest_update(ctx, base_currency_key)
            .await?
            .map(|update| update.timestamp))
    }
}
