//! Markets sub-client: active futures markets.

use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::market::wire::{MarketsResponse, MARKETS_QUERY};
use crate::domain::market::FuturesMarket;
use crate::error::{QueryError, SdkError};
use crate::graphql::GraphqlRequest;
use crate::network::EndpointDomain;
use crate::query::{non_empty, QueryKey, QueryState};
use serde_json::json;

pub struct Markets<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Markets<'a> {
    /// All active futures markets on the session's network.
    pub async fn active(
        &self,
        ctx: &SessionContext,
    ) -> Result<QueryState<Vec<FuturesMarket>>, SdkError> {
        if !ctx.layer2_ready() {
            return Ok(QueryState::Idle);
        }

        let request = GraphqlRequest::new("FuturesMarkets", MARKETS_QUERY, json!({}));

        self.client
            .query(
                EndpointDomain::Futures,
                QueryKey::markets(ctx.network_id()),
                request,
                |resp: MarketsResponse| {
                    let markets = resp
                        .futures_markets
                        .into_iter()
                        .map(FuturesMarket::try_from)
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(QueryError::from)?;
                    Ok(non_empty(markets))
                },
            )
            .await
    }
}
