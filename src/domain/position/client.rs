//! Positions sub-client: open futures positions of the connected wallet.

use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::position::wire::{PositionsResponse, POSITIONS_QUERY};
use crate::domain::position::FuturesPosition;
use crate::error::{QueryError, SdkError};
use crate::graphql::GraphqlRequest;
use crate::network::EndpointDomain;
use crate::query::{non_empty, QueryKey, QueryState};
use serde_json::json;

pub struct Positions<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Positions<'a> {
    /// Open positions of the session's wallet across all markets.
    pub async fn for_account(
        &self,
        ctx: &SessionContext,
    ) -> Result<QueryState<Vec<FuturesPosition>>, SdkError> {
        let Some(wallet) = ctx.layer2_wallet() else {
            return Ok(QueryState::Idle);
        };

        let request = GraphqlRequest::new(
            "FuturesPositions",
            POSITIONS_QUERY,
            json!({ "account": wallet.as_str() }),
        );

        self.client
            .query(
                EndpointDomain::Futures,
                QueryKey::positions(ctx.network_id(), wallet),
                request,
                |resp: PositionsResponse| {
                    let positions = resp
                        .futures_positions
                        .into_iter()
                        .map(FuturesPosition::try_from)
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(QueryError::from)?;
                    Ok(non_empty(positions))
                },
            )
            .await
    }
}
