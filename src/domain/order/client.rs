//! Orders sub-client: pending orders for the connected wallet.

use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::order::wire::{OpenOrdersResponse, OPEN_ORDERS_QUERY};
use crate::domain::order::OpenOrder;
use crate::error::{QueryError, SdkError};
use crate::graphql::GraphqlRequest;
use crate::network::EndpointDomain;
use crate::query::{non_empty, QueryKey, QueryState};
use crate::shared::CurrencyKey;
use serde_json::json;

pub struct Orders<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Orders<'a> {
    /// Pending orders of the session's wallet.
    ///
    /// Enabled on layer 2 with a wallet connected and a market currency selected. The
    /// currency only gates the query; results cover every market, so it is not part
    /// of the cache key.
    pub async fn open_orders(
        &self,
        ctx: &SessionContext,
        currency_key: Option<&CurrencyKey>,
    ) -> Result<QueryState<Vec<OpenOrder>>, SdkError> {
        let wallet = match (ctx.layer2_wallet(), currency_key) {
            (Some(wallet), Some(key)) if !key.is_empty() => wallet,
            _ => return Ok(QueryState::Idle),
        };

        let request = GraphqlRequest::new(
            "OpenOrders",
            OPEN_ORDERS_QUERY,
            json!({ "account": wallet.as_str() }),
        );

        self.client
            .query(
                EndpointDomain::Futures,
                QueryKey::open_orders(ctx.network_id(), wallet),
                request,
                |resp: OpenOrdersResponse| {
                    let orders = resp
                        .futures_orders
                        .into_iter()
                        .map(OpenOrder::try_from)
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(QueryError::from)?;
                    Ok(non_empty(orders))
                },
            )
            .await
    }
}
