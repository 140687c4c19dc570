//! Trades sub-client: recent trade history for a market.

use crate::client::DashboardClient;
use crate::context::SessionContext;
use crate::domain::trade::wire::{TradesResponse, TRADES_QUERY};
use crate::domain::trade::FuturesTrade;
use crate::error::{QueryError, SdkError};
use crate::graphql::GraphqlRequest;
use crate::network::EndpointDomain;
use crate::query::{non_empty, QueryKey, QueryState};
use crate::shared::{format_bytes32_string, CurrencyKey};
use serde_json::json;

pub struct Trades<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Trades<'a> {
    /// The `first` most recent trades for `currency_key`, newest first.
    pub async fn history(
        &self,
        ctx: &SessionContext,
        currency_key: Option<&CurrencyKey>,
        first: u32,
    ) -> Result<QueryState<Vec<FuturesTrade>>, SdkError> {
        let currency_key = match currency_key {
            Some(key) if ctx.layer2_ready() && !key.is_empty() => key,
            _ => return Ok(QueryState::Idle),
        };

        let asset = match format_bytes32_string(currency_key.as_str()) {
            Ok(asset) => asset,
            Err(e) => return Ok(QueryState::Error(QueryError::from(e))),
        };

        let request = GraphqlRequest::new(
            "FuturesTrades",
            TRADES_QUERY,
            json!({ "currencyKey": asset, "first": first }),
        );

        self.client
            .query(
                EndpointDomain::Futures,
                QueryKey::trades(ctx.network_id(), currency_key, first),
                request,
                |resp: TradesResponse| {
                    Ok(non_empty(
                        resp.futures_trades
                            .into_iter()
                            .map(FuturesTrade::from)
                            .collect(),
                    ))
                },
            )
            .await
    }
}
