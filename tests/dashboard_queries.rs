//! Query-layer integration tests against an in-memory subgraph.
//!
//! `FakeSubgraph` answers by GraphQL operation name and counts every request, so the
//! tests can assert both the resulting `QueryState` and how many transport calls were
//! made.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use synth_dashboard::domain::price::find_price;
use synth_dashboard::error::HttpError;
use synth_dashboard::graphql::{GraphqlRequest, GraphqlTransport};
use synth_dashboard::prelude::*;
use synth_dashboard::shared::format_bytes32_string;

// ============================================================================
// Test Helpers
// ============================================================================

const WALLET: &str = "0xAbCdEf0000000000000000000000000000000001";

#[derive(Debug, Clone)]
struct Recorded {
    endpoint: String,
    operation: String,
    variables: Value,
}

#[derive(Default)]
struct FakeSubgraph {
    responses: Mutex<HashMap<&'static str, Value>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<Recorded>>,
    delay: Option<Duration>,
}

impl FakeSubgraph {
    fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    fn respond(&self, operation: &'static str, body: Value) {
        self.responses.lock().unwrap().insert(operation, body);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphqlTransport for FakeSubgraph {
    async fn post(&self, endpoint: &str, request: &GraphqlRequest) -> Result<Value, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(Recorded {
            endpoint: endpoint.to_string(),
            operation: request.operation_name.to_string(),
            variables: request.variables.clone(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let body = self
            .responses
            .lock()
            .unwrap()
            .get(request.operation_name)
            .cloned();
        body.ok_or_else(|| HttpError::ServerError {
            status: 502,
            body: format!("no canned response for {}", request.operation_name),
        })
    }
}

fn client_with(fake: &Arc<FakeSubgraph>) -> DashboardClient {
    DashboardClient::builder()
        .transport(fake.clone())
        .build()
        .unwrap()
}

fn optimism() -> SessionContext {
    SessionContext::ready(Network::new(NetworkId::OPTIMISM, "optimism"), true, true)
        .with_wallet(WALLET)
}

fn optimism_kovan() -> SessionContext {
    SessionContext::ready(
        Network::new(NetworkId::OPTIMISM_KOVAN, "optimism-kovan"),
        true,
        false,
    )
    .with_wallet(WALLET)
}

fn seth() -> CurrencyKey {
    CurrencyKey::from("sETH")
}

fn bytes32(s: &str) -> String {
    format_bytes32_string(s).unwrap()
}

fn open_orders_body() -> Value {
    json!({
        "data": {
            "futuresOrders": [{
                "id": "0xmarket-1",
                "account": WALLET.to_lowercase(),
                "size": "2500000000000000000",
                "market": "0xmarket",
                "asset": bytes32("sETH"),
                "timestamp": "1700000000",
                "orderType": "NextPrice"
            }]
        }
    })
}

fn trades_body() -> Value {
    json!({
        "data": {
            "futuresTrades": [
                {
                    "id": "0xhash1-4",
                    "timestamp": "1700000000",
                    "account": "0xabc",
                    "size": "-1500000000000000000",
                    "asset": bytes32("sETH"),
                    "price": "2000000000000000000000",
                    "orderType": "Market"
                },
                { "id": null, "timestamp": null, "size": null, "price": null }
            ]
        }
    })
}

fn positions_body() -> Value {
    json!({
        "data": {
            "futuresPositions": [{
                "id": "0xmarket-0x1",
                "lastTxHash": "0xhash",
                "openTimestamp": "1700000000",
                "closeTimestamp": null,
                "market": "0xMARKET",
                "asset": bytes32("sETH"),
                "account": WALLET,
                "isOpen": true,
                "isLiquidated": false,
                "size": "1000000000000000000",
                "margin": "500000000000000000000",
                "entryPrice": "1900000000000000000000",
                "lastPrice": "2000000000000000000000",
                "pnl": "100000000000000000000",
                "feesPaid": "0"
            }]
        }
    })
}

fn markets_body() -> Value {
    json!({
        "data": {
            "futuresMarkets": [{
                "id": "0xmarket",
                "asset": bytes32("sETH"),
                "marketKey": bytes32("sETH"),
                "isActive": true
            }]
        }
    })
}

// ============================================================================
// Gating
// ============================================================================

#[tokio::test]
async fn test_disabled_queries_do_not_fetch() {
    let fake = Arc::new(FakeSubgraph::default());
    let client = client_with(&fake);

    let mut not_ready = optimism();
    not_ready.app_ready = false;
    let mut layer1 = optimism();
    layer1.is_layer2 = false;
    let no_wallet = SessionContext::ready(Network::new(NetworkId::OPTIMISM, "optimism"), true, true);

    assert!(client.orders().open_orders(&not_ready, Some(&seth())).await.unwrap().is_idle());
    assert!(client.orders().open_orders(&layer1, Some(&seth())).await.unwrap().is_idle());
    assert!(client.orders().open_orders(&no_wallet, Some(&seth())).await.unwrap().is_idle());
    assert!(client.orders().open_orders(&optimism(), None).await.unwrap().is_idle());

    assert!(client.rates().latest_update(&layer1, &seth()).await.unwrap().is_idle());
    assert!(client
        .rates()
        .latest_update(&optimism(), &CurrencyKey::from(""))
        .await
        .unwrap()
        .is_idle());

    assert!(client.trades().history(&layer1, Some(&seth()), 16).await.unwrap().is_idle());
    assert!(client.trades().history(&optimism(), None, 16).await.unwrap().is_idle());
    assert!(client.markets().active(&not_ready).await.unwrap().is_idle());
    assert!(client.positions().for_account(&no_wallet).await.unwrap().is_idle());
    assert!(client.prices().lagged_daily(&not_ready, &[seth()]).await.unwrap().is_idle());
    assert!(client.prices().lagged_daily(&optimism(), &[]).await.unwrap().is_idle());

    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn test_lagged_prices_do_not_require_layer2() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("laggedDailyPrice", json!({ "data": { "rateUpdates": [] } }));
    let client = client_with(&fake);

    let mainnet = SessionContext::ready(Network::new(NetworkId::MAINNET, "mainnet"), false, true);
    let state = client.prices().lagged_daily(&mainnet, &[seth()]).await.unwrap();
    assert!(state.is_empty());
    assert_eq!(fake.calls(), 1);
    assert!(fake.requests()[0].endpoint.ends_with("mainnet-latest-rates"));
}

#[tokio::test]
async fn test_unsupported_network_is_an_error() {
    let fake = Arc::new(FakeSubgraph::default());
    let client = client_with(&fake);

    let ctx = SessionContext::ready(Network::new(NetworkId::MAINNET, "mainnet"), true, true)
        .with_wallet(WALLET);
    let err = client.positions().for_account(&ctx).await.unwrap_err();
    assert!(matches!(err, SdkError::UnsupportedNetwork(_)));

    let unknown = SessionContext::ready(Network::new(5u64, "goerli"), true, false);
    assert!(client.rates().latest_update(&unknown, &seth()).await.is_err());
    assert_eq!(fake.calls(), 0);
}

// ============================================================================
// Decoding
// ============================================================================

#[tokio::test]
async fn test_open_orders_are_normalized() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("OpenOrders", open_orders_body());
    let client = client_with(&fake);

    let state = client.orders().open_orders(&optimism(), Some(&seth())).await.unwrap();
    let orders = state.data().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].size, Decimal::new(25, 1));
    assert_eq!(orders[0].asset.as_str(), "sETH");
    assert_eq!(orders[0].order_type, FuturesOrderType::NextPrice);

    let request = &fake.requests()[0];
    assert_eq!(request.variables["account"], WALLET.to_lowercase());
    assert!(request.endpoint.ends_with("optimism-main"));
}

#[tokio::test]
async fn test_latest_rate_update_time() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond(
        "rateUpdates",
        json!({
            "data": {
                "rateUpdates": [{
                    "id": "0x1-0",
                    "currencyKey": "sETH",
                    "synth": "sETH",
                    "rate": "2000.5",
                    "timestamp": "1700000000"
                }]
            }
        }),
    );
    let client = client_with(&fake);

    let time = client.rates().latest_update_time(&optimism(), &seth()).await.unwrap();
    assert_eq!(time.data().unwrap().to_rfc3339(), "2023-11-14T22:13:20+00:00");
}

#[tokio::test]
async fn test_latest_rate_without_rows_is_empty() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("rateUpdates", json!({ "data": { "rateUpdates": [] } }));
    let client = client_with(&fake);

    let time = client.rates().latest_update_time(&optimism(), &seth()).await.unwrap();
    assert!(time.is_empty());
    assert!(time.data().is_none());
}

#[tokio::test]
async fn test_trades_send_bytes32_asset_and_keep_partial_rows() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("FuturesTrades", trades_body());
    let client = client_with(&fake);

    let state = client.trades().history(&optimism(), Some(&seth()), 16).await.unwrap();
    let trades = state.data().unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].size, Some(Decimal::new(-15, 1)));
    assert_eq!(trades[0].price, Some(Decimal::from(2000)));
    assert_eq!(trades[0].txn_hash.as_deref(), Some("0xhash1"));
    assert!(trades[1].price.is_none());

    let request = &fake.requests()[0];
    assert_eq!(request.variables["currencyKey"], bytes32("sETH"));
    assert_eq!(request.variables["first"], 16);
}

/// Rates indexer over a fixed set of updates. Applies the synth filter, the
/// `timestamp_lte` bound, newest-first ordering and the `first` limit.
struct RateIndexer {
    updates: Vec<(&'static str, i64, &'static str)>,
    calls: AtomicUsize,
}

impl RateIndexer {
    fn first_limit(request: &GraphqlRequest) -> usize {
        if let Some(first) = request.variables["first"].as_u64() {
            return first as usize;
        }
        request
            .query
            .split("first:")
            .nth(1)
            .and_then(|rest| {
                let digits: String = rest.trim_start().chars().take_while(char::is_ascii_digit).collect();
                digits.parse().ok()
            })
            .unwrap_or(100)
    }
}

#[async_trait]
impl GraphqlTransport for RateIndexer {
    async fn post(&self, _endpoint: &str, request: &GraphqlRequest) -> Result<Value, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let vars = &request.variables;
        let synths: Vec<&str> = match vars["synths"].as_array() {
            Some(list) => list.iter().filter_map(Value::as_str).collect(),
            None => vars["synth"].as_str().into_iter().collect(),
        };
        let before: i64 = vars["before"].as_str().and_then(|b| b.parse().ok()).unwrap_or(i64::MAX);

        let mut rows: Vec<_> = self
            .updates
            .iter()
            .filter(|(synth, ts, _)| synths.contains(synth) && *ts <= before)
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        let page: Vec<Value> = rows
            .into_iter()
            .take(Self::first_limit(request))
            .map(|(synth, ts, rate)| json!({ "synth": synth, "rate": rate, "timestamp": ts.to_string() }))
            .collect();
        Ok(json!({ "data": { "rateUpdates": page } }))
    }
}

#[tokio::test]
async fn test_lagged_prices_cover_every_synth() {
    let before = chrono::DateTime::<chrono::Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    let cutoff = before.timestamp();

    // sETH updates every minute; sBTC last updated two days before the cut-off.
    let mut updates: Vec<(&'static str, i64, &'static str)> = (0..2000)
        .map(|i| ("sETH", cutoff - i * 60, "1900"))
        .collect();
    updates.push(("sETH", cutoff + 60, "2100"));
    updates.push(("sBTC", cutoff - 2 * 86_400, "35000"));
    updates.push(("sBTC", cutoff - 3 * 86_400, "34000"));

    let indexer = Arc::new(RateIndexer {
        updates,
        calls: AtomicUsize::new(0),
    });
    let client = DashboardClient::builder()
        .transport(indexer.clone())
        .build()
        .unwrap();

    let state = client
        .prices()
        .lagged_before(&optimism(), &[seth(), "sBTC".into()], before)
        .await
        .unwrap();
    let prices = state.data().unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(find_price(prices, &seth()).unwrap().price, Decimal::from(1900));
    assert_eq!(
        find_price(prices, &"sBTC".into()).unwrap().price,
        Decimal::from(35000)
    );
    assert_eq!(indexer.calls.load(Ordering::SeqCst), 2);

    // Both requests are cached under one key.
    client
        .prices()
        .lagged_before(&optimism(), &["sBTC".into(), seth()], before)
        .await
        .unwrap();
    assert_eq!(indexer.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_lagged_prices_send_one_request_per_synth() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond(
        "laggedDailyPrice",
        json!({ "data": { "rateUpdates": [{ "synth": "sETH", "rate": "1900", "timestamp": "300" }] } }),
    );
    let client = client_with(&fake);

    client
        .prices()
        .lagged_daily(&optimism(), &[seth(), "sBTC".into(), seth()])
        .await
        .unwrap();
    let mut synths: Vec<Value> = fake
        .requests()
        .iter()
        .map(|r| r.variables["synth"].clone())
        .collect();
    synths.sort_by_key(|v| v.to_string());
    assert_eq!(synths, vec![json!("sBTC"), json!("sETH")]);
}

// ============================================================================
// Cache behaviour
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_share_one_request() {
    let fake = Arc::new(FakeSubgraph::with_delay(Duration::from_millis(50)));
    fake.respond("FuturesMarkets", markets_body());
    let client = client_with(&fake);
    let ctx = optimism();

    let markets = client.markets();
    let (a, b) = tokio::join!(markets.active(&ctx), markets.active(&ctx));
    assert_eq!(fake.calls(), 1);
    assert_eq!(a.unwrap(), b.unwrap());
}

#[tokio::test]
async fn test_aborted_caller_leaves_shared_fetch_running() {
    let fake = Arc::new(FakeSubgraph::with_delay(Duration::from_millis(50)));
    fake.respond("FuturesMarkets", markets_body());
    let client = client_with(&fake);
    let ctx = optimism();

    let markets = client.markets();
    let (first, handle) = abortable(markets.active(&ctx));
    let second = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.abort();
        markets.active(&ctx).await
    };

    let (first, second) = tokio::join!(first, second);
    assert!(matches!(first, Err(Aborted)));
    assert_eq!(second.unwrap().data().map(Vec::len), Some(1));
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn test_results_are_cached_per_network() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("FuturesMarkets", markets_body());
    let client = client_with(&fake);

    client.markets().active(&optimism()).await.unwrap();
    client.markets().active(&optimism()).await.unwrap();
    assert_eq!(fake.calls(), 1);

    client.markets().active(&optimism_kovan()).await.unwrap();
    assert_eq!(fake.calls(), 2);
    assert!(fake.requests()[1].endpoint.ends_with("optimism-kovan-main"));
}

#[tokio::test]
async fn test_errors_are_reported_and_not_cached() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond(
        "FuturesPositions",
        json!({ "data": null, "errors": [{ "message": "indexer unavailable" }] }),
    );
    let client = client_with(&fake);

    let state = client.positions().for_account(&optimism()).await.unwrap();
    assert_eq!(
        state.error(),
        Some(&QueryError::Graphql(vec!["indexer unavailable".to_string()]))
    );
    assert!(!state.is_empty());

    fake.respond("FuturesPositions", positions_body());
    let state = client.positions().for_account(&optimism()).await.unwrap();
    assert_eq!(state.data().unwrap().len(), 1);
    assert_eq!(fake.calls(), 2);
}

#[tokio::test]
async fn test_transport_failure_becomes_error_state() {
    let fake = Arc::new(FakeSubgraph::default());
    let client = client_with(&fake);

    let state = client.markets().active(&optimism()).await.unwrap();
    assert!(matches!(state.error(), Some(QueryError::Transport(_))));
}

#[tokio::test]
async fn test_request_timeout() {
    let fake = Arc::new(FakeSubgraph::with_delay(Duration::from_millis(200)));
    fake.respond("FuturesMarkets", markets_body());
    let client = DashboardClient::builder()
        .transport(fake.clone())
        .request_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let state = client.markets().active(&optimism()).await.unwrap();
    assert_eq!(state.error(), Some(&QueryError::Timeout(20)));
}

#[tokio::test]
async fn test_invalidate_account() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("FuturesPositions", positions_body());
    fake.respond("FuturesMarkets", markets_body());
    let client = client_with(&fake);
    let ctx = optimism();

    client.positions().for_account(&ctx).await.unwrap();
    client.markets().active(&ctx).await.unwrap();
    assert_eq!(client.invalidate_account(&WalletAddress::from(WALLET)).await, 1);

    client.positions().for_account(&ctx).await.unwrap();
    client.markets().active(&ctx).await.unwrap();
    assert_eq!(fake.calls(), 3);
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn test_overview_load() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("FuturesPositions", positions_body());
    fake.respond("FuturesMarkets", markets_body());
    let client = client_with(&fake);

    let overview = Overview::load(&client, &optimism()).await.unwrap();
    assert_eq!(overview.positions_tabs.tabs()[0].badge, Some(1));
    let rows = overview.position_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].market_key.as_ref().map(|k| k.as_str()), Some("sETH"));
    assert_eq!(rows[0].leverage, Some(Decimal::from(4)));
}

#[tokio::test]
async fn test_overview_reports_positions_failure() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("FuturesMarkets", markets_body());
    let client = client_with(&fake);

    let overview = Overview::load(&client, &optimism()).await.unwrap();
    assert!(matches!(
        overview.body,
        TableBody::Error(QueryError::Transport(_))
    ));
    assert!(overview.positions_state().is_error());
    assert_eq!(overview.positions_tabs.tabs()[0].badge, None);
}

#[tokio::test]
async fn test_synth_balances_survive_price_failure() {
    let fake = Arc::new(FakeSubgraph::default());
    let client = client_with(&fake);

    let mut rates = Rates::new();
    rates.insert(seth(), Decimal::from(2000));
    let inputs = BalanceInputs {
        balances: vec![SynthBalance {
            currency_key: seth(),
            balance: Decimal::ONE,
            usd_balance: Decimal::from(2000),
        }],
        rates: Some(rates),
        metadata: None,
    };

    let balances = SynthBalances::load(&client, &optimism(), &inputs).await.unwrap();
    let rows = balances.body.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price, Some(Decimal::from(2000)));
    assert_eq!(rows[0].price_change, None);
}

#[tokio::test]
async fn test_trades_history_links() {
    let fake = Arc::new(FakeSubgraph::default());
    fake.respond("FuturesTrades", trades_body());
    let client = client_with(&fake);

    let history = TradesHistory::load(&client, &optimism_kovan(), Some(&seth()), 16)
        .await
        .unwrap();
    let table = history.table().unwrap();
    assert_eq!(table.page_count(), 1);
    let rows = table.rows();
    assert_eq!(
        history.row_link(&rows[0]).as_deref(),
        Some("https://kovan-optimistic.etherscan.io/tx/0xhash1")
    );
    assert_eq!(history.row_link(&rows[1]), None);
}
