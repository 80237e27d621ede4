use std::sync::Arc;

use fundlens_core::{
    BlackrockAdapter, FundSource, FundStream, HoldingsLocator, HttpResponse, ProviderConfig,
    ProviderId, StaticHttpClient,
};
use futures::TryStreamExt;
use serde_json::json;

const ORIGIN: &str = "https://fixture.test";

fn config() -> ProviderConfig {
    ProviderConfig::blackrock()
        .with_origin(ORIGIN)
        .with_holding_columns(["ticker", "name", "last", "weight"])
}

fn single_fund_client() -> StaticHttpClient {
    StaticHttpClient::new().with_route(
        config().listing_url(),
        HttpResponse::ok(
            json!({
                "data": {
                    "tableData": {
                        "columns": [
                            {"name": "fundShortName"},
                            {"name": "localExchangeTicker"},
                            {"name": "productView"},
                            {"name": "aladdinAssetClass"},
                            {"name": "productPageUrl"}
                        ],
                        "data": [
                            ["iShares Core S&P 500 ETF", "IVV", ["x", "ishares"], "Equity", "/us/individual/ivv"]
                        ]
                    }
                }
            })
            .to_string(),
        ),
    )
}

fn assert_send<T: Send>(_: &T) {}

#[test]
fn adapter_identifies_as_blackrock() {
    let source: Arc<dyn FundSource> = Arc::new(BlackrockAdapter::new(
        Arc::new(StaticHttpClient::new()),
        config(),
    ));

    assert_eq!(source.id(), ProviderId::Blackrock);
    assert_eq!(source.id().to_string(), "blackrock");
}

#[test]
fn fund_stream_is_send() {
    let adapter = BlackrockAdapter::new(Arc::new(StaticHttpClient::new()), config());
    let stream: FundStream<'_> = adapter.funds();

    assert_send(&stream);
}

/// Answers with a fixed link regardless of the page content.
struct FixedLocator(Option<&'static str>);

impl HoldingsLocator for FixedLocator {
    fn locate(&self, _page: &str) -> Option<String> {
        self.0.map(str::to_string)
    }
}

#[tokio::test]
async fn custom_locator_replaces_pattern_matching() {
    let client = Arc::new(
        single_fund_client()
            .with_route(
                format!("{ORIGIN}/us/individual/ivv"),
                HttpResponse::ok("<script>window.holdings = '/api/ivv.json';</script>"),
            )
            .with_route(
                format!("{ORIGIN}/api/ivv.json"),
                HttpResponse::ok(
                    json!({"aaData": [["AAPL", "Apple Inc", {"raw": 190.5}, {"raw": 0.07}]]})
                        .to_string(),
                ),
            ),
    );
    let adapter = BlackrockAdapter::new(client, config())
        .with_locator(Arc::new(FixedLocator(Some("/api/ivv.json"))));

    let snapshots = adapter
        .funds()
        .try_collect::<Vec<_>>()
        .await
        .expect("pipeline succeeds");

    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].holdings[0].ticker, "AAPL");
    assert_eq!(snapshots[0].fund_holdings[0].fund, "IVV");
}

#[tokio::test]
async fn locator_returning_none_yields_empty_holdings() {
    let client = Arc::new(single_fund_client().with_route(
        format!("{ORIGIN}/us/individual/ivv"),
        HttpResponse::ok(
            "<a href=\"/us/individual/products/1/ivv/2.ajax?tab=all&fileType=json\">x</a>",
        ),
    ));
    let adapter = BlackrockAdapter::new(client.clone(), config())
        .with_locator(Arc::new(FixedLocator(None)));

    let snapshots = adapter
        .funds()
        .try_collect::<Vec<_>>()
        .await
        .expect("pipeline succeeds");

    assert!(snapshots[0].holdings.is_empty());
    assert!(snapshots[0].fund_holdings.is_empty());
    assert_eq!(client.recorded_requests().len(), 2);
}
