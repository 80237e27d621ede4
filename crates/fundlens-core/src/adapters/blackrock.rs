use std::sync::Arc;

use futures::stream::{self, BoxStream, TryStreamExt};
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::domain::{FundHoldings, FundListingRecord, FundSnapshot};
use crate::error::SourceError;
use crate::holdings::HoldingsTable;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::listing::ListingTable;
use crate::locator::HoldingsLocator;
use crate::source::{end_on_error, FundSource, FundStream, ProviderId};

const ACCEPT_JSON: &str = "application/json";
const ACCEPT_HTML: &str = "text/html";

/// BlackRock / iShares adapter.
///
/// Listing, product page and holdings requests all go through the same
/// [`HttpClient`], one at a time, and every non-2xx answer aborts with
/// [`SourceError::Fetch`].
#[derive(Clone)]
pub struct BlackrockAdapter {
    http_client: Arc<dyn HttpClient>,
    config: Arc<ProviderConfig>,
    locator: Arc<dyn HoldingsLocator>,
}

impl Default for BlackrockAdapter {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::default()), ProviderConfig::default())
    }
}

impl BlackrockAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, config: ProviderConfig) -> Self {
        let locator = Arc::new(config.holdings_locator());
        Self {
            http_client,
            config: Arc::new(config),
            locator,
        }
    }

    /// Swaps the page-scanning strategy used to find the holdings URI.
    pub fn with_locator(mut self, locator: Arc<dyn HoldingsLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn get(&self, url: String, accept: &str) -> Result<HttpResponse, SourceError> {
        debug!(%url, "requesting");
        let request = HttpRequest::get(url.as_str())
            .with_header("Accept", accept)
            .with_timeout_ms(self.config.timeout_ms());
        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(SourceError::Fetch {
                url,
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }
        Ok(response)
    }

    async fn get_path(&self, path: &str, accept: &str) -> Result<HttpResponse, SourceError> {
        self.get(self.config.url(path), accept).await
    }

    /// Fetches and parses the screener table.
    pub async fn listing(&self) -> Result<ListingTable, SourceError> {
        let response = self.get(self.config.listing_url(), ACCEPT_JSON).await?;
        ListingTable::parse(&response.body)
    }

    /// Qualifying funds, in listing order.
    ///
    /// The listing request is issued on first poll; rows are decoded and
    /// filtered as they are pulled. The stream ends after the first error.
    pub fn fund_records(&self) -> BoxStream<'_, Result<FundListingRecord, SourceError>> {
        let filter = self.config.filter().clone();
        end_on_error(
            stream::once(self.listing())
                .map_ok(move |table| {
                    stream::iter(
                        table
                            .into_funds(filter.clone())
                            .map(|record| record.map_err(SourceError::from)),
                    )
                })
                .try_flatten(),
        )
    }

    /// Fetches a product page and returns the first holdings URI in it.
    pub async fn locate_holdings_uri(
        &self,
        product_page_path: &str,
    ) -> Result<Option<String>, SourceError> {
        let page = self.get_path(product_page_path, ACCEPT_HTML).await?;
        Ok(self.locator.locate(&page.body))
    }

    /// Holdings and fund-holding relations for one fund.
    ///
    /// A product page without a holdings link yields empty holdings and no
    /// further request.
    pub async fn fetch_holdings(
        &self,
        fund: &FundListingRecord,
    ) -> Result<FundHoldings, SourceError> {
        self.holdings_for_page(&fund.local_exchange_ticker, &fund.product_page_url)
            .await
    }

    /// Same as [`fetch_holdings`](Self::fetch_holdings) for a fund known
    /// only by its ticker and product page path.
    pub async fn holdings_for_page(
        &self,
        fund_ticker: &str,
        product_page_path: &str,
    ) -> Result<FundHoldings, SourceError> {
        let Some(uri) = self.locate_holdings_uri(product_page_path).await? else {
            debug!(fund = fund_ticker, "no holdings dataset");
            return Ok(FundHoldings::empty());
        };

        let response = self.get_path(&uri, ACCEPT_JSON).await?;
        let table = HoldingsTable::parse(&response.body)?;
        let holdings = table.project(fund_ticker, &self.config.holding_index())?;
        debug!(fund = fund_ticker, holdings = holdings.len(), "holdings decoded");
        Ok(holdings)
    }

    async fn snapshot(&self, fund: FundListingRecord) -> Result<FundSnapshot, SourceError> {
        info!(fund = %fund.fund_short_name, "fetching holdings");
        let holdings = self.fetch_holdings(&fund).await?;
        Ok(FundSnapshot::new(fund.to_fund_row(), holdings))
    }
}

impl FundSource for BlackrockAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Blackrock
    }

    fn funds(&self) -> FundStream<'_> {
        end_on_error(self.fund_records().and_then(move |fund| self.snapshot(fund)))
    }
}
