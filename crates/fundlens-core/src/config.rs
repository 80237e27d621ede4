//! Provider configuration.
//!
//! The origin, listing endpoint, holdings-URI pattern and holdings column
//! layout are fixed per provider. They live in one immutable
//! [`ProviderConfig`]; [`DEFAULT_CONFIG`] builds the BlackRock values once
//! per process.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::listing::FundFilter;
use crate::locator::PatternLocator;
use crate::table::{ColumnIndex, RowShape};

pub const BLACKROCK_ORIGIN: &str = "https://www.blackrock.com";

pub const LISTING_PATH: &str = "/us/individual/product-screener/product-screener-v3.jsn?dcrPath=/templatedata/config/product-screener-v3/data/en/one/one-v4";

/// `/us/individual/products/<digits>/<slug>/<digits>.ajax?tab=all&fileType=json`
pub const HOLDINGS_URI_PATTERN: &str =
    r"/us/individual/products/\d+/[^/]+/\d+\.ajax\?tab=all&fileType=json";

/// Column order of the "all holdings" JSON table. The payload itself does
/// not name its columns.
pub const HOLDING_COLUMNS: [&str; 18] = [
    "ticker",
    "name",
    "sector",
    "assetClass",
    "marketValue",
    "weight",
    "notionalValue",
    "shares",
    "cusip",
    "isin",
    "sedol",
    "last",
    "location",
    "exchange",
    "currency",
    "fxRate",
    "marketCurrency",
    "accrualDate",
];

pub static DEFAULT_CONFIG: Lazy<ProviderConfig> = Lazy::new(ProviderConfig::blackrock);

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    origin: String,
    listing_path: String,
    holdings_pattern: Regex,
    holding_columns: Vec<String>,
    filter: FundFilter,
    timeout_ms: Option<u64>,
}

impl ProviderConfig {
    pub fn blackrock() -> Self {
        Self {
            origin: BLACKROCK_ORIGIN.to_string(),
            listing_path: LISTING_PATH.to_string(),
            holdings_pattern: compiled_holdings_pattern().clone(),
            holding_columns: HOLDING_COLUMNS.iter().map(|c| c.to_string()).collect(),
            filter: FundFilter::default(),
            timeout_ms: None,
        }
    }

    pub fn with_origin(mut self, origin: impl AsRef<str>) -> Self {
        self.origin = origin.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn with_holding_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.holding_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter(mut self, filter: FundFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn filter(&self) -> &FundFilter {
        &self.filter
    }

    pub fn holding_columns(&self) -> &[String] {
        &self.holding_columns
    }

    pub const fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    /// Resolves a site-relative path against the origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    pub fn listing_url(&self) -> String {
        self.url(&self.listing_path)
    }

    pub fn holdings_locator(&self) -> PatternLocator {
        PatternLocator::new(self.holdings_pattern.clone())
    }

    /// Holdings rows may carry trailing columns past the fixed layout.
    pub fn holding_index(&self) -> ColumnIndex {
        ColumnIndex::new(self.holding_columns.iter().cloned(), RowShape::AtLeast)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

fn compiled_holdings_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(HOLDINGS_URI_PATTERN).expect("holdings URI pattern is a valid regex")
    });
    &PATTERN
}
