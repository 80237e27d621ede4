//! # Fundlens Core
//!
//! Fund listing and holdings extraction for the BlackRock / iShares web
//! endpoints.
//!
//! ## Overview
//!
//! The provider publishes two positional tables: a fund screener with its
//! own column definitions, and a per-fund holdings table whose column
//! order is fixed out of band. This crate fetches both, reshapes rows into
//! named records and emits flat fund, holding and fund-holding rows.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters ([`BlackrockAdapter`]) |
//! | [`config`] | Provider origin, endpoints, patterns and column layout |
//! | [`domain`] | Typed records and emitted rows |
//! | [`error`] | Source and decode errors |
//! | [`holdings`] | Holdings table payload and projection |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`listing`] | Listing table payload and fund filter |
//! | [`locator`] | Holdings URI discovery inside product pages |
//! | [`source`] | Provider identifiers and the [`FundSource`] contract |
//! | [`table`] | Column-indexed row decoding |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fundlens_core::{BlackrockAdapter, FundSource};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = BlackrockAdapter::default();
//!     let mut funds = adapter.funds();
//!
//!     while let Some(snapshot) = funds.try_next().await? {
//!         println!("{}: {} holdings", snapshot.fund.ticker, snapshot.holdings.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! listing ──▶ filter ──▶ product page ──▶ holdings URI ──▶ holdings ──▶ snapshot
//!   (1 request)            (1 per fund)     (regex)        (0-1 per fund)
//! ```
//!
//! Requests are issued one at a time as the consumer polls the stream. The
//! first failure ends the run; no retries are attempted.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod holdings;
pub mod http_client;
pub mod listing;
pub mod locator;
pub mod source;
pub mod table;

pub use adapters::BlackrockAdapter;

pub use config::{ProviderConfig, DEFAULT_CONFIG};

pub use domain::{
    FundHoldingRow, FundHoldings, FundListingRecord, FundRow, FundSnapshot, HoldingRecord,
    HoldingRow, NumericCell,
};

pub use error::{DecodeError, SourceError, SourceErrorKind};

pub use holdings::HoldingsTable;

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

pub use listing::{FundFilter, ListingTable};

pub use locator::{HoldingsLocator, PatternLocator};

pub use source::{FundSource, FundStream, ProviderId};

pub use table::{ColumnIndex, Record, RowShape};
