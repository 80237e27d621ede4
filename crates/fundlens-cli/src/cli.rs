//! CLI argument definitions for fundlens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `funds` | List qualifying funds from the provider screener |
//! | `holdings` | Fetch one fund's holdings from its product page |
//! | `scrape` | Run the full pipeline as an NDJSON event stream |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--origin` | provider origin | Scheme and host every path resolves against |
//! | `--timeout-ms` | none | Per-request timeout |
//! | `--format` | `json` | Output format for `funds` / `holdings` (json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! Logs go to stderr and honour `RUST_LOG` (default `info`).

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Fund listing and holdings extractor for iShares funds.
#[derive(Debug, Parser)]
#[command(name = "fundlens", author, version, about)]
pub struct Cli {
    /// Override the provider origin (e.g. a local mirror).
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Per-request timeout in milliseconds. Unset uses the transport default.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON document.
    Json,
    /// Newline-delimited JSON, one row per line.
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List qualifying funds (equity iShares funds) as fund rows.
    ///
    ///   fundlens funds
    ///   fundlens funds --limit 10 --format ndjson
    Funds(FundsArgs),

    /// Locate and fetch the holdings of a single fund.
    ///
    ///   fundlens holdings /us/individual/products/239726/ishares-core-sp-500-etf --fund IVV
    Holdings(HoldingsArgs),

    /// Run the whole pipeline and stream fund snapshots as NDJSON events.
    ///
    ///   fundlens scrape
    ///   fundlens scrape --limit 5 > snapshots.ndjson
    Scrape(ScrapeArgs),
}

#[derive(Debug, Args)]
pub struct FundsArgs {
    /// Stop after this many funds.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct HoldingsArgs {
    /// Site-relative product page path.
    pub product_page_path: String,

    /// Ticker recorded as the fund side of each fund-holding row.
    #[arg(long)]
    pub fund: String,
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Stop after this many funds.
    #[arg(long)]
    pub limit: Option<usize>,
}
