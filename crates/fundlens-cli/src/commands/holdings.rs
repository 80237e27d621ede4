use fundlens_core::BlackrockAdapter;
use tracing::info;

use crate::cli::{HoldingsArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &HoldingsArgs,
    adapter: &BlackrockAdapter,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let path = args.product_page_path.trim();
    if !path.starts_with('/') {
        return Err(CliError::InvalidArgument(format!(
            "product page path must be site-relative, got '{path}'"
        )));
    }
    let fund = args.fund.trim();
    if fund.is_empty() {
        return Err(CliError::InvalidArgument(String::from(
            "--fund must not be empty",
        )));
    }

    let holdings = adapter.holdings_for_page(fund, path).await?;
    info!(fund, holdings = holdings.len(), "holdings fetched");

    output::render_document(&holdings, format, pretty)
}
