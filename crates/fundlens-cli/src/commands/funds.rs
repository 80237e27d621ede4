use fundlens_core::{BlackrockAdapter, FundRow};
use futures::{StreamExt, TryStreamExt};

use crate::cli::{FundsArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::validate_limit;

pub async fn run(
    args: &FundsArgs,
    adapter: &BlackrockAdapter,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let limit = validate_limit(args.limit)?.unwrap_or(usize::MAX);

    let funds = adapter
        .fund_records()
        .take(limit)
        .map_ok(|record| record.to_fund_row())
        .try_collect::<Vec<FundRow>>()
        .await?;

    output::render_rows(&funds, format, pretty)
}
