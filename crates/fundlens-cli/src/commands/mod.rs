mod funds;
mod holdings;
mod scrape;

use std::sync::Arc;

use fundlens_core::{BlackrockAdapter, ProviderConfig, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let adapter = build_adapter(cli)?;

    match &cli.command {
        Command::Funds(args) => funds::run(args, &adapter, cli.format, cli.pretty).await,
        Command::Holdings(args) => holdings::run(args, &adapter, cli.format, cli.pretty).await,
        Command::Scrape(args) => scrape::run(args, &adapter).await,
    }
}

fn build_adapter(cli: &Cli) -> Result<BlackrockAdapter, CliError> {
    let config = provider_config(cli)?;
    Ok(BlackrockAdapter::new(
        Arc::new(ReqwestHttpClient::new()),
        config,
    ))
}

fn provider_config(cli: &Cli) -> Result<ProviderConfig, CliError> {
    let mut config = ProviderConfig::default().with_timeout_ms(cli.timeout_ms);

    if let Some(origin) = &cli.origin {
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(CliError::InvalidArgument(format!(
                "--origin must start with http:// or https://, got '{origin}'"
            )));
        }
        config = config.with_origin(origin);
    }

    if cli.timeout_ms == Some(0) {
        return Err(CliError::InvalidArgument(String::from(
            "--timeout-ms must be greater than zero",
        )));
    }

    Ok(config)
}

fn validate_limit(limit: Option<usize>) -> Result<Option<usize>, CliError> {
    if limit == Some(0) {
        return Err(CliError::InvalidArgument(String::from(
            "--limit must be greater than zero",
        )));
    }
    Ok(limit)
}
