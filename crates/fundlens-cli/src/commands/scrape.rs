use std::io::{self, Write};

use fundlens_core::{BlackrockAdapter, FundSource};
use futures::StreamExt;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cli::ScrapeArgs;
use crate::error::CliError;
use crate::output::stream_writer::{EventWriter, RunTotals, ScrapeEvent};

use super::validate_limit;

pub async fn run(args: &ScrapeArgs, adapter: &BlackrockAdapter) -> Result<(), CliError> {
    let limit = validate_limit(args.limit)?;
    let stdout = io::stdout();
    stream_snapshots(adapter, adapter.config().origin(), limit, stdout.lock()).await
}

/// Drives the fund stream and writes one `chunk` event per snapshot.
///
/// A failure is written as an `error` event and then returned; no `end`
/// event follows it.
async fn stream_snapshots<W: Write>(
    source: &dyn FundSource,
    origin: &str,
    limit: Option<usize>,
    sink: W,
) -> Result<(), CliError> {
    let run_id = Uuid::new_v4();
    let mut totals = RunTotals::new(run_id);
    let mut writer = EventWriter::new(sink);
    writer.emit(&ScrapeEvent::Start {
        run_id,
        provider: source.id(),
        origin,
    })?;
    info!(%run_id, provider = %source.id(), "scrape started");

    let mut funds = source.funds().take(limit.unwrap_or(usize::MAX));
    while let Some(next) = funds.next().await {
        let snapshot = match next {
            Ok(snapshot) => snapshot,
            Err(error) => {
                let error = CliError::from(error);
                warn!(%run_id, %error, "scrape aborted");
                writer.emit(&ScrapeEvent::Error {
                    run_id,
                    funds: totals.funds,
                    code: error.code(),
                    message: error.to_string(),
                })?;
                return Err(error);
            }
        };

        totals.record(&snapshot);
        writer.emit(&ScrapeEvent::Chunk(&snapshot))?;
    }

    writer.emit(&ScrapeEvent::End(totals))?;
    info!(%run_id, funds = totals.funds, holdings = totals.holdings, "scrape finished");

    Ok(())
}
