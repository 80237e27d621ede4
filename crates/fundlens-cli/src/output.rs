pub mod stream_writer;

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render_rows<T: Serialize>(
    rows: &[T],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    write_rows(stdout.lock(), rows, format, pretty)
}

/// Renders a single document. NDJSON output is the compact document on one line.
pub fn render_document<T: Serialize>(
    document: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(document)?,
        OutputFormat::Json | OutputFormat::Ndjson => serde_json::to_string(document)?,
    };
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{payload}")?;
    writer.flush()?;
    Ok(())
}

fn write_rows<W: Write, T: Serialize>(
    mut writer: W,
    rows: &[T],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(rows)?
            } else {
                serde_json::to_string(rows)?
            };
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Ndjson => {
            for row in rows {
                let payload = serde_json::to_string(row)?;
                writeln!(writer, "{payload}")?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
