//! NDJSON event stream written by `scrape`.
//!
//! A run is one `start` line, one `chunk` line per fund snapshot and a
//! closing `end` line. An aborted run closes with `error` instead. Every
//! line carries a `seq` starting at 1 and an RFC 3339 `ts`.

use std::io::Write;

use fundlens_core::{FundSnapshot, ProviderId};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::CliError;

/// Counters carried by the closing event of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub run_id: Uuid,
    pub funds: usize,
    pub holdings: usize,
}

impl RunTotals {
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            funds: 0,
            holdings: 0,
        }
    }

    pub fn record(&mut self, snapshot: &FundSnapshot) {
        self.funds += 1;
        self.holdings += snapshot.holdings.len();
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ScrapeEvent<'a> {
    Start {
        run_id: Uuid,
        provider: ProviderId,
        origin: &'a str,
    },
    /// Snapshot fields sit at the top level of the line.
    Chunk(&'a FundSnapshot),
    End(RunTotals),
    Error {
        run_id: Uuid,
        funds: usize,
        code: &'a str,
        message: String,
    },
}

#[derive(Serialize)]
struct EventLine<'a> {
    seq: u64,
    #[serde(with = "time::serde::rfc3339")]
    ts: OffsetDateTime,
    #[serde(flatten)]
    event: &'a ScrapeEvent<'a>,
}

/// Numbers events and writes each as one flushed JSON line.
pub struct EventWriter<W: Write> {
    writer: W,
    next_seq: u64,
}

impl<W: Write> EventWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_seq: 1,
        }
    }

    pub fn emit(&mut self, event: &ScrapeEvent<'_>) -> Result<(), CliError> {
        let line = EventLine {
            seq: self.next_seq,
            ts: OffsetDateTime::now_utc(),
            event,
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.next_seq += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use fundlens_core::{FundHoldingRow, FundHoldings, FundRow, HoldingRow};
    use serde_json::Value;

    fn lines(sink: &[u8]) -> Vec<Value> {
        std::str::from_utf8(sink)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).expect("json line"))
            .collect()
    }

    fn ivv_snapshot() -> FundSnapshot {
        FundSnapshot::new(
            FundRow {
                ticker: String::from("IVV"),
                name: String::from("iShares Core S&P 500 ETF"),
            },
            FundHoldings {
                holdings: vec![HoldingRow {
                    ticker: String::from("AAPL"),
                    name: String::from("Apple Inc"),
                    last: 235.27,
                }],
                fund_holdings: vec![FundHoldingRow {
                    fund: String::from("IVV"),
                    holding: String::from("AAPL"),
                    weight: 6.91,
                }],
            },
        )
    }

    #[test]
    fn run_is_numbered_from_one_and_closed_with_totals() {
        let run_id = Uuid::new_v4();
        let snapshot = ivv_snapshot();
        let mut totals = RunTotals::new(run_id);
        let mut sink = Vec::<u8>::new();

        {
            let mut writer = EventWriter::new(&mut sink);
            writer
                .emit(&ScrapeEvent::Start {
                    run_id,
                    provider: ProviderId::Blackrock,
                    origin: "https://fixture.test",
                })
                .expect("start");
            totals.record(&snapshot);
            writer.emit(&ScrapeEvent::Chunk(&snapshot)).expect("chunk");
            writer.emit(&ScrapeEvent::End(totals)).expect("end");
        }

        let lines = lines(&sink);
        let kinds = lines
            .iter()
            .map(|line| line["event"].as_str().unwrap_or_default())
            .collect::<Vec<_>>();
        let seqs = lines
            .iter()
            .map(|line| line["seq"].as_u64())
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec!["start", "chunk", "end"]);
        assert_eq!(seqs, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(lines[0]["provider"], "blackrock");
        assert_eq!(lines[1]["fund"]["ticker"], "IVV");
        assert_eq!(lines[1]["fund_holdings"][0]["weight"], 6.91);
        assert_eq!(lines[2]["funds"], 1);
        assert_eq!(lines[2]["holdings"], 1);
        assert_eq!(lines[0]["run_id"], lines[2]["run_id"]);
        assert!(lines[0]["ts"]
            .as_str()
            .is_some_and(|ts| ts.ends_with('Z')));
    }

    #[test]
    fn error_event_carries_code_message_and_progress() {
        let mut sink = Vec::<u8>::new();

        EventWriter::new(&mut sink)
            .emit(&ScrapeEvent::Error {
                run_id: Uuid::new_v4(),
                funds: 2,
                code: "upstream_status",
                message: String::from("503 Service Unavailable: down"),
            })
            .expect("error event");

        let line = lines(&sink).remove(0);
        assert_eq!(line["event"], "error");
        assert_eq!(line["seq"], 1);
        assert_eq!(line["code"], "upstream_status");
        assert_eq!(line["funds"], 2);
    }
}
