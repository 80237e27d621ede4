//! Holdings table: payload shape and projection into emitted rows.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{FundHoldings, HoldingRecord};
use crate::error::{DecodeError, SourceError};
use crate::table::{strip_bom, ColumnIndex};

/// `{aaData: [[...], ...]}`, positional rows without column names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HoldingsTable {
    #[serde(rename = "aaData")]
    pub rows: Vec<Vec<Value>>,
}

impl HoldingsTable {
    pub fn parse(body: &str) -> Result<Self, SourceError> {
        serde_json::from_str(strip_bom(body))
            .map_err(|e| SourceError::parse("holdings", e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decodes every row against `columns` and projects it into a holding
    /// and a fund-holding relation for `fund_ticker`.
    pub fn project(
        self,
        fund_ticker: &str,
        columns: &ColumnIndex,
    ) -> Result<FundHoldings, DecodeError> {
        let records = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| HoldingRecord::from_record(columns.decode(row, values)?))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FundHoldings {
            holdings: records.iter().map(HoldingRecord::to_holding_row).collect(),
            fund_holdings: records
                .iter()
                .map(|record| record.to_fund_holding_row(fund_ticker))
                .collect(),
        })
    }
}
