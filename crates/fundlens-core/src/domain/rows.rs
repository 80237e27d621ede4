use serde::{Deserialize, Serialize};

/// Emitted fund entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRow {
    pub ticker: String,
    pub name: String,
}

/// Emitted security entity. Repeats across funds; no dedup happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRow {
    pub ticker: String,
    pub name: String,
    pub last: f64,
}

/// Emitted fund to security relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundHoldingRow {
    pub fund: String,
    pub holding: String,
    pub weight: f64,
}

/// Holdings of one fund. Both vectors are index-aligned with the source rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundHoldings {
    pub holdings: Vec<HoldingRow>,
    pub fund_holdings: Vec<FundHoldingRow>,
}

impl FundHoldings {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// One emitted triple: the fund, its holdings and the relations between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSnapshot {
    pub fund: FundRow,
    pub holdings: Vec<HoldingRow>,
    pub fund_holdings: Vec<FundHoldingRow>,
}

impl FundSnapshot {
    pub fn new(fund: FundRow, holdings: FundHoldings) -> Self {
        Self {
            fund,
            holdings: holdings.holdings,
            fund_holdings: holdings.fund_holdings,
        }
    }

    pub fn into_parts(self) -> (FundRow, Vec<HoldingRow>, Vec<FundHoldingRow>) {
        (self.fund, self.holdings, self.fund_holdings)
    }
}
