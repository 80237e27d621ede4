//! # Domain Models
//!
//! Typed views over decoded provider rows and the flat rows the pipeline
//! emits.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FundListingRecord`] | One qualifying row of the fund listing table |
//! | [`HoldingRecord`] | One row of a fund's holdings table |
//! | [`NumericCell`] | Raw number paired with its display string |
//! | [`FundRow`] | Emitted fund entity |
//! | [`HoldingRow`] | Emitted security entity |
//! | [`FundHoldingRow`] | Emitted fund to security relation with weight |
//! | [`FundHoldings`] | Index-aligned holdings and relations for one fund |
//! | [`FundSnapshot`] | The fund / holdings / relations triple |

mod records;
mod rows;

pub use records::{FundListingRecord, HoldingRecord, NumericCell};
pub use rows::{FundHoldingRow, FundHoldings, FundRow, FundSnapshot, HoldingRow};
