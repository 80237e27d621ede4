use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{FundHoldingRow, FundRow, HoldingRow};
use crate::error::DecodeError;
use crate::table::Record;

/// Qualifying row of the provider's fund listing table.
///
/// Only the columns the pipeline reads are typed; the rest stay in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundListingRecord {
    pub local_exchange_ticker: String,
    pub fund_short_name: String,
    pub product_page_url: String,
    pub product_view: Vec<Value>,
    pub aladdin_asset_class: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FundListingRecord {
    pub fn from_record(mut record: Record) -> Result<Self, DecodeError> {
        Ok(Self {
            local_exchange_ticker: record.take("localExchangeTicker")?,
            fund_short_name: record.take("fundShortName")?,
            product_page_url: record.take("productPageUrl")?,
            product_view: record.take("productView")?,
            aladdin_asset_class: record.take("aladdinAssetClass")?,
            extra: record.into_fields(),
        })
    }

    /// Second component of `productView`, the fund family tag.
    pub fn family_tag(&self) -> Option<&str> {
        self.product_view.get(1).and_then(Value::as_str)
    }

    pub fn to_fund_row(&self) -> FundRow {
        FundRow {
            ticker: self.local_exchange_ticker.clone(),
            name: self.fund_short_name.clone(),
        }
    }
}

/// Raw numeric value paired with the provider's formatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericCell {
    pub raw: f64,
    #[serde(default)]
    pub display: Option<String>,
}

/// One security inside a fund's holdings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRecord {
    pub ticker: String,
    pub name: String,
    pub last: NumericCell,
    pub weight: NumericCell,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HoldingRecord {
    pub fn from_record(mut record: Record) -> Result<Self, DecodeError> {
        Ok(Self {
            ticker: record.take("ticker")?,
            name: record.take("name")?,
            last: record.take("last")?,
            weight: record.take("weight")?,
            extra: record.into_fields(),
        })
    }

    pub fn to_holding_row(&self) -> HoldingRow {
        HoldingRow {
            ticker: self.ticker.clone(),
            name: self.name.clone(),
            last: self.last.raw,
        }
    }

    pub fn to_fund_holding_row(&self, fund_ticker: &str) -> FundHoldingRow {
        FundHoldingRow {
            fund: fund_ticker.to_string(),
            holding: self.ticker.clone(),
            weight: self.weight.raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(fields) => Record::from(fields),
            _ => Record::default(),
        }
    }

    #[test]
    fn listing_record_keeps_untyped_columns() {
        let fund = FundListingRecord::from_record(record(json!({
            "localExchangeTicker": "IVV",
            "fundShortName": "iShares Core S&P 500 ETF",
            "productPageUrl": "/us/individual/ivv",
            "productView": ["x", "ishares"],
            "aladdinAssetClass": "Equity",
            "inceptionDate": "2000-05-15"
        })))
        .expect("all required fields present");

        assert_eq!(fund.family_tag(), Some("ishares"));
        assert_eq!(fund.extra.get("inceptionDate"), Some(&json!("2000-05-15")));
        assert_eq!(
            fund.to_fund_row(),
            FundRow {
                ticker: String::from("IVV"),
                name: String::from("iShares Core S&P 500 ETF"),
            }
        );
    }

    #[test]
    fn holding_record_requires_raw_numbers() {
        let error = HoldingRecord::from_record(record(json!({
            "ticker": "AAPL",
            "name": "Apple Inc",
            "last": {"display": "$190.50"},
            "weight": {"raw": 0.07, "display": "7.00%"}
        })))
        .expect_err("last.raw is missing");

        assert!(matches!(
            error,
            DecodeError::InvalidField { ref field, ref message }
                if field == "last" && message.contains("raw")
        ));
    }

    #[test]
    fn listing_record_reports_missing_product_page() {
        let error = FundListingRecord::from_record(record(json!({
            "localExchangeTicker": "IVV",
            "fundShortName": "iShares Core S&P 500 ETF",
            "productView": ["x", "ishares"],
            "aladdinAssetClass": "Equity"
        })))
        .expect_err("productPageUrl is required");

        assert_eq!(
            error,
            DecodeError::MissingField {
                field: String::from("productPageUrl")
            }
        );
    }
}
