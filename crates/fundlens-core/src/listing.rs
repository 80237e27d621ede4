//! Fund listing table: payload shape, fund filter and row reshaping.

use std::iter::Enumerate;
use std::vec::IntoIter;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::FundListingRecord;
use crate::error::{DecodeError, SourceError};
use crate::table::{strip_bom, ColumnIndex, Record, RowShape};

const PRODUCT_VIEW_COLUMN: &str = "productView";
const ASSET_CLASS_COLUMN: &str = "aladdinAssetClass";

/// `{data: {tableData: {columns, data}}}` as returned by the screener.
#[derive(Debug, Deserialize)]
struct ListingPayload {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingData {
    table_data: ListingTable,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingColumn {
    pub name: String,
}

/// Column definitions plus positional rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingTable {
    pub columns: Vec<ListingColumn>,
    pub data: Vec<Vec<Value>>,
}

impl ListingTable {
    pub fn parse(body: &str) -> Result<Self, SourceError> {
        let payload: ListingPayload = serde_json::from_str(strip_bom(body))
            .map_err(|e| SourceError::parse("fund listing", e.to_string()))?;
        Ok(payload.data.table_data)
    }

    pub fn column_index(&self) -> ColumnIndex {
        ColumnIndex::new(
            self.columns.iter().map(|column| column.name.clone()),
            RowShape::Exact,
        )
    }

    /// Lazily decodes rows, yielding only the ones that pass `filter`.
    pub fn into_funds(self, filter: FundFilter) -> QualifyingFunds {
        QualifyingFunds {
            index: self.column_index(),
            filter,
            rows: self.data.into_iter().enumerate(),
        }
    }
}

/// The family / asset-class predicate pair applied to listing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundFilter {
    pub family_tag: String,
    pub asset_class: String,
}

impl FundFilter {
    pub fn new(family_tag: impl Into<String>, asset_class: impl Into<String>) -> Self {
        Self {
            family_tag: family_tag.into(),
            asset_class: asset_class.into(),
        }
    }

    /// `productView[1]` equals the family tag.
    pub fn is_family_member(&self, record: &Record) -> bool {
        record
            .get(PRODUCT_VIEW_COLUMN)
            .and_then(|view| view.get(1))
            .and_then(Value::as_str)
            == Some(self.family_tag.as_str())
    }

    /// `aladdinAssetClass` equals the asset-class tag.
    pub fn is_asset_class(&self, record: &Record) -> bool {
        record.get_str(ASSET_CLASS_COLUMN) == Some(self.asset_class.as_str())
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.is_family_member(record) && self.is_asset_class(record)
    }
}

impl Default for FundFilter {
    fn default() -> Self {
        Self::new("ishares", "Equity")
    }
}

/// Iterator over the listing rows that pass a [`FundFilter`].
///
/// Rows are decoded one at a time; rejected rows are skipped without being
/// converted to a typed record.
#[derive(Debug)]
pub struct QualifyingFunds {
    index: ColumnIndex,
    filter: FundFilter,
    rows: Enumerate<IntoIter<Vec<Value>>>,
}

impl Iterator for QualifyingFunds {
    type Item = Result<FundListingRecord, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (row, values) in self.rows.by_ref() {
            let record = match self.index.decode(row, values) {
                Ok(record) => record,
                Err(error) => return Some(Err(error)),
            };
            if self.filter.matches(&record) {
                return Some(FundListingRecord::from_record(record));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: [&str; 5] = [
        "fundShortName",
        "localExchangeTicker",
        "productView",
        "aladdinAssetClass",
        "productPageUrl",
    ];

    fn table(rows: Vec<Value>) -> ListingTable {
        let body = json!({
            "data": {
                "tableData": {
                    "columns": COLUMNS.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>(),
                    "data": rows,
                }
            }
        });
        ListingTable::parse(&body.to_string()).expect("listing payload is well formed")
    }

    fn ivv_row(asset_class: &str) -> Value {
        json!([
            "iShares Core S&P 500 ETF",
            "IVV",
            ["x", "ishares"],
            asset_class,
            "/us/individual/ivv"
        ])
    }

    #[test]
    fn equity_ishares_fund_is_included_with_its_values() {
        let funds = table(vec![ivv_row("Equity")])
            .into_funds(FundFilter::default())
            .collect::<Result<Vec<_>, _>>()
            .expect("row decodes");

        assert_eq!(funds.len(), 1);
        let fund = &funds[0];
        assert_eq!(fund.fund_short_name, "iShares Core S&P 500 ETF");
        assert_eq!(fund.local_exchange_ticker, "IVV");
        assert_eq!(fund.product_view, vec![json!("x"), json!("ishares")]);
        assert_eq!(fund.aladdin_asset_class, "Equity");
        assert_eq!(fund.product_page_url, "/us/individual/ivv");
    }

    #[test]
    fn fixed_income_fund_is_excluded() {
        let funds = table(vec![ivv_row("Fixed Income")])
            .into_funds(FundFilter::default())
            .collect::<Vec<_>>();

        assert!(funds.is_empty());
    }

    #[test]
    fn other_family_is_excluded_even_when_equity() {
        let funds = table(vec![json!([
            "Some Other ETF",
            "OTH",
            ["x", "blackrock"],
            "Equity",
            "/us/individual/oth"
        ])])
        .into_funds(FundFilter::default())
        .collect::<Vec<_>>();

        assert!(funds.is_empty());
    }

    #[test]
    fn rejected_rows_are_not_typed() {
        // Non-qualifying rows may lack fields a qualifying fund needs.
        let funds = table(vec![
            json!([null, null, ["x", "ishares"], "Fixed Income", null]),
            ivv_row("Equity"),
        ])
        .into_funds(FundFilter::default())
        .collect::<Result<Vec<_>, _>>()
        .expect("rejected row is skipped before typing");

        assert_eq!(funds.len(), 1);
    }

    #[test]
    fn short_row_fails_with_row_length() {
        let mut funds = table(vec![ivv_row("Equity"), json!(["only", "two"])])
            .into_funds(FundFilter::default());

        assert!(funds.next().expect("first row").is_ok());
        let error = funds.next().expect("second row").expect_err("short row");
        assert_eq!(
            error,
            DecodeError::RowLength {
                row: 1,
                expected: 5,
                actual: 2
            }
        );
    }

    #[test]
    fn missing_table_data_is_a_parse_error() {
        let error = ListingTable::parse(r#"{"data": {}}"#).expect_err("tableData is missing");

        assert!(matches!(error, SourceError::Parse { .. }));
    }

    #[test]
    fn predicates_are_independent() {
        let filter = FundFilter::default();
        let index = ColumnIndex::new(["productView", "aladdinAssetClass"], RowShape::Exact);
        let record = index
            .decode(0, vec![json!(["a", "ishares"]), json!("Commodity")])
            .expect("row matches");

        assert!(filter.is_family_member(&record));
        assert!(!filter.is_asset_class(&record));
        assert!(!filter.matches(&record));
    }
}
