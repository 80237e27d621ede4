//! Column-indexed table decoding.
//!
//! Both provider tables ship rows as positional arrays. A [`ColumnIndex`]
//! pairs each column name with its position and turns a row back into a
//! named [`Record`], checking the row length first so a short row is
//! reported instead of silently producing holes.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// How strictly a row's length is checked against the column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    /// Row length must equal the column count.
    Exact,
    /// Row may carry trailing values beyond the known columns; they are ignored.
    AtLeast,
}

/// Ordered column-name to position mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    columns: Vec<(String, usize)>,
    shape: RowShape,
}

impl ColumnIndex {
    /// Builds the mapping in the order the names are given.
    pub fn new<I, S>(names: I, shape: RowShape) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (name.into(), idx))
            .collect();
        Self { columns, shape }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, idx)| *idx)
    }

    /// Reshapes row number `row` into a named record.
    pub fn decode(&self, row: usize, values: Vec<Value>) -> Result<Record, DecodeError> {
        let length_ok = match self.shape {
            RowShape::Exact => values.len() == self.columns.len(),
            RowShape::AtLeast => values.len() >= self.columns.len(),
        };
        if !length_ok {
            return Err(DecodeError::RowLength {
                row,
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        let mut values = values.into_iter().map(Some).collect::<Vec<_>>();
        let mut fields = Map::with_capacity(self.columns.len());
        for (name, idx) in &self.columns {
            let value = values[*idx].take().unwrap_or(Value::Null);
            fields.insert(name.clone(), value);
        }
        Ok(Record { fields })
    }
}

/// One row reconstructed as a name to value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Removes column `name` and deserializes it.
    ///
    /// An absent column is `MissingField`; a value of the wrong shape is
    /// `InvalidField` naming that column.
    pub fn take<T: DeserializeOwned>(&mut self, name: &str) -> Result<T, DecodeError> {
        let value = self
            .fields
            .remove(name)
            .ok_or_else(|| DecodeError::MissingField {
                field: name.to_string(),
            })?;
        serde_json::from_value(value).map_err(|error| DecodeError::InvalidField {
            field: name.to_string(),
            message: error.to_string(),
        })
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Drops a leading UTF-8 byte order mark; the holdings endpoint sends one.
pub(crate) fn strip_bom(body: &str) -> &str {
    body.trim_start_matches('\u{feff}')
}
