//! Rectangular, column-labelled view of one sheet.
//!
//! Labfolder stores a sheet as `dataTable`: a map from row index to a map
//! from column index to `{ "value": ... }`. Indices are decimal strings and
//! rows or cells may be absent. A [`Frame`] is the dense form: empty rows and
//! columns dropped, optionally with the first row promoted to column labels.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::errors::CoreError;

/// A non-empty cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    /// Whole numbers, kept exact so they write back unchanged.
    Integer(i64),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Read a cell's `value`. `null`, containers and non-finite numbers are
    /// empty.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n.as_i64().map_or_else(
                || n.as_f64().filter(|f| f.is_finite()).map(Self::Number),
                |i| Some(Self::Integer(i)),
            ),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Interpret a text field (e.g. from CSV). Empty input is an empty cell.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        match raw {
            "true" => return Some(Self::Bool(true)),
            "false" => return Some(Self::Bool(false)),
            _ => {}
        }
        if let Ok(i) = raw.trim().parse::<i64>() {
            return Some(Self::Integer(i));
        }
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(Self::Number(n)),
            _ => Some(Self::Text(raw.to_string())),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => json!(b),
            Self::Integer(i) => json!(i),
            Self::Number(n) if n.is_finite() => json!(n),
            Self::Number(_) => Value::Null,
            Self::Text(s) => json!(s),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

pub type Row = Vec<Option<CellValue>>;

/// Dense table with one label per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Frame {
    /// Build a frame, checking every row has one cell per column.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Table`] on a ragged row.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self, CoreError> {
        let mut frame = Self {
            columns,
            rows: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            frame.push_row(row)?;
        }
        Ok(frame)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Table`] if the row width differs from the
    /// column count.
    pub fn push_row(&mut self, row: Row) -> Result<(), CoreError> {
        if row.len() != self.columns.len() {
            return Err(CoreError::table(format!(
                "row has {} cells, frame has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(column)?.as_ref()
    }

    /// Convert a sheet's `dataTable` into a frame.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Table`] if the table is not an object of objects
    /// or an index is not a non-negative integer.
    pub fn from_data_table(table: &Value, header: bool) -> Result<Self, CoreError> {
        let rows = match table {
            Value::Null => return Ok(Self::default()),
            Value::Object(rows) => rows,
            other => {
                return Err(CoreError::table(format!(
                    "dataTable must be an object, got {other}"
                )));
            }
        };

        let mut grid: BTreeMap<usize, BTreeMap<usize, Option<CellValue>>> = BTreeMap::new();
        let mut column_keys = BTreeSet::new();
        for (row_key, row) in rows {
            let row_index = parse_index(row_key, "row")?;
            let cells = match row {
                Value::Object(cells) => cells,
                Value::Null => continue,
                other => {
                    return Err(CoreError::table(format!(
                        "row {row_key} must be an object, got {other}"
                    )));
                }
            };
            let target = grid.entry(row_index).or_default();
            for (column_key, cell) in cells {
                let column_index = parse_index(column_key, "column")?;
                let value = cell.get("value").and_then(CellValue::from_json);
                column_keys.insert(column_index);
                target.insert(column_index, value);
            }
        }

        let column_keys: Vec<usize> = column_keys.into_iter().collect();
        let mut dense: Vec<Row> = grid
            .into_values()
            .map(|cells| {
                column_keys
                    .iter()
                    .map(|key| cells.get(key).cloned().flatten())
                    .collect()
            })
            .filter(|row: &Row| row.iter().any(Option::is_some))
            .collect();

        let keep: Vec<usize> = (0..column_keys.len())
            .filter(|&i| dense.iter().any(|row| row[i].is_some()))
            .collect();
        if keep.len() != column_keys.len() {
            dense = dense
                .into_iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect();
        }

        let columns = if header && !dense.is_empty() {
            dense
                .remove(0)
                .into_iter()
                .map(|cell| cell.map(|c| c.to_string()).unwrap_or_default())
                .collect()
        } else {
            keep.iter().map(|&i| column_keys[i].to_string()).collect()
        };

        Ok(Self {
            columns,
            rows: dense,
        })
    }

    /// Export as a `dataTable`, renumbering rows and columns from zero. With
    /// `header`, the labels are written as row 0.
    #[must_use]
    pub fn to_data_table(&self, header: bool) -> Value {
        let mut table = Map::new();
        let mut offset = 0;
        if header {
            let labels: Row = self
                .columns
                .iter()
                .map(|label| (!label.is_empty()).then(|| CellValue::Text(label.clone())))
                .collect();
            table.insert("0".into(), row_to_json(&labels));
            offset = 1;
        }
        for (i, row) in self.rows.iter().enumerate() {
            table.insert((i + offset).to_string(), row_to_json(row));
        }
        Value::Object(table)
    }

    /// Export as a full sheet object.
    #[must_use]
    pub fn to_sheet(&self, name: &str, header: bool) -> Value {
        json!({
            "name": name,
            "rowCount": self.rows.len() + usize::from(header),
            "columnCount": self.columns.len(),
            "data": { "dataTable": self.to_data_table(header) },
        })
    }
}

fn parse_index(key: &str, what: &str) -> Result<usize, CoreError> {
    key.parse::<usize>()
        .map_err(|_| CoreError::table(format!("invalid {what} index '{key}'")))
}

fn row_to_json(row: &[Option<CellValue>]) -> Value {
    let cells: Map<String, Value> = row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let value = cell.as_ref().map_or(Value::Null, CellValue::to_json);
            (i.to_string(), json!({ "value": value }))
        })
        .collect();
    Value::Object(cells)
}
