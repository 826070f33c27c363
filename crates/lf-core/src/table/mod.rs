//! Table elements and the sheet <-> frame conversion.

mod frame;

pub use frame::{CellValue, Frame, Row};

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::elements::{require_id, target_entry};
use crate::enums::ElementKind;
use crate::errors::CoreError;

#[derive(Deserialize)]
struct TableWire {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    entry_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    title: String,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    owner_id: Option<String>,
    #[serde(default)]
    creation_date: Option<String>,
    #[serde(default)]
    content: Option<ContentWire>,
}

#[derive(Deserialize)]
struct ContentWire {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    sheets: BTreeMap<String, SheetWire>,
}

#[derive(Deserialize)]
struct SheetWire {
    #[serde(default)]
    data: Option<SheetDataWire>,
}

#[derive(Deserialize)]
struct SheetDataWire {
    #[serde(rename = "dataTable", default)]
    data_table: Value,
}

/// A spreadsheet block: named sheets held as editable frames.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq)]
pub struct TableElement {
    pub id: Option<String>,
    pub entry_id: Option<String>,
    pub title: String,
    pub owner_id: Option<String>,
    pub creation_date: Option<String>,
    pub sheets: BTreeMap<String, Frame>,
}

impl TableElement {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build from a `GET elements/table/{id}` body, converting every sheet.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] for a malformed body or
    /// [`CoreError::Table`] for a sheet that cannot be converted.
    pub fn from_wire(body: Value, header: bool) -> Result<Self, CoreError> {
        let wire: TableWire = serde_json::from_value(body)?;
        let mut sheets = BTreeMap::new();
        if let Some(content) = wire.content {
            for (name, sheet) in content.sheets {
                let table = sheet.data.map(|d| d.data_table).unwrap_or(Value::Null);
                let frame = Frame::from_data_table(&table, header)
                    .map_err(|e| CoreError::table(format!("sheet '{name}': {e}")))?;
                sheets.insert(name, frame);
            }
        }
        Ok(Self {
            id: wire.id,
            entry_id: wire.entry_id,
            title: wire.title,
            owner_id: wire.owner_id,
            creation_date: wire.creation_date,
            sheets,
        })
    }

    /// Insert or replace a sheet.
    pub fn add_sheet(&mut self, name: impl Into<String>, frame: Frame) {
        self.sheets.insert(name.into(), frame);
    }

    /// The `content` object Labfolder expects: `{ "sheets": { name: sheet } }`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the table has no sheets.
    pub fn content(&self, header: bool) -> Result<Value, CoreError> {
        if self.sheets.is_empty() {
            return Err(CoreError::validation("no table to write"));
        }
        let sheets: Map<String, Value> = self
            .sheets
            .iter()
            .map(|(name, frame)| (name.clone(), frame.to_sheet(name, header)))
            .collect();
        Ok(json!({ "sheets": sheets }))
    }

    /// Body for `POST elements/table`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when no entry id is available or the
    /// table has no sheets.
    pub fn create_payload(&self, entry_id: &str, header: bool) -> Result<Value, CoreError> {
        let entry_id = target_entry(entry_id, self.entry_id.as_deref())?;
        Ok(json!({
            "entry_id": entry_id,
            "title": self.title,
            "content": self.content(header)?,
            "locked": false,
        }))
    }

    /// Body for `PUT elements/table/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the id is unset or the table
    /// has no sheets.
    pub fn update_payload(&self, header: bool) -> Result<Value, CoreError> {
        let id = require_id(self.id.as_deref(), ElementKind::Table)?;
        Ok(json!({
            "entry_id": self.entry_id,
            "id": id,
            "content": self.content(header)?,
            "locked": false,
        }))
    }
}
