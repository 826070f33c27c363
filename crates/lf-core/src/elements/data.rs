use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::{require_id, target_entry};
use crate::enums::ElementKind;
use crate::errors::CoreError;

/// One structured value inside a data element.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataItem {
    /// A titled group. Groups may nest.
    DataElementGroup {
        #[serde(default)]
        title: String,
        #[serde(default, deserialize_with = "crate::de::null_default")]
        children: Vec<DataItem>,
    },
    /// Free-text annotation.
    #[serde(alias = "DESCRIPTIVE_DATA")]
    DescriptiveDataElement {
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
    },
    /// A single numeric measurement.
    SingleDataElement {
        #[serde(default)]
        title: String,
        #[serde(default)]
        value: Option<f64>,
        #[serde(default)]
        unit: Option<String>,
    },
}

impl DataItem {
    #[must_use]
    pub fn group(title: impl Into<String>, children: Vec<Self>) -> Self {
        Self::DataElementGroup {
            title: title.into(),
            children,
        }
    }

    #[must_use]
    pub fn descriptive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::DescriptiveDataElement {
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn single(title: impl Into<String>, value: Option<f64>, unit: Option<String>) -> Self {
        Self::SingleDataElement {
            title: title.into(),
            value,
            unit,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::DataElementGroup { title, .. }
            | Self::DescriptiveDataElement { title, .. }
            | Self::SingleDataElement { title, .. } => title,
        }
    }

    /// Append a child to a group.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `self` is not a group.
    pub fn add_child(&mut self, child: Self) -> Result<(), CoreError> {
        match self {
            Self::DataElementGroup { children, .. } => {
                children.push(child);
                Ok(())
            }
            other => Err(CoreError::validation(format!(
                "data item '{}' is not a group",
                other.title()
            ))),
        }
    }
}

/// A data element: an optional free-text description plus structured items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DataElement {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub entry_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub data_elements: Vec<DataItem>,
}

impl DataElement {
    /// A data element carrying only a description.
    #[must_use]
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// A data element wrapping a single group.
    #[must_use]
    pub fn with_group(title: impl Into<String>, children: Vec<DataItem>) -> Self {
        Self {
            data_elements: vec![DataItem::group(title, children)],
            ..Self::default()
        }
    }

    pub fn push(&mut self, item: DataItem) {
        self.data_elements.push(item);
    }

    fn is_blank(&self) -> bool {
        self.description.is_empty() && self.data_elements.is_empty()
    }

    fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        if !self.description.is_empty() {
            body.insert("description".into(), json!(self.description));
        }
        body.insert("data_elements".into(), json!(self.data_elements));
        body.insert("locked".into(), json!(false));
        body
    }

    /// Body for `POST elements/data`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when no entry id is available or the
    /// element carries nothing to write.
    pub fn create_payload(&self, entry_id: &str) -> Result<Value, CoreError> {
        let entry_id = target_entry(entry_id, self.entry_id.as_deref())?;
        if self.is_blank() {
            return Err(CoreError::validation("no data to write"));
        }
        let mut body = self.body();
        body.insert("entry_id".into(), json!(entry_id));
        Ok(Value::Object(body))
    }

    /// Body for `PUT elements/data/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the id is unset or the element
    /// carries nothing to write.
    pub fn update_payload(&self) -> Result<Value, CoreError> {
        let id = require_id(self.id.as_deref(), ElementKind::Data)?;
        if self.is_blank() {
            return Err(CoreError::validation("no data to write"));
        }
        let mut body = self.body();
        body.insert("id".into(), json!(id));
        Ok(Value::Object(body))
    }
}
