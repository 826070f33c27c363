use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{require_id, target_entry};
use crate::enums::ElementKind;
use crate::errors::CoreError;

/// A rich-text block. `content` is the HTML Labfolder stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TextElement {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub entry_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub content: String,
}

impl TextElement {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Body for `POST elements/text`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when no entry id is available.
    pub fn create_payload(&self, entry_id: &str) -> Result<Value, CoreError> {
        let entry_id = target_entry(entry_id, self.entry_id.as_deref())?;
        Ok(json!({ "entry_id": entry_id, "content": self.content }))
    }

    /// Body for `PUT elements/text/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the id is unset or there is no
    /// text to write.
    pub fn update_payload(&self) -> Result<Value, CoreError> {
        let id = require_id(self.id.as_deref(), ElementKind::Text)?;
        if self.content.is_empty() {
            return Err(CoreError::validation("no text to write"));
        }
        Ok(json!({ "id": id, "content": self.content }))
    }
}
