//! Notebook entries and the element references they carry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::enums::ElementKind;
use crate::errors::CoreError;

/// An `{ "id", "type" }` record in an entry's element list.
///
/// `kind` stays a plain string so entries containing element types this
/// client does not model still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ElementRef {
    #[serde(deserialize_with = "crate::de::id")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ElementRef {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind: kind.as_str().to_string(),
        }
    }

    /// Typed kind of this reference.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownElementKind`] for types this client does
    /// not model.
    pub fn element_kind(&self) -> Result<ElementKind, CoreError> {
        self.kind.parse()
    }
}

/// A Labfolder notebook entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entry {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub author_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub project_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub elements: Vec<ElementRef>,
}

impl Entry {
    /// A new, unsaved entry in `project_id`.
    #[must_use]
    pub fn draft(project_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author_id(&mut self, author_id: impl Into<String>) {
        self.author_id = Some(author_id.into());
    }

    pub fn set_project_id(&mut self, project_id: impl Into<String>) {
        self.project_id = Some(project_id.into());
    }

    pub fn set_creation_date(&mut self, creation_date: impl Into<String>) {
        self.creation_date = Some(creation_date.into());
    }

    /// Append tags, dropping duplicates. Existing order is preserved and new
    /// tags keep the order in which they were first seen.
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    pub fn add_element(&mut self, element: ElementRef) {
        self.elements.push(element);
    }

    /// Body for `POST entries`. The author is always the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when no project is set.
    pub fn create_payload(&self, author_id: &str) -> Result<Value, CoreError> {
        let project_id = self
            .project_id
            .as_deref()
            .ok_or_else(|| CoreError::validation("entry has no project id"))?;
        Ok(json!({
            "title": self.title,
            "author_id": author_id,
            "project_id": project_id,
            "tags": self.tags,
            "elements": self.elements,
        }))
    }

    /// Body for `PUT entries/{id}`. Entries are always written unlocked.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the entry has no id yet.
    pub fn update_payload(&self) -> Result<Value, CoreError> {
        self.require_id()?;
        Ok(json!({
            "title": self.title,
            "author_id": self.author_id,
            "project_id": self.project_id,
            "tags": self.tags,
            "elements": self.elements,
            "locked": false,
        }))
    }

    /// The entry id, or a validation error if it was never saved.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the id is unset.
    pub fn require_id(&self) -> Result<&str, CoreError> {
        self.id
            .as_deref()
            .ok_or_else(|| CoreError::validation("entry id not set"))
    }
}
