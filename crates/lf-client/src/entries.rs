//! Notebook entries.

use lf_core::{Element, Entry, RawElement, parse_element};
use serde::Serialize;
use serde_json::Value;

use crate::{LabfolderClient, element_path, error::ClientError, require_id};

/// An entry with its elements fetched and parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDetail {
    pub entry: Entry,
    pub elements: Vec<Element>,
}

/// An entry with element bodies kept as returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawEntryDetail {
    pub entry: Entry,
    pub elements: Vec<RawElement>,
}

impl LabfolderClient {
    /// Fetch an entry and every element it references, in entry order.
    ///
    /// Element references of a kind this client does not model are logged
    /// and skipped. `header` is passed on to table conversion.
    ///
    /// # Errors
    ///
    /// Fails on the first request or parse error.
    pub async fn get_entry(&self, id: &str, header: bool) -> Result<EntryDetail, ClientError> {
        let raw = self.get_entry_raw(id).await?;
        let elements = raw
            .elements
            .into_iter()
            .map(|raw| parse_element(raw.kind, raw.body, header))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EntryDetail {
            entry: raw.entry,
            elements,
        })
    }

    /// Like [`get_entry`](Self::get_entry) but without parsing element bodies.
    ///
    /// # Errors
    ///
    /// Fails on the first request error.
    pub async fn get_entry_raw(&self, id: &str) -> Result<RawEntryDetail, ClientError> {
        let entry = self.get_entry_record(id).await?;
        let id = entry.id.as_deref().unwrap_or(id);

        let mut elements = Vec::with_capacity(entry.elements.len());
        for element in &entry.elements {
            let kind = match element.element_kind() {
                Ok(kind) => kind,
                Err(error) => {
                    tracing::warn!(entry = id, element = %element.id, %error, "skipping element");
                    continue;
                }
            };
            let body = self.get_json(&element_path(kind, &element.id)).await?;
            elements.push(RawElement { kind, body });
        }
        Ok(RawEntryDetail { entry, elements })
    }

    /// Fetch only the entry record, leaving its element references unresolved.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty id, or a request/parse error.
    pub async fn get_entry_record(&self, id: &str) -> Result<Entry, ClientError> {
        let id = require_id(id, "entry")?;
        let body: Value = self
            .get_json(&format!("entries/{}", urlencoding::encode(id)))
            .await?;
        let mut entry: Entry = serde_json::from_value(body)?;
        if entry.id.is_none() {
            entry.id = Some(id.to_string());
        }
        Ok(entry)
    }

    /// Create `entry` with the logged-in user as author. On success the
    /// server-assigned id and the author are written back into `entry`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the entry has no project, or
    /// [`ClientError::Rejected`] unless the server answers 201.
    pub async fn create_entry(&self, entry: &mut Entry) -> Result<String, ClientError> {
        self.bearer()?;
        let author_id = self.current_user_id().await?;
        let payload = entry.create_payload(&author_id)?;
        let id = self.create("entries", &payload, "ENTRY").await?;
        entry.id = Some(id.clone());
        entry.author_id = Some(author_id);
        Ok(id)
    }

    /// Write back an existing entry (unlocked).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the entry has no id, or
    /// [`ClientError::Rejected`] unless the server answers 200.
    pub async fn update_entry(&self, entry: &Entry) -> Result<(), ClientError> {
        let id = require_id(entry.require_id()?, "entry")?;
        let payload = entry.update_payload()?;
        self.update(&format!("entries/{}", urlencoding::encode(id)), &payload, "ENTRY")
            .await
    }
}

