//! Element reads and writes.
//!
//! Every create takes an explicit `entry_id`. When it is empty the element's
//! own `entry_id` is used instead. The new id and the target entry are
//! written back into the element on success.

use lf_core::{
    DataElement, ElementKind, FileElement, ImageElement, TableElement, TextElement,
    WellPlateElement,
};
use serde::de::DeserializeOwned;

use crate::{LabfolderClient, element_path, error::ClientError, require_id};

impl LabfolderClient {
    async fn get_element<T: DeserializeOwned>(
        &self,
        kind: ElementKind,
        id: &str,
    ) -> Result<T, ClientError> {
        let id = require_id(id, kind.as_str())?;
        let body = self.get_json(&element_path(kind, id)).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn create_element(
        &self,
        kind: ElementKind,
        payload: &serde_json::Value,
    ) -> Result<String, ClientError> {
        self.create(&format!("elements/{}", kind.endpoint()), payload, kind.as_str())
            .await
    }

    async fn update_element(
        &self,
        kind: ElementKind,
        id: Option<&str>,
        payload: &serde_json::Value,
    ) -> Result<(), ClientError> {
        let id = require_id(id.unwrap_or_default(), kind.as_str())?;
        self.update(&element_path(kind, id), payload, kind.as_str())
            .await
    }

    // ── Text ───────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns a validation error for an empty id, or a request/parse error.
    pub async fn get_text(&self, id: &str) -> Result<TextElement, ClientError> {
        self.get_element(ElementKind::Text, id).await
    }

    /// # Errors
    ///
    /// Returns a validation error when no entry id is available, or
    /// [`ClientError::Rejected`] unless the server answers 201.
    pub async fn create_text(
        &self,
        entry_id: &str,
        text: &mut TextElement,
    ) -> Result<String, ClientError> {
        let payload = text.create_payload(entry_id)?;
        let id = self.create_element(ElementKind::Text, &payload).await?;
        record_created(&mut text.id, &mut text.entry_id, entry_id, &id);
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns a validation error when the id or content is empty, or
    /// [`ClientError::Rejected`] unless the server answers 200.
    pub async fn update_text(&self, text: &TextElement) -> Result<(), ClientError> {
        let payload = text.update_payload()?;
        self.update_element(ElementKind::Text, text.id.as_deref(), &payload)
            .await
    }

    // ── Data ───────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns a validation error for an empty id, or a request/parse error.
    pub async fn get_data(&self, id: &str) -> Result<DataElement, ClientError> {
        self.get_element(ElementKind::Data, id).await
    }

    /// # Errors
    ///
    /// Returns a validation error when no entry id is available or there is
    /// nothing to write, or [`ClientError::Rejected`] unless the server
    /// answers 201.
    pub async fn create_data(
        &self,
        entry_id: &str,
        data: &mut DataElement,
    ) -> Result<String, ClientError> {
        let payload = data.create_payload(entry_id)?;
        let id = self.create_element(ElementKind::Data, &payload).await?;
        record_created(&mut data.id, &mut data.entry_id, entry_id, &id);
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns a validation error when the id is unset or there is nothing to
    /// write, or [`ClientError::Rejected`] unless the server answers 200.
    pub async fn update_data(&self, data: &DataElement) -> Result<(), ClientError> {
        let payload = data.update_payload()?;
        self.update_element(ElementKind::Data, data.id.as_deref(), &payload)
            .await
    }

    // ── Table ──────────────────────────────────────────────────────

    /// Fetch a table and convert each sheet to a frame. With `header`, the
    /// first non-empty row of a sheet becomes its column labels.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty id, a request error, or a
    /// table conversion error.
    pub async fn get_table(&self, id: &str, header: bool) -> Result<TableElement, ClientError> {
        let id = require_id(id, ElementKind::Table.as_str())?;
        let body = self.get_json(&element_path(ElementKind::Table, id)).await?;
        Ok(TableElement::from_wire(body, header)?)
    }

    /// # Errors
    ///
    /// Returns a validation error when no entry id is available or the table
    /// has no sheets, or [`ClientError::Rejected`] unless the server answers
    /// 201.
    pub async fn create_table(
        &self,
        entry_id: &str,
        table: &mut TableElement,
        header: bool,
    ) -> Result<String, ClientError> {
        let payload = table.create_payload(entry_id, header)?;
        let id = self.create_element(ElementKind::Table, &payload).await?;
        record_created(&mut table.id, &mut table.entry_id, entry_id, &id);
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns a validation error when the id is unset or the table has no
    /// sheets, or [`ClientError::Rejected`] unless the server answers 200.
    pub async fn update_table(&self, table: &TableElement, header: bool) -> Result<(), ClientError> {
        let payload = table.update_payload(header)?;
        self.update_element(ElementKind::Table, table.id.as_deref(), &payload)
            .await
    }

    // ── Read-only kinds ────────────────────────────────────────────

    /// Image metadata plus the original upload in `data`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty id, or a request/parse error
    /// from either call.
    pub async fn get_image(&self, id: &str) -> Result<ImageElement, ClientError> {
        let mut image: ImageElement = self.get_element(ElementKind::Image, id).await?;
        let bytes = self
            .get_bytes(&format!("{}/original-data", element_path(ElementKind::Image, id)))
            .await?;
        tracing::debug!(id, bytes = bytes.len(), "image data fetched");
        image.data = Some(bytes);
        Ok(image)
    }

    /// File metadata. File contents are not downloaded.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty id, or a request/parse error.
    pub async fn get_file(&self, id: &str) -> Result<FileElement, ClientError> {
        self.get_element(ElementKind::File, id).await
    }

    /// # Errors
    ///
    /// Returns a validation error for an empty id, or a request error.
    pub async fn get_well_plate(&self, id: &str) -> Result<WellPlateElement, ClientError> {
        let id = require_id(id, ElementKind::WellPlate.as_str())?;
        let body = self.get_json(&element_path(ElementKind::WellPlate, id)).await?;
        Ok(WellPlateElement::from_wire(body))
    }
}

/// Write the new id and, when one was given explicitly, the target entry
/// back into a freshly created element.
fn record_created(
    id: &mut Option<String>,
    entry_id: &mut Option<String>,
    explicit_entry: &str,
    new_id: &str,
) {
    *id = Some(new_id.to_string());
    if !explicit_entry.is_empty() {
        *entry_id = Some(explicit_entry.to_string());
    }
}

