//! Typed element records and the dispatcher that builds them from detail
//! responses.

mod data;
mod file;
mod image;
mod text;
mod well_plate;

pub use data::{DataElement, DataItem};
pub use file::FileElement;
pub use image::{DEFAULT_IMAGE_CONTENT_TYPE, ImageElement};
pub use text::TextElement;
pub use well_plate::WellPlateElement;

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::enums::ElementKind;
use crate::errors::CoreError;
use crate::table::TableElement;

/// A parsed element of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "element_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    Text(TextElement),
    File(FileElement),
    Image(ImageElement),
    Table(TableElement),
    Data(DataElement),
    WellPlate(WellPlateElement),
}

impl Element {
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::File(_) => ElementKind::File,
            Self::Image(_) => ElementKind::Image,
            Self::Table(_) => ElementKind::Table,
            Self::Data(_) => ElementKind::Data,
            Self::WellPlate(_) => ElementKind::WellPlate,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Text(e) => e.id.as_deref(),
            Self::File(e) => e.id.as_deref(),
            Self::Image(e) => e.id.as_deref(),
            Self::Table(e) => e.id.as_deref(),
            Self::Data(e) => e.id.as_deref(),
            Self::WellPlate(e) => e.id.as_deref(),
        }
    }
}

/// An element detail body kept as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawElement {
    pub kind: ElementKind,
    pub body: Value,
}

/// Build a typed element from a detail response body.
///
/// `header` only affects tables: when set, the first non-empty row of each
/// sheet becomes the column labels.
///
/// # Errors
///
/// Returns [`CoreError::Parse`] if the body does not match the kind's shape,
/// or [`CoreError::Table`] if a sheet cannot be converted.
pub fn parse_element(kind: ElementKind, body: Value, header: bool) -> Result<Element, CoreError> {
    let element = match kind {
        ElementKind::Text => Element::Text(serde_json::from_value(body)?),
        ElementKind::File => Element::File(serde_json::from_value(body)?),
        ElementKind::Image => Element::Image(serde_json::from_value(body)?),
        ElementKind::Table => Element::Table(TableElement::from_wire(body, header)?),
        ElementKind::Data | ElementKind::DataElementGroup => {
            Element::Data(serde_json::from_value(body)?)
        }
        ElementKind::WellPlate => Element::WellPlate(WellPlateElement::from_wire(body)),
    };
    Ok(element)
}

/// Pick the entry a new element is written to: the explicit argument, else
/// the element's own `entry_id`.
pub(crate) fn target_entry<'a>(
    explicit: &'a str,
    own: Option<&'a str>,
) -> Result<&'a str, CoreError> {
    if !explicit.is_empty() {
        return Ok(explicit);
    }
    own.filter(|id| !id.is_empty())
        .ok_or_else(|| CoreError::validation("no entry id provided"))
}

/// The element id, or a validation error naming the kind.
pub(crate) fn require_id(id: Option<&str>, kind: ElementKind) -> Result<&str, CoreError> {
    id.filter(|id| !id.is_empty())
        .ok_or_else(|| CoreError::validation(format!("{kind} element id not set")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_each_kind_from_detail_bodies() {
        let text = parse_element(
            ElementKind::Text,
            json!({"id": "1", "entry_id": "9", "content": "<p>hi</p>"}),
            true,
        )
        .unwrap();
        assert_eq!(text.kind(), ElementKind::Text);
        assert_eq!(text.id(), Some("1"));

        let file = parse_element(
            ElementKind::File,
            json!({"id": 2, "file_name": "trace.abf", "file_size": 2048}),
            true,
        )
        .unwrap();
        assert!(matches!(file, Element::File(ref f) if f.file_size == Some(2048)));

        let group = parse_element(
            ElementKind::DataElementGroup,
            json!({"id": "3", "data_elements": []}),
            true,
        )
        .unwrap();
        assert_eq!(group.kind(), ElementKind::Data);

        let plate = parse_element(ElementKind::WellPlate, json!({"id": 4, "rows": 8}), true).unwrap();
        assert_eq!(plate.id(), Some("4"));
    }

    #[test]
    fn parse_rejects_mismatched_body() {
        let err = parse_element(ElementKind::Text, json!({"content": 5}), true).unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn element_serializes_with_type_tag() {
        let element = Element::Text(TextElement::new("note"));
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["element_type"], json!("TEXT"));
        assert_eq!(value["content"], json!("note"));
    }

    #[test]
    fn target_entry_prefers_explicit_then_own() {
        assert_eq!(target_entry("5", Some("6")).unwrap(), "5");
        assert_eq!(target_entry("", Some("6")).unwrap(), "6");
        assert!(target_entry("", Some("")).is_err());
        assert!(target_entry("", None).is_err());
    }
}
