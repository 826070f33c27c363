//! Element kinds as they appear in Labfolder's `type` fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Kind of content block inside an entry.
///
/// `Data` and `DataElementGroup` both live under the `elements/data`
/// endpoint; older entries report groups with their own type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementKind {
    Text,
    File,
    Image,
    Table,
    Data,
    DataElementGroup,
    WellPlate,
}

impl ElementKind {
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::File,
        Self::Image,
        Self::Table,
        Self::Data,
        Self::DataElementGroup,
        Self::WellPlate,
    ];

    /// Wire name used in entry payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::File => "FILE",
            Self::Image => "IMAGE",
            Self::Table => "TABLE",
            Self::Data => "DATA",
            Self::DataElementGroup => "DATA_ELEMENT_GROUP",
            Self::WellPlate => "WELL_PLATE",
        }
    }

    /// Path segment under `elements/` for this kind.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Image => "image",
            Self::Table => "table",
            Self::Data | Self::DataElementGroup => "data",
            Self::WellPlate => "well-plate",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownElementKind(s.to_string()))
    }
}
