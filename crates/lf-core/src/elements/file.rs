use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata of an uploaded file attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileElement {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub entry_id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}
