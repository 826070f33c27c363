use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Content type assumed when the server does not report one.
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/png";

fn default_content_type() -> String {
    DEFAULT_IMAGE_CONTENT_TYPE.to_string()
}

/// An image block. `data` holds the original upload once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImageElement {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub entry_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    #[schemars(with = "Option<String>")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default = "default_content_type")]
    pub original_file_content_type: String,
    #[serde(skip)]
    pub data: Option<Vec<u8>>,
}

impl Default for ImageElement {
    fn default() -> Self {
        Self {
            id: None,
            entry_id: None,
            title: String::new(),
            owner_id: None,
            creation_date: None,
            original_file_content_type: default_content_type(),
            data: None,
        }
    }
}

impl ImageElement {
    /// File extension matching the content type, for saving `data`.
    #[must_use]
    pub fn extension(&self) -> &str {
        match self.original_file_content_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/gif" => "gif",
            "image/tiff" => "tif",
            "image/svg+xml" => "svg",
            "image/webp" => "webp",
            "image/bmp" => "bmp",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_type_defaults_to_png() {
        let image: ImageElement =
            serde_json::from_str(r#"{"id": "8", "title": "Slice overview"}"#).unwrap();
        assert_eq!(image.original_file_content_type, "image/png");
        assert_eq!(image.extension(), "png");
        assert!(image.data.is_none());
    }

    #[test]
    fn extension_follows_content_type() {
        let image = ImageElement {
            original_file_content_type: "image/jpeg".into(),
            ..ImageElement::default()
        };
        assert_eq!(image.extension(), "jpg");
    }
}
