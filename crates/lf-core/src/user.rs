//! The logged-in Labfolder user.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Profile of the account a session token belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Uppercase letters of the first name followed by those of the last name.
    pub initials: String,
    pub email: String,
    /// Time zone id from the user's settings (e.g. `Europe/Berlin`).
    pub location: String,
}

impl UserInfo {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let initials = initials(&first_name, &last_name);
        Self {
            id: id.into(),
            first_name,
            last_name,
            initials,
            email: email.into(),
            location: location.into(),
        }
    }
}

/// Keep only ASCII uppercase letters of each name.
#[must_use]
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .chain(last_name.chars())
        .filter(char::is_ascii_uppercase)
        .collect()
}
