//! Account credentials used for login.

use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct AccountConfig {
    /// Login email.
    #[serde(default)]
    pub email: String,

    /// Login password. Normally left unset and prompted for.
    #[serde(default)]
    pub password: String,
}

impl AccountConfig {
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("email", &self.email)
            .field("password", &if self.has_password() { "<set>" } else { "" })
            .finish()
    }
}
