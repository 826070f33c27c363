//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "labfolder-cli".to_string()
}

const fn default_table_header() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// OS keyring service name the session token is stored under.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Treat the first row of each sheet as column labels.
    #[serde(default = "default_table_header")]
    pub table_header: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            table_header: default_table_header(),
        }
    }
}
