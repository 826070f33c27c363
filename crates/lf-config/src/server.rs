//! Labfolder server connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_request_timeout() -> u64 {
    10
}

const fn default_auth_timeout() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the Labfolder instance, e.g. `https://labfolder.example.org`.
    #[serde(default)]
    pub url: String,

    /// Timeout for entry and element requests, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Timeout for login, logout and profile requests, in seconds.
    #[serde(default = "default_auth_timeout")]
    pub auth_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            request_timeout_secs: default_request_timeout(),
            auth_timeout_secs: default_auth_timeout(),
        }
    }
}

impl ServerConfig {
    /// Check if a server URL is set.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    /// Check the URL scheme and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] without a URL, or
    /// [`ConfigError::InvalidValue`] for a non-http(s) URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::Missing {
                key: "server.url",
                env: "LABFOLDER_SERVER__URL",
            });
        }
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                key: "server.url",
                reason: format!("'{}' must start with http:// or https://", self.url),
            });
        }
        for (key, value) in [
            ("server.request_timeout_secs", self.request_timeout_secs),
            ("server.auth_timeout_secs", self.auth_timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }
}
