//! Errors raised while reading labfolder settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `config.toml` or `LABFOLDER_*` variable does not fit the settings layout.
    #[error("cannot read labfolder settings from config.toml or LABFOLDER_* variables: {0}")]
    Load(#[from] figment::Error),

    /// A required setting has no value in any source.
    #[error("{key} is not set; add it to .labfolder/config.toml or set {env}")]
    Missing {
        key: &'static str,
        env: &'static str,
    },

    /// A setting holds a value the client cannot use.
    #[error("invalid {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
