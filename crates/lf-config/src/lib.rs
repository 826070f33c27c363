//! # lf-config
//!
//! Layered configuration loading for the Labfolder client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LABFOLDER_*` prefix, `__` as separator)
//! 2. Project-level `.labfolder/config.toml`
//! 3. User-level `~/.config/labfolder/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LABFOLDER_SERVER__URL` -> `server.url`,
//! `LABFOLDER_ACCOUNT__EMAIL` -> `account.email`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lf_config::LabfolderConfig;
//!
//! let config = LabfolderConfig::load_with_dotenv().expect("config");
//! if config.server.is_configured() {
//!     println!("Labfolder server: {}", config.server.url);
//! }
//! ```

mod account;
mod error;
mod general;
mod server;

pub use account::AccountConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding the project-local config file.
pub const PROJECT_DIR: &str = ".labfolder";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabfolderConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LabfolderConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source fails to parse.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory (or a parent), then the
    /// layered configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source fails to parse.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LABFOLDER_").split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("labfolder").join("config.toml"))
    }
}
