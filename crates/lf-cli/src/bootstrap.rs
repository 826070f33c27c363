use anyhow::Context;
use lf_config::LabfolderConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then layered config, then apply `--server`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LabfolderConfig> {
    let mut config = LabfolderConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(server) = &flags.server {
        config.server.url.clone_from(server);
    }
    tracing::debug!(server = %config.server.url, "configuration loaded");
    Ok(config)
}

/// Validate the server section before any request is made.
pub fn require_server(config: &LabfolderConfig) -> anyhow::Result<()> {
    if !config.server.is_configured() {
        anyhow::bail!(
            "no Labfolder server configured; pass --server, set LABFOLDER_SERVER__URL, or add [server] url to {}",
            LabfolderConfig::global_config_path()
                .map_or_else(|| "the config file".to_string(), |p| p.display().to_string())
        );
    }
    config.server.validate()?;
    Ok(())
}
