use std::time::Duration;

use anyhow::Context;
use lf_auth::{StoredSession, TokenStore};
use lf_client::LabfolderClient;
use lf_config::LabfolderConfig;

use crate::bootstrap;

/// Everything a resource command needs: config plus a logged-in client.
pub struct AppContext {
    pub config: LabfolderConfig,
    pub client: LabfolderClient,
}

impl AppContext {
    /// Build an authenticated client from the stored session.
    pub fn init(config: LabfolderConfig) -> anyhow::Result<Self> {
        let store = token_store(&config);
        let session = lf_auth::resolve_session(&store)?;
        let client = authenticated_client(&config, &session)?;
        Ok(Self { config, client })
    }

    /// Whether tables are read and written with a header row, unless a
    /// command turns it off.
    pub const fn header(&self, no_header: bool) -> bool {
        self.config.general.table_header && !no_header
    }
}

pub fn token_store(config: &LabfolderConfig) -> TokenStore {
    TokenStore::new(config.general.keyring_service.clone())
}

/// Unauthenticated client for the configured server.
pub fn client(config: &LabfolderConfig) -> anyhow::Result<LabfolderClient> {
    bootstrap::require_server(config)?;
    let client = LabfolderClient::new(&config.server.url)
        .context("failed to create Labfolder client")?
        .with_timeouts(
            Duration::from_secs(config.server.request_timeout_secs),
            Duration::from_secs(config.server.auth_timeout_secs),
        );
    Ok(client)
}

/// Client carrying the session's token. A session recorded for another
/// server is refused rather than sent there.
pub fn authenticated_client(
    config: &LabfolderConfig,
    session: &StoredSession,
) -> anyhow::Result<LabfolderClient> {
    let client = client(config)?;
    if !session.matches_server(client.server_url()) {
        anyhow::bail!(
            "stored session belongs to {}, not {}; run `labfolder auth login` again",
            session.server_url,
            client.server_url()
        );
    }
    Ok(client.with_token(session.token.clone()))
}
