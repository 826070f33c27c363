use lf_auth::{TOKEN_ENV_NOTE, TokenSource};
use lf_config::LabfolderConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    server_logout: bool,
    note: Option<String>,
}

pub async fn handle(flags: &GlobalFlags, config: &LabfolderConfig) -> anyhow::Result<()> {
    let store = context::token_store(config);
    let mut server_logout = false;
    let mut note = None;

    if let Some((session, source)) = store.load_with_source() {
        match context::authenticated_client(config, &session) {
            Ok(mut client) => match client.logout().await {
                Ok(()) => server_logout = true,
                Err(error) => {
                    tracing::warn!(%error, "server logout failed; clearing local credentials anyway");
                }
            },
            Err(error) => tracing::warn!(%error, "skipping server logout"),
        }
        if source == TokenSource::Env {
            note = Some(TOKEN_ENV_NOTE.to_string());
        }
    }

    store.delete()?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            server_logout,
            note,
        },
        flags.format,
    )
}
