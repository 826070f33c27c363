use lf_config::LabfolderConfig;
use lf_core::UserInfo;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context;
use crate::output::output;

#[derive(Default, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    server: Option<String>,
    user: Option<UserInfo>,
    logged_in_at: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

pub async fn handle(flags: &GlobalFlags, config: &LabfolderConfig) -> anyhow::Result<()> {
    let store = context::token_store(config);
    let Some((session, source)) = store.load_with_source() else {
        return output(
            &AuthStatusResponse {
                note: Some("no stored session".into()),
                ..AuthStatusResponse::default()
            },
            flags.format,
        );
    };

    let mut status = AuthStatusResponse {
        server: Some(session.server_url.clone()).filter(|s| !s.is_empty()),
        logged_in_at: session.logged_in_at.map(|at| at.to_rfc3339()),
        token_source: Some(source.to_string()),
        ..AuthStatusResponse::default()
    };

    let lookup = match context::authenticated_client(config, &session) {
        Ok(client) => client.current_user().await.map_err(anyhow::Error::from),
        Err(error) => Err(error),
    };
    match lookup {
        Ok(user) => {
            status.authenticated = true;
            status.user = Some(user);
        }
        Err(error) => status.note = Some(format!("{error:#}")),
    }

    output(&status, flags.format)
}
