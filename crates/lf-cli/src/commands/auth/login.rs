use anyhow::Context;
use lf_auth::StoredSession;
use lf_config::LabfolderConfig;
use lf_core::UserInfo;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::input::{read_line, read_password};
use crate::context;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    server: String,
    user: UserInfo,
    token_source: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &LabfolderConfig,
) -> anyhow::Result<()> {
    let mut client = context::client(config)?;
    let email = resolve_email(args, config)?;
    let password = resolve_password(args, config, || read_password("password: "))?;

    let user = client
        .login(&email, &password)
        .await
        .with_context(|| format!("login to {} failed", client.server_url()))?;
    let token = client
        .token()
        .context("login succeeded without a session token")?;

    let store = context::token_store(config);
    store.store(&StoredSession::new(client.server_url(), token).with_user(&user.id, &user.email))?;

    if !flags.quiet {
        eprintln!("Hello {}!", user.first_name);
    }

    output(
        &AuthLoginResponse {
            authenticated: true,
            server: client.server_url().to_string(),
            user,
            token_source: store.detect_token_source().map(|s| s.to_string()),
        },
        flags.format,
    )
}

fn resolve_email(args: &AuthLoginArgs, config: &LabfolderConfig) -> anyhow::Result<String> {
    if let Some(email) = args.email.as_deref().filter(|e| !e.trim().is_empty()) {
        return Ok(email.trim().to_string());
    }
    if config.account.has_email() {
        return Ok(config.account.email.clone());
    }
    if args.password_stdin {
        anyhow::bail!("--password-stdin needs --email or account.email in config");
    }
    let email = read_line("user email: ")?;
    if email.trim().is_empty() {
        anyhow::bail!("no email given");
    }
    Ok(email.trim().to_string())
}

/// Password from `--password-stdin`, then config, then a terminal prompt.
fn resolve_password(
    args: &AuthLoginArgs,
    config: &LabfolderConfig,
    prompt: impl FnOnce() -> anyhow::Result<Option<String>>,
) -> anyhow::Result<String> {
    if args.password_stdin {
        let password = read_line("")?;
        if password.is_empty() {
            anyhow::bail!("no password on stdin");
        }
        return Ok(password);
    }
    if config.account.has_password() {
        return Ok(config.account.password.clone());
    }
    match prompt()? {
        Some(password) if !password.is_empty() => Ok(password),
        Some(_) => anyhow::bail!("no password given"),
        None => anyhow::bail!(
            "no password available; pipe it with --password-stdin or set LABFOLDER_ACCOUNT__PASSWORD"
        ),
    }
}
