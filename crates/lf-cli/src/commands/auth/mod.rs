mod login;
mod logout;
mod status;

use lf_config::LabfolderConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `labfolder auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &LabfolderConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags, config).await,
        AuthCommands::Status => status::handle(flags, config).await,
    }
}
