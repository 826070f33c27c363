mod create;
mod get;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntryCommands;
use crate::context::AppContext;

/// Handle `labfolder entry <subcommand>`.
pub async fn handle(
    action: &EntryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EntryCommands::Get(args) => get::run(args, ctx, flags).await,
        EntryCommands::Create(args) => create::run(args, ctx, flags).await,
        EntryCommands::Update(args) => update::run(args, ctx, flags).await,
    }
}
