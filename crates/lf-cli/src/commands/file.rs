use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FileCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `labfolder file <subcommand>`.
pub async fn handle(
    action: &FileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FileCommands::Get { id } => {
            let file = ctx
                .client
                .get_file(id)
                .await
                .with_context(|| format!("failed to fetch file element {id}"))?;
            output(&file, flags.format)
        }
    }
}
