use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed resource command to its handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Entry { action } => commands::entry::handle(&action, ctx, flags).await,
        Commands::Text { action } => commands::text::handle(&action, ctx, flags).await,
        Commands::Data { action } => commands::data::handle(&action, ctx, flags).await,
        Commands::Table { action } => commands::table::handle(&action, ctx, flags).await,
        Commands::Image { action } => commands::image::handle(&action, ctx, flags).await,
        Commands::File { action } => commands::file::handle(&action, ctx, flags).await,
        Commands::Auth { .. } | Commands::Schema(_) => {
            unreachable!("auth/schema are pre-dispatched in main")
        }
    }
}
