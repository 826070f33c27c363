use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::entry::EntryGetArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &EntryGetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.raw {
        let detail = ctx
            .client
            .get_entry_raw(&args.id)
            .await
            .with_context(|| format!("failed to fetch entry {}", args.id))?;
        return output(&detail, flags.format);
    }

    let detail = ctx
        .client
        .get_entry(&args.id, ctx.header(args.no_header))
        .await
        .with_context(|| format!("failed to fetch entry {}", args.id))?;
    output(&detail, flags.format)
}
