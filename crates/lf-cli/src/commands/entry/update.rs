use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::entry::EntryUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &EntryUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.title.is_none() && args.tag.is_empty() {
        anyhow::bail!("entry update: nothing to change (pass --title or --tag)");
    }

    let mut entry = ctx
        .client
        .get_entry_record(&args.id)
        .await
        .with_context(|| format!("failed to fetch entry {}", args.id))?;
    if let Some(title) = &args.title {
        entry.set_title(title);
    }
    entry.add_tags(&args.tag);

    ctx.client
        .update_entry(&entry)
        .await
        .with_context(|| format!("failed to update entry {}", args.id))?;
    output(&entry, flags.format)
}
