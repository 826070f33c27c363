use anyhow::Context;
use lf_core::Entry;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::entry::EntryCreateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &EntryCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut entry = Entry::draft(&args.project, &args.title);
    entry.add_tags(&args.tag);
    ctx.client
        .create_entry(&mut entry)
        .await
        .context("failed to create entry")?;
    output(&entry, flags.format)
}
