use anyhow::Context;
use lf_core::TextElement;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TextCommands;
use crate::cli::subcommands::text::TextContent;
use crate::context::AppContext;
use crate::output::output;

/// Handle `labfolder text <subcommand>`.
pub async fn handle(
    action: &TextCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TextCommands::Get { id } => {
            let text = ctx
                .client
                .get_text(id)
                .await
                .with_context(|| format!("failed to fetch text element {id}"))?;
            output(&text, flags.format)
        }
        TextCommands::Add(args) => {
            let mut text = TextElement::new(read_content(&args.body)?);
            ctx.client
                .create_text(&args.entry_id, &mut text)
                .await
                .context("failed to add text element")?;
            output(&text, flags.format)
        }
        TextCommands::Update(args) => {
            let mut text = TextElement::new(read_content(&args.body)?);
            text.id = Some(args.id.clone());
            ctx.client
                .update_text(&text)
                .await
                .with_context(|| format!("failed to update text element {}", args.id))?;
            output(&text, flags.format)
        }
    }
}

fn read_content(body: &TextContent) -> anyhow::Result<String> {
    if let Some(path) = &body.from_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    Ok(body.content.clone().unwrap_or_default())
}
