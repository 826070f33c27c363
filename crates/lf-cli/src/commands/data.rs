use anyhow::Context;
use lf_core::DataElement;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DataCommands;
use crate::commands::shared::parse::parse_items;
use crate::context::AppContext;
use crate::output::output;

/// Handle `labfolder data <subcommand>`.
pub async fn handle(
    action: &DataCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DataCommands::Get { id } => {
            let data = ctx
                .client
                .get_data(id)
                .await
                .with_context(|| format!("failed to fetch data element {id}"))?;
            output(&data, flags.format)
        }
        DataCommands::Add(args) => {
            let mut data = DataElement::default();
            if let Some(description) = &args.description {
                data.description.clone_from(description);
            }
            for item in parse_items(&args.item, args.group.as_deref())? {
                data.push(item);
            }
            ctx.client
                .create_data(&args.entry_id, &mut data)
                .await
                .context("failed to add data element")?;
            output(&data, flags.format)
        }
        DataCommands::Update(args) => {
            let items = parse_items(&args.item, args.group.as_deref())?;
            let mut data = ctx
                .client
                .get_data(&args.id)
                .await
                .with_context(|| format!("failed to fetch data element {}", args.id))?;
            if data.id.is_none() {
                data.id = Some(args.id.clone());
            }
            if args.replace {
                data.data_elements.clear();
            }
            if let Some(description) = &args.description {
                data.description.clone_from(description);
            }
            for item in items {
                data.push(item);
            }
            ctx.client
                .update_data(&data)
                .await
                .with_context(|| format!("failed to update data element {}", args.id))?;
            output(&data, flags.format)
        }
    }
}
