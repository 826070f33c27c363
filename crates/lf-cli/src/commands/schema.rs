use lf_core::{DataItem, Element, Entry, TableElement};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::cli::subcommands::SchemaTarget;
use crate::output::output;

/// Handle `labfolder schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.target), flags.format)
}

fn schema(target: SchemaTarget) -> schemars::Schema {
    match target {
        SchemaTarget::Entry => schema_for!(Entry),
        SchemaTarget::Element => schema_for!(Element),
        SchemaTarget::DataItem => schema_for!(DataItem),
        SchemaTarget::Table => schema_for!(TableElement),
    }
}
