use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, DataCommands, EntryCommands, FileCommands, ImageCommands, SchemaTarget,
    TableCommands, TextCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, show the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Notebook entries.
    Entry {
        #[command(subcommand)]
        action: EntryCommands,
    },
    /// Text elements.
    Text {
        #[command(subcommand)]
        action: TextCommands,
    },
    /// Data elements.
    Data {
        #[command(subcommand)]
        action: DataCommands,
    },
    /// Table elements.
    Table {
        #[command(subcommand)]
        action: TableCommands,
    },
    /// Image elements.
    Image {
        #[command(subcommand)]
        action: ImageCommands,
    },
    /// File elements.
    File {
        #[command(subcommand)]
        action: FileCommands,
    },
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type.
    #[arg(value_enum)]
    pub target: SchemaTarget,
}
