use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Text element commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TextCommands {
    /// Fetch a text element.
    Get { id: String },
    /// Add a text element to an entry.
    Add(TextAddArgs),
    /// Replace the content of a text element.
    Update(TextUpdateArgs),
}

/// HTML content given inline or read from a file.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TextContent {
    /// Content (HTML) inline.
    #[arg(long)]
    pub content: Option<String>,
    /// Read the content from a file.
    #[arg(long)]
    pub from_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct TextAddArgs {
    pub entry_id: String,
    #[command(flatten)]
    pub body: TextContent,
}

#[derive(Clone, Debug, Args)]
pub struct TextUpdateArgs {
    pub id: String,
    #[command(flatten)]
    pub body: TextContent,
}
