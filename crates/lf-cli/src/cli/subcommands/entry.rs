use clap::{Args, Subcommand};

/// Entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntryCommands {
    /// Fetch an entry with all of its elements.
    Get(EntryGetArgs),
    /// Create an entry in a project.
    Create(EntryCreateArgs),
    /// Change the title or add tags.
    Update(EntryUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EntryGetArgs {
    pub id: String,
    /// Keep element bodies exactly as the server returned them.
    #[arg(long)]
    pub raw: bool,
    /// Do not treat the first table row as column labels.
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Clone, Debug, Args)]
pub struct EntryCreateArgs {
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub tag: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct EntryUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    /// Tag to add; existing tags are kept.
    #[arg(long)]
    pub tag: Vec<String>,
}
