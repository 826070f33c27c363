use clap::{Args, Subcommand};

/// Data element commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DataCommands {
    /// Fetch a data element.
    Get { id: String },
    /// Add a data element to an entry.
    Add(DataAddArgs),
    /// Append items to (or replace the items of) a data element.
    Update(DataUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DataAddArgs {
    pub entry_id: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Descriptive item as `title=description`. Repeatable.
    #[arg(long)]
    pub item: Vec<String>,
    /// Wrap the items in a group with this title.
    #[arg(long)]
    pub group: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DataUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Descriptive item as `title=description`. Repeatable.
    #[arg(long)]
    pub item: Vec<String>,
    /// Wrap the items in a group with this title.
    #[arg(long)]
    pub group: Option<String>,
    /// Drop the existing items instead of appending.
    #[arg(long)]
    pub replace: bool,
}
