use clap::Subcommand;

/// File element commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FileCommands {
    /// Show a file element's metadata.
    Get { id: String },
}
