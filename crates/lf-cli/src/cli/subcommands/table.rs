use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Table element commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TableCommands {
    /// Fetch a table, optionally exporting each sheet as CSV.
    Get(TableGetArgs),
    /// Add a table built from CSV files (one sheet per file).
    Add(TableAddArgs),
    /// Replace or add sheets of an existing table from CSV files.
    Update(TableUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TableGetArgs {
    pub id: String,
    /// Write each sheet to `<dir>/<sheet>.csv`.
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Do not treat the first row as column labels.
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TableAddArgs {
    pub entry_id: String,
    #[arg(long)]
    pub title: String,
    /// CSV file; the file stem names the sheet. Repeatable.
    #[arg(long, required = true)]
    pub csv: Vec<PathBuf>,
    /// CSV files have no header record.
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TableUpdateArgs {
    pub id: String,
    /// CSV file; the file stem names the sheet. Repeatable.
    #[arg(long, required = true)]
    pub csv: Vec<PathBuf>,
    /// CSV files have no header record.
    #[arg(long)]
    pub no_header: bool,
}
