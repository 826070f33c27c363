use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Image element commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ImageCommands {
    /// Download an image's original upload.
    Get(ImageGetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ImageGetArgs {
    pub id: String,
    /// Target file, or a directory to save `image-<id>.<ext>` into.
    #[arg(short, long)]
    pub output: PathBuf,
}
