use std::path::{Path, PathBuf};

use anyhow::Context;
use lf_core::ImageElement;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ImageCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ImageSavedResponse {
    image: ImageElement,
    path: PathBuf,
    bytes: usize,
}

/// Handle `labfolder image <subcommand>`.
pub async fn handle(
    action: &ImageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ImageCommands::Get(args) => {
            let mut image = ctx
                .client
                .get_image(&args.id)
                .await
                .with_context(|| format!("failed to fetch image {}", args.id))?;
            let data = image.data.take().unwrap_or_default();
            let path = target_path(&args.output, &args.id, image.extension());
            std::fs::write(&path, &data)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output(
                &ImageSavedResponse {
                    image,
                    path,
                    bytes: data.len(),
                },
                flags.format,
            )
        }
    }
}

/// `output` itself, or `output/image-<id>.<ext>` when it is a directory.
fn target_path(output: &Path, id: &str, extension: &str) -> PathBuf {
    if output.is_dir() {
        output.join(format!("image-{id}.{extension}"))
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::target_path;

    #[test]
    fn directory_targets_get_a_generated_name() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(
            target_path(dir.path(), "8", "jpg"),
            dir.path().join("image-8.jpg")
        );
        let file = dir.path().join("slice.png");
        assert_eq!(target_path(&file, "8", "jpg"), file);
    }
}
