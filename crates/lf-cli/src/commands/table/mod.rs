pub mod csv_io;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use lf_core::TableElement;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TableCommands;
use crate::cli::subcommands::table::{TableAddArgs, TableGetArgs, TableUpdateArgs};
use crate::context::AppContext;
use crate::output::{output, output_table_element};

#[derive(Serialize)]
struct TableExportResponse {
    id: Option<String>,
    title: String,
    files: Vec<PathBuf>,
}

/// Handle `labfolder table <subcommand>`.
pub async fn handle(
    action: &TableCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TableCommands::Get(args) => get(args, ctx, flags).await,
        TableCommands::Add(args) => add(args, ctx, flags).await,
        TableCommands::Update(args) => update(args, ctx, flags).await,
    }
}

async fn get(args: &TableGetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let header = ctx.header(args.no_header);
    let table = ctx
        .client
        .get_table(&args.id, header)
        .await
        .with_context(|| format!("failed to fetch table {}", args.id))?;

    let Some(dir) = &args.csv else {
        return output_table_element(&table, flags.format);
    };
    let files = export_sheets(&table, dir, header)?;
    output(
        &TableExportResponse {
            id: table.id,
            title: table.title,
            files,
        },
        flags.format,
    )
}

async fn add(args: &TableAddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let header = ctx.header(args.no_header);
    let mut table = TableElement::new(&args.title);
    import_sheets(&mut table, &args.csv, header)?;
    ctx.client
        .create_table(&args.entry_id, &mut table, header)
        .await
        .context("failed to add table")?;
    output_table_element(&table, flags.format)
}

async fn update(args: &TableUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let header = ctx.header(args.no_header);
    let mut table = ctx
        .client
        .get_table(&args.id, header)
        .await
        .with_context(|| format!("failed to fetch table {}", args.id))?;
    if table.id.is_none() {
        table.id = Some(args.id.clone());
    }
    import_sheets(&mut table, &args.csv, header)?;
    ctx.client
        .update_table(&table, header)
        .await
        .with_context(|| format!("failed to update table {}", args.id))?;
    output_table_element(&table, flags.format)
}

/// Add one sheet per CSV file, named after the file stem. Two files with the
/// same stem are refused.
fn import_sheets(table: &mut TableElement, paths: &[PathBuf], header: bool) -> anyhow::Result<()> {
    let mut seen = BTreeSet::new();
    for path in paths {
        let name = csv_io::sheet_name(path)?;
        if !seen.insert(name.clone()) {
            anyhow::bail!("two CSV files map to sheet '{name}'");
        }
        let frame = csv_io::read_frame_file(path, header)?;
        tracing::debug!(sheet = %name, rows = frame.height(), columns = frame.width(), "imported sheet");
        table.add_sheet(name, frame);
    }
    Ok(())
}

/// Write one CSV file per sheet. Sheets whose names map to the same file are
/// refused before anything is written.
fn export_sheets(table: &TableElement, dir: &Path, header: bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut targets: BTreeMap<String, &str> = BTreeMap::new();
    for name in table.sheets.keys() {
        if let Some(other) = targets.insert(csv_io::csv_file_name(name), name) {
            anyhow::bail!(
                "sheets '{other}' and '{name}' would both be written to {}",
                csv_io::csv_file_name(name)
            );
        }
    }

    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let mut files = Vec::with_capacity(table.sheets.len());
    for (name, frame) in &table.sheets {
        let path = dir.join(csv_io::csv_file_name(name));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        csv_io::write_frame(frame, file, header)
            .with_context(|| format!("failed to write sheet '{name}'"))?;
        files.push(path);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use lf_core::{CellValue, Frame};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn import_names_sheets_by_stem_and_rejects_duplicates() {
        let dir = tempfile::TempDir::new().unwrap();
        let rin = dir.path().join("rin.csv");
        let cm = dir.path().join("cm.csv");
        std::fs::write(&rin, "cell,rin\nc1,180.5\n").unwrap();
        std::fs::write(&cm, "cell,cm\nc1,12\n").unwrap();

        let mut table = TableElement::new("Passive properties");
        import_sheets(&mut table, &[rin.clone(), cm], true).unwrap();
        assert_eq!(table.sheets.keys().collect::<Vec<_>>(), ["cm", "rin"]);

        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        let dup = nested.join("rin.csv");
        std::fs::write(&dup, "x\n1\n").unwrap();
        assert!(import_sheets(&mut TableElement::new("t"), &[rin, dup], true).is_err());
    }

    #[test]
    fn export_writes_one_file_per_sheet() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut table = TableElement::new("Rin");
        table.add_sheet(
            "Sheet/1",
            Frame::new(
                vec!["cell".into()],
                vec![vec![Some(CellValue::Text("c1".into()))]],
            )
            .unwrap(),
        );
        let files = export_sheets(&table, &dir.path().join("out"), true).unwrap();
        assert_eq!(files, [dir.path().join("out").join("Sheet_1.csv")]);
        assert_eq!(std::fs::read_to_string(&files[0]).unwrap(), "cell\nc1\n");
    }

    #[test]
    fn export_refuses_sheets_sharing_a_file_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("out");
        let mut table = TableElement::new("Rin");
        for name in ["a/b", "a:b"] {
            table.add_sheet(
                name,
                Frame::new(vec!["x".into()], vec![vec![Some(CellValue::Integer(1))]]).unwrap(),
            );
        }
        let err = export_sheets(&table, &out, true).unwrap_err();
        assert!(err.to_string().contains("a_b.csv"), "{err}");
        assert!(!out.exists());
    }
}
