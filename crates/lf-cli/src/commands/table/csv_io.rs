//! CSV import and export of sheet frames.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use lf_core::{CellValue, Frame};

/// Read a CSV document into a frame. With `header`, the first record names
/// the columns; otherwise columns are labelled by index. Short records are
/// padded with empty cells.
pub fn read_frame<R: Read>(reader: R, header: bool) -> anyhow::Result<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(header)
        .flexible(true)
        .from_reader(reader);

    let mut columns: Vec<String> = if header {
        reader
            .headers()
            .context("failed to read CSV header")?
            .iter()
            .map(|label| label.trim().to_string())
            .collect()
    } else {
        Vec::new()
    };

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("invalid CSV record {}", index + 1))?;
        rows.push(record.iter().map(CellValue::parse).collect::<Vec<_>>());
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(columns.len());
    while columns.len() < width {
        columns.push(columns.len().to_string());
    }
    for row in &mut rows {
        row.resize(width, None);
    }
    Ok(Frame::new(columns, rows)?)
}

/// Write a frame as CSV, with the column labels as the first record when
/// `header` is set.
pub fn write_frame<W: Write>(frame: &Frame, writer: W, header: bool) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if frame.width() > 0 {
        if header {
            writer.write_record(frame.columns())?;
        }
        for row in frame.rows() {
            writer.write_record(
                row.iter()
                    .map(|cell| cell.as_ref().map_or_else(String::new, ToString::to_string)),
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn read_frame_file(path: &Path, header: bool) -> anyhow::Result<Frame> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_frame(file, header).with_context(|| format!("failed to import {}", path.display()))
}

/// Sheet name for a CSV file: its stem.
pub fn sheet_name(path: &Path) -> anyhow::Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .with_context(|| format!("cannot name a sheet after {}", path.display()))
}

/// File name for exporting a sheet, with path separators and other unsafe
/// characters replaced.
pub fn csv_file_name(sheet: &str) -> String {
    let stem: String = sheet
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim().trim_start_matches('.');
    if stem.is_empty() {
        "sheet.csv".to_string()
    } else {
        format!("{stem}.csv")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn header_record_names_columns_and_cells_are_typed() {
        let frame = read_frame("cell,rin,ok\nc1,180.5,true\nc2,,\n".as_bytes(), true).unwrap();
        assert_eq!(frame.columns(), ["cell", "rin", "ok"]);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.cell(0, 1), Some(&CellValue::Number(180.5)));
        assert_eq!(frame.cell(0, 2), Some(&CellValue::Bool(true)));
        assert_eq!(frame.cell(1, 1), None);
    }

    #[test]
    fn without_header_columns_are_indexed_and_rows_padded() {
        let frame = read_frame("a,b\nc\n".as_bytes(), false).unwrap();
        assert_eq!(frame.columns(), ["0", "1"]);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.cell(1, 0), Some(&CellValue::Text("c".into())));
        assert_eq!(frame.cell(1, 1), None);
    }

    #[test]
    fn records_wider_than_header_get_index_labels() {
        let frame = read_frame("x\n1,2\n".as_bytes(), true).unwrap();
        assert_eq!(frame.columns(), ["x", "1"]);
    }

    #[test]
    fn write_then_read_keeps_labels_and_values() {
        let frame = read_frame("cell,rin\nc1,180.5\nc2,\n".as_bytes(), true).unwrap();
        let mut out = Vec::new();
        write_frame(&frame, &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cell,rin\nc1,180.5\nc2,\n");
    }

    #[test]
    fn empty_frame_writes_nothing() {
        let mut out = Vec::new();
        write_frame(&Frame::default(), &mut out, true).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(csv_file_name("Sheet1"), "Sheet1.csv");
        assert_eq!(csv_file_name("../etc/passwd"), "_etc_passwd.csv");
        assert_eq!(csv_file_name("///"), "___.csv");
        assert_eq!(csv_file_name(""), "sheet.csv");
    }

    #[test]
    fn sheet_name_is_file_stem() {
        assert_eq!(sheet_name(&PathBuf::from("data/rin.csv")).unwrap(), "rin");
        assert!(sheet_name(&PathBuf::from("/")).is_err());
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rin.csv");
        std::fs::write(&path, "cell\nc1\n").unwrap();
        let frame = read_frame_file(&path, true).unwrap();
        assert_eq!(frame.columns(), ["cell"]);
    }
}
