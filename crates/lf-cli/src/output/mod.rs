use lf_core::{Frame, TableElement};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a table element. In table format every sheet is drawn as a grid
/// under its name instead of the generic key/value view.
pub fn output_table_element(element: &TableElement, format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(element, format);
    }
    println!("{}", render_sheets(element));
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_sheets(element: &TableElement) -> String {
    let mut blocks = vec![format!("{} (id {})", element.title, element.id.as_deref().unwrap_or("-"))];
    for (name, frame) in &element.sheets {
        blocks.push(format!("[{name}]\n{}", render_frame(frame)));
    }
    blocks.join("\n\n")
}

/// Draw a frame with its column labels as the header.
pub fn render_frame(frame: &Frame) -> String {
    if frame.is_empty() && frame.width() == 0 {
        return String::from("(empty sheet)");
    }
    let headers = frame.columns().iter().map(String::as_str).collect::<Vec<_>>();
    let rows = frame
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref().map_or_else(String::new, ToString::to_string))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_text_table(&headers, &rows, options())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_text_table(&headers, &rows, options()))
        }
        scalar => Ok(table::render_text_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options(),
        )),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_text_table(&["value"], &rows, options());
    }

    // Column order follows first appearance across items.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_text_table(&header_refs, &rows, options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
