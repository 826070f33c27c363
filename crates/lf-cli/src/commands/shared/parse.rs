use lf_core::DataItem;

/// Parse `title=description` into a descriptive data item. Only the first
/// `=` separates; the description may contain more.
pub fn parse_descriptive_item(raw: &str) -> anyhow::Result<DataItem> {
    let Some((title, description)) = raw.split_once('=') else {
        anyhow::bail!("invalid item '{raw}': expected title=description");
    };
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("invalid item '{raw}': title is empty");
    }
    Ok(DataItem::descriptive(title, description.trim()))
}

/// Parse every `--item` value, optionally wrapped in one group.
pub fn parse_items(raw: &[String], group: Option<&str>) -> anyhow::Result<Vec<DataItem>> {
    let items = raw
        .iter()
        .map(|item| parse_descriptive_item(item))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(match group {
        Some(title) => vec![DataItem::group(title, items)],
        None => items,
    })
}
