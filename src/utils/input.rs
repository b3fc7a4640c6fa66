use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Read a name list file, one candidate per line.
///
/// Trailing whitespace (including `\r`) is stripped and blank lines are
/// dropped. Everything else is handed to the scanner untouched, so invalid
/// lines still show up in the report with a reason.
pub fn read_name_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read name list file: {}", path.display()))?;

    let lines = parse_name_list(&content);
    debug!("Read {} entries from {}", lines.len(), path.display());
    Ok(lines)
}

pub fn parse_name_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
