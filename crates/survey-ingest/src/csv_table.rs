use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// In-memory view of the raw survey export.
#[derive(Debug, Clone)]
pub struct SurveyTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SurveyTable {
    /// Cell text at (row, column); None when the row is shorter than the
    /// column index (the export has ragged rows).
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|cells| cells.get(column)).map(String::as_str)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads the survey export into memory.
///
/// Headers and cells are trimmed and stripped of BOM artifacts. Rows may
/// be ragged; missing trailing cells read back as absent.
pub fn read_survey_table(path: &Path) -> Result<SurveyTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open survey export {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("read headers of {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("read record {} of {}", idx + 1, path.display()))?;
        rows.push(record.iter().map(normalize_cell).collect::<Vec<_>>());
    }

    debug!(
        columns = headers.len(),
        records = rows.len(),
        "read survey export"
    );
    Ok(SurveyTable { headers, rows })
}
