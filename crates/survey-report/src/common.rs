//! Shared helpers for report writers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use survey_ingest::format_numeric;

/// Optional numeric cell: formatted value, or empty when absent.
pub fn opt_numeric_cell(value: Option<f64>) -> String {
    value.map(format_numeric).unwrap_or_default()
}

/// Optional text cell: the value, or empty when absent.
pub fn opt_text_cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Renders rows through the csv writer into a string.
pub fn render_csv(headers: &[&str], rows: Vec<Vec<String>>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers).context("write csv header")?;
    for row in rows {
        writer.write_record(&row).context("write csv row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("flush csv writer: {error}"))?;
    String::from_utf8(bytes).context("csv output is not valid utf-8")
}

/// Writes rendered content under the output directory, creating it first.
pub fn write_output_file(output_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let path = output_dir.join(file_name);
    std::fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
