//! Cleaned-dataset writer.

use std::path::{Path, PathBuf};

use anyhow::Result;

use survey_ingest::format_numeric;
use survey_model::CleanRecord;

use crate::common::{render_csv, write_output_file};

pub const CLEAN_DATASET_FILE: &str = "cleaned.csv";

/// Column order of the published dataset; consumers index by name but the
/// historical order is kept for diffability across survey waves.
const CLEAN_HEADERS: [&str; 10] = [
    "currency",
    "main-programming-language",
    "company-type",
    "workmode",
    "contract-type",
    "min-experience",
    "max-experience",
    "english-level",
    "max-title",
    "income-in-currency",
];

fn clean_row(record: &CleanRecord) -> Vec<String> {
    vec![
        record.currency.as_str().to_string(),
        record.programming_language.clone(),
        record.company_type.as_str().to_string(),
        record.work_mode.as_str().to_string(),
        record.contract_type.as_str().to_string(),
        record.min_experience.to_string(),
        record.max_experience.to_string(),
        record.english_level.to_string(),
        record.education_level.to_string(),
        format_numeric(record.income),
    ]
}

pub fn render_clean_dataset(records: &[CleanRecord]) -> Result<String> {
    render_csv(&CLEAN_HEADERS, records.iter().map(clean_row).collect())
}

pub fn write_clean_dataset(output_dir: &Path, records: &[CleanRecord]) -> Result<PathBuf> {
    let content = render_clean_dataset(records)?;
    write_output_file(output_dir, CLEAN_DATASET_FILE, &content)
}
