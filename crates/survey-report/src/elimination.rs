//! Elimination-report writer.

use std::path::{Path, PathBuf};

use anyhow::Result;

use survey_model::EliminationEntry;

use crate::common::{opt_numeric_cell, opt_text_cell, render_csv, write_output_file};

pub const ELIMINATION_REPORT_FILE: &str = "eliminated.csv";

const ELIMINATION_HEADERS: [&str; 13] = [
    "original_index",
    "currency",
    "experience_years",
    "programming_language",
    "salary_type",
    "base_salary_usd",
    "total_salary_usd",
    "base_salary_cop",
    "total_salary_cop",
    "effective_base_salary",
    "effective_total_salary",
    "issues",
    "issue_count",
];

fn elimination_row(entry: &EliminationEntry) -> Vec<String> {
    vec![
        entry.original_index.to_string(),
        opt_text_cell(entry.currency.as_deref()),
        opt_numeric_cell(entry.experience_years),
        opt_text_cell(entry.programming_language.as_deref()),
        entry.salary_type.as_code().to_string(),
        opt_numeric_cell(entry.base_salary_usd),
        opt_numeric_cell(entry.total_salary_usd),
        opt_numeric_cell(entry.base_salary_cop),
        opt_numeric_cell(entry.total_salary_cop),
        opt_numeric_cell(entry.effective_base_salary),
        opt_numeric_cell(entry.effective_total_salary),
        entry.issues.join("; "),
        entry.issue_count().to_string(),
    ]
}

pub fn render_elimination_report(entries: &[EliminationEntry]) -> Result<String> {
    render_csv(
        &ELIMINATION_HEADERS,
        entries.iter().map(elimination_row).collect(),
    )
}

pub fn write_elimination_report(
    output_dir: &Path,
    entries: &[EliminationEntry],
) -> Result<PathBuf> {
    let content = render_elimination_report(entries)?;
    write_output_file(output_dir, ELIMINATION_REPORT_FILE, &content)
}
