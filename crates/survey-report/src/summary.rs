//! Cleaning-summary payload.
//!
//! A schema-tagged JSON document written next to the two CSV outputs so
//! downstream tooling can read run counts without re-parsing them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use survey_model::{CleanRecord, Currency, EliminationEntry, Violation};

pub const SUMMARY_FILE: &str = "cleaning_summary.json";

const SUMMARY_SCHEMA: &str = "survey-cleaner.cleaning-summary";
const SUMMARY_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonCount {
    pub reason: Violation,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyDistribution {
    pub usd: usize,
    pub cop: usize,
}

#[derive(Debug, Serialize)]
pub struct CleaningSummary {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub input_records: usize,
    pub valid_records: usize,
    pub eliminated_records: usize,
    pub elimination_rate_percent: f64,
    pub breakdown: Vec<ReasonCount>,
    pub currency_distribution: CurrencyDistribution,
}

/// Per-reason elimination counts, largest first; ties break on rule order
/// so the listing is stable across runs.
pub fn reason_breakdown(entries: &[EliminationEntry]) -> Vec<ReasonCount> {
    let mut counts: BTreeMap<Violation, usize> = BTreeMap::new();
    for entry in entries {
        for violation in &entry.violations {
            *counts.entry(*violation).or_insert(0) += 1;
        }
    }
    let mut breakdown: Vec<ReasonCount> = counts
        .into_iter()
        .map(|(reason, count)| ReasonCount { reason, count })
        .collect();
    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then(a.reason.cmp(&b.reason)));
    breakdown
}

pub fn currency_distribution(records: &[CleanRecord]) -> CurrencyDistribution {
    let mut distribution = CurrencyDistribution::default();
    for record in records {
        match record.currency {
            Currency::Usd => distribution.usd += 1,
            Currency::Cop => distribution.cop += 1,
            Currency::Unknown => {}
        }
    }
    distribution
}

pub fn elimination_rate_percent(input: usize, eliminated: usize) -> f64 {
    if input == 0 {
        0.0
    } else {
        (eliminated as f64 / input as f64) * 100.0
    }
}

pub fn build_summary(valid: &[CleanRecord], eliminated: &[EliminationEntry]) -> CleaningSummary {
    let input = valid.len() + eliminated.len();
    CleaningSummary {
        schema: SUMMARY_SCHEMA,
        schema_version: SUMMARY_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        input_records: input,
        valid_records: valid.len(),
        eliminated_records: eliminated.len(),
        elimination_rate_percent: elimination_rate_percent(input, eliminated.len()),
        breakdown: reason_breakdown(eliminated),
        currency_distribution: currency_distribution(valid),
    }
}

pub fn write_summary_json(output_dir: &Path, summary: &CleaningSummary) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let path = output_dir.join(SUMMARY_FILE);
    let json = serde_json::to_string_pretty(summary).context("serialize cleaning summary")?;
    std::fs::write(&path, format!("{json}\n")).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
