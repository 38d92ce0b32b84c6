//! The record-level cleaning transform.
//!
//! `process_record` is pure: resolve the financials, validate, then
//! either normalize the categoricals into a `CleanRecord` or attribute
//! the elimination. `process_records` maps it over the batch in input
//! order, so `valid.len() + eliminated.len()` always equals the input
//! length and `original_index` is the record's position in the input.

use tracing::{debug, info};

use survey_model::{
    CleanRecord, CleaningConfig, EliminationEntry, RawRecord, ResolvedFinancials,
    ValidationVerdict,
};
use survey_validate::{validate_record, violation_message};

use crate::normalization::{
    normalize_company_type, normalize_contract_type, normalize_education, normalize_english,
    normalize_work_mode,
};
use crate::resolve::resolve_financials;

/// Result of processing one batch.
#[derive(Debug, Clone, Default)]
pub struct ProcessedBatch {
    pub valid: Vec<CleanRecord>,
    pub eliminated: Vec<EliminationEntry>,
}

impl ProcessedBatch {
    pub fn input_len(&self) -> usize {
        self.valid.len() + self.eliminated.len()
    }
}

/// Cleans one record or attributes its elimination.
pub fn process_record(
    index: usize,
    record: &RawRecord,
    config: &CleaningConfig,
) -> Result<CleanRecord, EliminationEntry> {
    let resolved = resolve_financials(record);
    let verdict = validate_record(record, &resolved, config);
    if verdict.is_valid()
        && let (Some(income), Some(experience), Some(language)) = (
            resolved.income(),
            record.experience_years,
            record.programming_language.as_deref(),
        )
    {
        Ok(build_clean(record, &resolved, income, experience, language, config))
    } else {
        Err(build_elimination(index, record, &resolved, &verdict))
    }
}

fn build_clean(
    record: &RawRecord,
    resolved: &ResolvedFinancials,
    income: f64,
    experience: f64,
    language: &str,
    config: &CleaningConfig,
) -> CleanRecord {
    let experience = experience as i64;
    CleanRecord {
        currency: resolved.currency,
        programming_language: language.to_string(),
        company_type: normalize_company_type(record.company_type.as_deref()),
        work_mode: normalize_work_mode(record.work_mode.as_deref(), &config.workmode_merges),
        contract_type: normalize_contract_type(record.contract_type.as_deref()),
        min_experience: experience,
        max_experience: experience,
        english_level: normalize_english(record.english_level.as_deref(), config),
        education_level: normalize_education(record.education_level.as_deref(), config),
        income,
    }
}

fn build_elimination(
    index: usize,
    record: &RawRecord,
    resolved: &ResolvedFinancials,
    verdict: &ValidationVerdict,
) -> EliminationEntry {
    EliminationEntry {
        original_index: index,
        currency: record.raw_currency().map(str::to_string),
        experience_years: record.experience_years,
        programming_language: record.programming_language.clone(),
        salary_type: resolved.currency,
        base_salary_usd: record.usd_block.base_salary,
        total_salary_usd: record.usd_block.total_salary,
        base_salary_cop: record.cop_block.base_salary,
        total_salary_cop: record.cop_block.total_salary,
        effective_base_salary: resolved.base_salary,
        effective_total_salary: resolved.total_salary,
        violations: verdict.violations.clone(),
        issues: verdict
            .violations
            .iter()
            .map(|violation| violation_message(*violation, record, resolved))
            .collect(),
    }
}

/// Cleans a batch of records in input order.
pub fn process_records(records: &[RawRecord], config: &CleaningConfig) -> ProcessedBatch {
    let mut batch = ProcessedBatch::default();
    for (index, record) in records.iter().enumerate() {
        match process_record(index, record, config) {
            Ok(clean) => batch.valid.push(clean),
            Err(entry) => {
                debug!(
                    index,
                    issues = entry.issue_count(),
                    "record eliminated"
                );
                batch.eliminated.push(entry);
            }
        }
    }
    info!(
        input = records.len(),
        valid = batch.valid.len(),
        eliminated = batch.eliminated.len(),
        "processed batch"
    );
    batch
}
