//! The plausibility rules, in their fixed check order.
//!
//! Each rule inspects one record plus its resolved financials and either
//! fires a violation or stays silent. The order of `CHECKS` is the order
//! violations appear in reports; reordering it changes audit output.

use survey_ingest::format_numeric;
use survey_model::{CleaningConfig, RawRecord, ResolvedFinancials, ValidationVerdict, Violation};

type Check = fn(&RawRecord, &ResolvedFinancials, &CleaningConfig) -> Option<Violation>;

const CHECKS: [Check; 9] = [
    missing_currency,
    missing_experience,
    invalid_experience,
    missing_language,
    missing_all_salaries,
    unrealistic_salary_low,
    unrealistic_salary_high,
    total_less_than_base,
    non_positive_income,
];

/// Runs every rule against the record, collecting all fired violations
/// in check order. A record is valid iff nothing fires.
pub fn validate_record(
    record: &RawRecord,
    resolved: &ResolvedFinancials,
    config: &CleaningConfig,
) -> ValidationVerdict {
    let mut verdict = ValidationVerdict::default();
    for check in CHECKS {
        if let Some(violation) = check(record, resolved, config) {
            verdict.push(violation);
        }
    }
    verdict
}

fn missing_currency(
    _record: &RawRecord,
    resolved: &ResolvedFinancials,
    _config: &CleaningConfig,
) -> Option<Violation> {
    if resolved.currency.is_known() {
        None
    } else {
        Some(Violation::MissingCurrency)
    }
}

fn missing_experience(
    record: &RawRecord,
    _resolved: &ResolvedFinancials,
    _config: &CleaningConfig,
) -> Option<Violation> {
    if record.experience_years.is_none() {
        Some(Violation::MissingExperience)
    } else {
        None
    }
}

fn invalid_experience(
    record: &RawRecord,
    _resolved: &ResolvedFinancials,
    config: &CleaningConfig,
) -> Option<Violation> {
    let years = record.experience_years?;
    if config.experience_bounds.contains(years) {
        None
    } else {
        Some(Violation::InvalidExperience)
    }
}

fn missing_language(
    record: &RawRecord,
    _resolved: &ResolvedFinancials,
    _config: &CleaningConfig,
) -> Option<Violation> {
    if record.has_language() {
        None
    } else {
        Some(Violation::MissingLanguage)
    }
}

fn missing_all_salaries(
    _record: &RawRecord,
    resolved: &ResolvedFinancials,
    _config: &CleaningConfig,
) -> Option<Violation> {
    if resolved.base_salary.is_none() && resolved.total_salary.is_none() {
        Some(Violation::MissingAllSalaries)
    } else {
        None
    }
}

fn unrealistic_salary_low(
    _record: &RawRecord,
    resolved: &ResolvedFinancials,
    config: &CleaningConfig,
) -> Option<Violation> {
    let total = resolved.total_salary?;
    if total <= 0.0 {
        return None;
    }
    let floor = config.salary_bounds.floor(resolved.currency)?;
    if total < floor {
        Some(Violation::UnrealisticSalaryLow)
    } else {
        None
    }
}

fn unrealistic_salary_high(
    _record: &RawRecord,
    resolved: &ResolvedFinancials,
    config: &CleaningConfig,
) -> Option<Violation> {
    let total = resolved.total_salary?;
    let ceiling = config.salary_bounds.ceiling(resolved.currency)?;
    if total > ceiling {
        Some(Violation::UnrealisticSalaryHigh)
    } else {
        None
    }
}

fn total_less_than_base(
    _record: &RawRecord,
    resolved: &ResolvedFinancials,
    _config: &CleaningConfig,
) -> Option<Violation> {
    let base = resolved.base_salary?;
    let total = resolved.total_salary?;
    if total < base {
        Some(Violation::TotalLessThanBase)
    } else {
        None
    }
}

// Catches a zero or negative total, which fires none of the salary
// rules above.
fn non_positive_income(
    _record: &RawRecord,
    resolved: &ResolvedFinancials,
    _config: &CleaningConfig,
) -> Option<Violation> {
    let income = resolved.income()?;
    if income <= 0.0 {
        Some(Violation::NonPositiveIncome)
    } else {
        None
    }
}

fn opt_numeric(value: Option<f64>) -> String {
    value.map_or_else(|| "?".to_string(), format_numeric)
}

/// Human-readable reason for one fired violation, echoing the offending
/// values for audit review.
pub fn violation_message(
    violation: Violation,
    record: &RawRecord,
    resolved: &ResolvedFinancials,
) -> String {
    match violation {
        Violation::MissingCurrency => "missing currency".to_string(),
        Violation::MissingExperience => "missing experience".to_string(),
        Violation::InvalidExperience => {
            format!("invalid experience: {}", opt_numeric(record.experience_years))
        }
        Violation::MissingLanguage => "missing programming language".to_string(),
        Violation::MissingAllSalaries => "missing all salaries".to_string(),
        Violation::UnrealisticSalaryLow => format!(
            "unrealistic low {} salary: {}",
            resolved.currency.as_code(),
            opt_numeric(resolved.total_salary)
        ),
        Violation::UnrealisticSalaryHigh => format!(
            "unrealistic high {} salary: {}",
            resolved.currency.as_code(),
            opt_numeric(resolved.total_salary)
        ),
        Violation::TotalLessThanBase => format!(
            "total ({}) less than base ({})",
            opt_numeric(resolved.total_salary),
            opt_numeric(resolved.base_salary)
        ),
        Violation::NonPositiveIncome => {
            format!("non-positive income: {}", opt_numeric(resolved.income()))
        }
    }
}
