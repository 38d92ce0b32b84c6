//! Record types flowing through the cleaning pipeline.
//!
//! A `RawRecord` is one survey response as extracted from the export.
//! The original form duplicates its financial questions into two blocks
//! (one per branch of a currency question), and both blocks materialize
//! as columns for every respondent; `ResolvedFinancials` is the single
//! effective view chosen from them. Every input record ends up as exactly
//! one `CleanRecord` or one `EliminationEntry`.

use serde::{Deserialize, Serialize};

use crate::enums::{CompanyType, ContractType, Currency, WorkMode};

/// One group of currency + base-salary + total-salary answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialBlock {
    /// Raw currency answer, verbatim. `None` when the branch was not taken.
    pub currency: Option<String>,
    pub base_salary: Option<f64>,
    pub total_salary: Option<f64>,
}

impl FinancialBlock {
    /// True when the currency question of this block was answered.
    pub fn has_currency(&self) -> bool {
        self.currency
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}

/// One survey response, immutable once extracted.
///
/// Numeric fields that failed to parse in the export are already `None`
/// here; absence is handled by validation, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub experience_years: Option<f64>,
    pub programming_language: Option<String>,
    pub education_level: Option<String>,
    pub english_level: Option<String>,
    pub company_type: Option<String>,
    pub work_mode: Option<String>,
    pub contract_type: Option<String>,
    /// First financial block (the dollar branch of the form).
    pub usd_block: FinancialBlock,
    /// Second financial block (the peso branch of the form).
    pub cop_block: FinancialBlock,
}

impl RawRecord {
    pub fn has_language(&self) -> bool {
        self.programming_language
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }

    /// Raw currency answer of whichever block was answered, for audit echo.
    pub fn raw_currency(&self) -> Option<&str> {
        if self.usd_block.has_currency() {
            self.usd_block.currency.as_deref()
        } else if self.cop_block.has_currency() {
            self.cop_block.currency.as_deref()
        } else {
            None
        }
    }
}

/// Effective currency and salary chosen from the two redundant blocks.
///
/// Computed fresh per record; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFinancials {
    pub currency: Currency,
    pub base_salary: Option<f64>,
    pub total_salary: Option<f64>,
}

impl ResolvedFinancials {
    pub fn unknown() -> Self {
        Self {
            currency: Currency::Unknown,
            base_salary: None,
            total_salary: None,
        }
    }

    /// Effective income: total remuneration, falling back to the base
    /// salary when the total was not answered.
    pub fn income(&self) -> Option<f64> {
        self.total_salary.or(self.base_salary)
    }
}

/// One cleaned, analysis-ready record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub currency: Currency,
    pub programming_language: String,
    pub company_type: CompanyType,
    pub work_mode: WorkMode,
    pub contract_type: ContractType,
    /// The survey collects a single number of years; the published dataset
    /// keeps the historical range columns with min == max.
    pub min_experience: i64,
    pub max_experience: i64,
    pub english_level: u8,
    pub education_level: u8,
    /// Income in the resolved currency. Always > 0 for a record that
    /// passed validation.
    pub income: f64,
}

/// One eliminated record, with enough raw context for audit review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliminationEntry {
    /// Position of the record in the input sequence.
    pub original_index: usize,
    pub currency: Option<String>,
    pub experience_years: Option<f64>,
    pub programming_language: Option<String>,
    /// Which block the record resolved to (USD, COP, or Unknown).
    pub salary_type: Currency,
    pub base_salary_usd: Option<f64>,
    pub total_salary_usd: Option<f64>,
    pub base_salary_cop: Option<f64>,
    pub total_salary_cop: Option<f64>,
    pub effective_base_salary: Option<f64>,
    pub effective_total_salary: Option<f64>,
    /// Violated rule identifiers, in check order.
    pub violations: Vec<crate::verdict::Violation>,
    /// Human-readable reasons, in check order.
    pub issues: Vec<String>,
}

impl EliminationEntry {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_currency_presence_ignores_blank() {
        let mut block = FinancialBlock::default();
        assert!(!block.has_currency());
        block.currency = Some("   ".to_string());
        assert!(!block.has_currency());
        block.currency = Some("Pesos colombianos (COP)".to_string());
        assert!(block.has_currency());
    }

    #[test]
    fn income_prefers_total_over_base() {
        let resolved = ResolvedFinancials {
            currency: Currency::Usd,
            base_salary: Some(80_000.0),
            total_salary: Some(95_000.0),
        };
        assert_eq!(resolved.income(), Some(95_000.0));

        let base_only = ResolvedFinancials {
            total_salary: None,
            ..resolved
        };
        assert_eq!(base_only.income(), Some(80_000.0));
        assert_eq!(ResolvedFinancials::unknown().income(), None);
    }

    #[test]
    fn raw_currency_prefers_first_block() {
        let record = RawRecord {
            usd_block: FinancialBlock {
                currency: Some("Dólares".to_string()),
                ..FinancialBlock::default()
            },
            cop_block: FinancialBlock {
                currency: Some("Pesos".to_string()),
                ..FinancialBlock::default()
            },
            ..RawRecord::default()
        };
        assert_eq!(record.raw_currency(), Some("Dólares"));
    }
}
