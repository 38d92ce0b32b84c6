//! Validation verdicts and the named plausibility rules behind them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named rule failure attributed to a record during validation.
///
/// Declaration order is the order rules are checked in, which is also the
/// order violations appear in the elimination report. That order is part
/// of the audit contract and must stay stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    MissingCurrency,
    MissingExperience,
    InvalidExperience,
    MissingLanguage,
    MissingAllSalaries,
    UnrealisticSalaryLow,
    UnrealisticSalaryHigh,
    TotalLessThanBase,
    NonPositiveIncome,
}

impl Violation {
    pub const ALL: [Violation; 9] = [
        Violation::MissingCurrency,
        Violation::MissingExperience,
        Violation::InvalidExperience,
        Violation::MissingLanguage,
        Violation::MissingAllSalaries,
        Violation::UnrealisticSalaryLow,
        Violation::UnrealisticSalaryHigh,
        Violation::TotalLessThanBase,
        Violation::NonPositiveIncome,
    ];

    /// Stable identifier used in reports and breakdown counts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::MissingCurrency => "missing-currency",
            Violation::MissingExperience => "missing-experience",
            Violation::InvalidExperience => "invalid-experience",
            Violation::MissingLanguage => "missing-language",
            Violation::MissingAllSalaries => "missing-all-salaries",
            Violation::UnrealisticSalaryLow => "unrealistic-salary-low",
            Violation::UnrealisticSalaryHigh => "unrealistic-salary-high",
            Violation::TotalLessThanBase => "total-less-than-base",
            Violation::NonPositiveIncome => "non-positive-income",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of validating one record.
///
/// A record with zero violations is valid. The violation list preserves
/// rule-check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub violations: Vec<Violation>,
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}
