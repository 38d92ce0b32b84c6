//! Cleaning configuration.
//!
//! Every threshold and vocabulary the pipeline applies lives here, in one
//! reviewable structure passed explicitly into the transform and
//! validation layers. The defaults are the canonical constants of the
//! survey's published dataset; a JSON file with the same shape can
//! override any subset of them.

use serde::{Deserialize, Serialize};

use crate::enums::{Currency, WorkMode};

/// Currency-specific plausibility bounds for the total remuneration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBounds {
    pub usd_floor: f64,
    pub usd_ceiling: f64,
    pub cop_floor: f64,
    pub cop_ceiling: f64,
}

impl Default for SalaryBounds {
    fn default() -> Self {
        Self {
            usd_floor: 5_000.0,
            usd_ceiling: 500_000.0,
            cop_floor: 10_000_000.0,
            cop_ceiling: 1_000_000_000.0,
        }
    }
}

impl SalaryBounds {
    /// Floor for the given currency; `None` when no bound is defined.
    pub fn floor(&self, currency: Currency) -> Option<f64> {
        match currency {
            Currency::Usd => Some(self.usd_floor),
            Currency::Cop => Some(self.cop_floor),
            Currency::Unknown => None,
        }
    }

    pub fn ceiling(&self, currency: Currency) -> Option<f64> {
        match currency {
            Currency::Usd => Some(self.usd_ceiling),
            Currency::Cop => Some(self.cop_ceiling),
            Currency::Unknown => None,
        }
    }
}

/// Inclusive bounds on reported years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ExperienceBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 50.0 }
    }
}

impl ExperienceBounds {
    pub fn contains(&self, years: f64) -> bool {
        years >= self.min && years <= self.max
    }
}

/// One token of an ordered answer vocabulary.
///
/// Matching is case-sensitive substring containment, scanning entries in
/// order; the first token found in the answer wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub token: String,
    pub code: u8,
}

impl VocabularyEntry {
    pub fn new(token: impl Into<String>, code: u8) -> Self {
        Self {
            token: token.into(),
            code,
        }
    }
}

/// One entry of the work-mode merge table: answers containing `keyword`
/// collapse into `mode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkModeMerge {
    pub keyword: String,
    pub mode: WorkMode,
}

impl WorkModeMerge {
    pub fn new(keyword: impl Into<String>, mode: WorkMode) -> Self {
        Self {
            keyword: keyword.into(),
            mode,
        }
    }
}

/// Complete configuration of the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    pub salary_bounds: SalaryBounds,
    pub experience_bounds: ExperienceBounds,
    /// Education scale. The default is the published 1-5 scale; swapping
    /// this vocabulary switches to the wider 0-7 scale some survey waves
    /// used.
    pub education_vocabulary: Vec<VocabularyEntry>,
    /// English proficiency tiers keyed on the short level codes the
    /// answers embed (A1..C2).
    pub english_vocabulary: Vec<VocabularyEntry>,
    /// Code for an absent English answer.
    pub english_missing_code: u8,
    /// Code for a present answer matching no known tier. Deliberately
    /// different from `english_missing_code`: the asymmetry is part of
    /// the historical dataset semantics.
    pub english_unmatched_code: u8,
    pub workmode_merges: Vec<WorkModeMerge>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            salary_bounds: SalaryBounds::default(),
            experience_bounds: ExperienceBounds::default(),
            education_vocabulary: vec![
                VocabularyEntry::new("Bachiller", 1),
                VocabularyEntry::new("Técnico", 2),
                VocabularyEntry::new("Tecnólogo", 3),
                VocabularyEntry::new("Pregrado", 4),
                VocabularyEntry::new("Posgrado", 5),
            ],
            english_vocabulary: vec![
                VocabularyEntry::new("A1", 0),
                VocabularyEntry::new("A2", 1),
                VocabularyEntry::new("B1", 2),
                VocabularyEntry::new("B2", 3),
                VocabularyEntry::new("C1", 4),
                VocabularyEntry::new("C2", 4),
            ],
            english_missing_code: 0,
            english_unmatched_code: 1,
            workmode_merges: vec![
                WorkModeMerge::new("Presencial", WorkMode::OnSite),
                WorkModeMerge::new("Teletrabajo", WorkMode::Remote),
                WorkModeMerge::new("Remoto", WorkMode::Remote),
                WorkModeMerge::new("Híbrido", WorkMode::Hybrid),
                WorkModeMerge::new("Flexible", WorkMode::Flexible),
            ],
        }
    }
}

impl CleaningConfig {
    /// Default education code: the lowest code the vocabulary defines.
    /// Applied to absent and unmatched answers alike.
    pub fn education_default(&self) -> u8 {
        self.education_vocabulary
            .iter()
            .map(|entry| entry.code)
            .min()
            .unwrap_or(0)
    }
}
