//! Schema binding layer.
//!
//! The export identifies columns by long natural-language question text,
//! except for the two financial blocks whose header text is identical and
//! can only be told apart by position. Each logical field therefore binds
//! to either a header or a fixed column index; bindings resolve to
//! concrete indices once at load time, and downstream code only ever sees
//! logical fields.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fields the pipeline knows how to extract from the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalField {
    ExperienceYears,
    EducationLevel,
    EnglishLevel,
    ProgrammingLanguage,
    WorkMode,
    CompanyType,
    ContractType,
    UsdCurrency,
    UsdBaseSalary,
    UsdTotalSalary,
    CopCurrency,
    CopBaseSalary,
    CopTotalSalary,
}

impl LogicalField {
    pub const ALL: [LogicalField; 13] = [
        LogicalField::ExperienceYears,
        LogicalField::EducationLevel,
        LogicalField::EnglishLevel,
        LogicalField::ProgrammingLanguage,
        LogicalField::WorkMode,
        LogicalField::CompanyType,
        LogicalField::ContractType,
        LogicalField::UsdCurrency,
        LogicalField::UsdBaseSalary,
        LogicalField::UsdTotalSalary,
        LogicalField::CopCurrency,
        LogicalField::CopBaseSalary,
        LogicalField::CopTotalSalary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalField::ExperienceYears => "experience-years",
            LogicalField::EducationLevel => "education-level",
            LogicalField::EnglishLevel => "english-level",
            LogicalField::ProgrammingLanguage => "programming-language",
            LogicalField::WorkMode => "work-mode",
            LogicalField::CompanyType => "company-type",
            LogicalField::ContractType => "contract-type",
            LogicalField::UsdCurrency => "usd-currency",
            LogicalField::UsdBaseSalary => "usd-base-salary",
            LogicalField::UsdTotalSalary => "usd-total-salary",
            LogicalField::CopCurrency => "cop-currency",
            LogicalField::CopBaseSalary => "cop-base-salary",
            LogicalField::CopTotalSalary => "cop-total-salary",
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a logical field is located in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnBinding {
    /// Exact (whitespace-normalized) header text.
    Header(String),
    /// Zero-based column position, for headers that collide.
    Index(usize),
}

impl fmt::Display for ColumnBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnBinding::Header(text) => write!(f, "header \"{text}\""),
            ColumnBinding::Index(idx) => write!(f, "column {idx}"),
        }
    }
}

const EXPERIENCE_HEADER: &str = "¿Cuántos años de experiencia en desarrollo de software tiene?";
const EDUCATION_HEADER: &str = "¿Cuál es su nivel de formación académica?";
const ENGLISH_HEADER: &str = "¿Cuál es su nivel de inglés? Marco de referencia Europeo";
const LANGUAGE_HEADER: &str =
    "¿En cuál de los siguientes lenguajes de programación ocupa la mayor parte de su tiempo laboral?";
const WORKMODE_HEADER: &str = "Su modo de trabajo es";
const COMPANY_HEADER: &str = "¿Para qué tipo de empresa trabaja?";
const CONTRACT_HEADER: &str =
    "¿Cuál es el tipo de contrato que tiene con la empresa dónde ejerce su trabajo principal?";

/// Mapping of logical fields to column bindings for one export layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySchema {
    pub bindings: Vec<(LogicalField, ColumnBinding)>,
}

impl SurveySchema {
    /// Layout of the 2025 survey export: natural-language headers for the
    /// unambiguous questions, fixed positions for the duplicated
    /// financial blocks (columns 13-15 dollar branch, 16-18 peso branch).
    pub fn survey_2025() -> Self {
        let header = |field, text: &str| (field, ColumnBinding::Header(text.to_string()));
        let index = |field, idx| (field, ColumnBinding::Index(idx));
        Self {
            bindings: vec![
                header(LogicalField::ExperienceYears, EXPERIENCE_HEADER),
                header(LogicalField::EducationLevel, EDUCATION_HEADER),
                header(LogicalField::EnglishLevel, ENGLISH_HEADER),
                header(LogicalField::ProgrammingLanguage, LANGUAGE_HEADER),
                header(LogicalField::WorkMode, WORKMODE_HEADER),
                header(LogicalField::CompanyType, COMPANY_HEADER),
                header(LogicalField::ContractType, CONTRACT_HEADER),
                index(LogicalField::UsdCurrency, 13),
                index(LogicalField::UsdBaseSalary, 14),
                index(LogicalField::UsdTotalSalary, 15),
                index(LogicalField::CopCurrency, 16),
                index(LogicalField::CopBaseSalary, 17),
                index(LogicalField::CopTotalSalary, 18),
            ],
        }
    }

    /// Resolves every binding against the export headers.
    ///
    /// Fields that cannot be located stay unbound: their values read back
    /// as absent and the affected records surface through the missing-*
    /// validation rules instead of failing the run.
    pub fn resolve(&self, headers: &[String]) -> ResolvedSchema {
        let mut indices = BTreeMap::new();
        let mut unbound = Vec::new();
        for (field, binding) in &self.bindings {
            let index = match binding {
                ColumnBinding::Header(text) => {
                    headers.iter().position(|header| header == text)
                }
                ColumnBinding::Index(idx) if *idx < headers.len() => Some(*idx),
                ColumnBinding::Index(_) => None,
            };
            match index {
                Some(index) => {
                    indices.insert(*field, index);
                }
                None => {
                    warn!(field = %field, binding = %binding, "field not found in export");
                    unbound.push(*field);
                }
            }
        }
        ResolvedSchema { indices, unbound }
    }
}

impl Default for SurveySchema {
    fn default() -> Self {
        Self::survey_2025()
    }
}

/// A schema resolved against one concrete export.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    indices: BTreeMap<LogicalField, usize>,
    pub unbound: Vec<LogicalField>,
}

impl ResolvedSchema {
    pub fn column_of(&self, field: LogicalField) -> Option<usize> {
        self.indices.get(&field).copied()
    }
}
