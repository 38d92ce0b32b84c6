//! Free-text categorical answers to enumerated codes.
//!
//! All matching is case-sensitive substring containment against the raw
//! answer, scanning the relevant vocabulary in order; the first token
//! found wins. An absent answer always yields the defined default code,
//! never an error.

use survey_model::{CleaningConfig, CompanyType, ContractType, WorkMode, WorkModeMerge};

/// Education answer to the configured numeric scale.
///
/// Absent and unmatched answers both collapse to the lowest code the
/// vocabulary defines.
pub fn normalize_education(answer: Option<&str>, config: &CleaningConfig) -> u8 {
    let default = config.education_default();
    let Some(answer) = answer else {
        return default;
    };
    config
        .education_vocabulary
        .iter()
        .find(|entry| answer.contains(entry.token.as_str()))
        .map_or(default, |entry| entry.code)
}

/// English answer to the 0-4 proficiency scale.
///
/// The answers embed a short level code (A1..C2) inside a longer
/// sentence; the first vocabulary token contained in the answer wins.
/// Absent answers map to `english_missing_code`, present-but-unmatched
/// answers to `english_unmatched_code` - the asymmetry is intentional.
pub fn normalize_english(answer: Option<&str>, config: &CleaningConfig) -> u8 {
    let Some(answer) = answer else {
        return config.english_missing_code;
    };
    config
        .english_vocabulary
        .iter()
        .find(|entry| answer.contains(entry.token.as_str()))
        .map_or(config.english_unmatched_code, |entry| entry.code)
}

const COMPANY_KEYWORDS: &[(&str, CompanyType)] = &[
    ("Extranjera", CompanyType::Foreign),
    ("mercado extranjero", CompanyType::DomesticForeignMarket),
    ("mercado nacional", CompanyType::DomesticMarket),
    ("independiente", CompanyType::Independent),
    ("Freelance", CompanyType::Independent),
];

pub fn normalize_company_type(answer: Option<&str>) -> CompanyType {
    let Some(answer) = answer else {
        return CompanyType::NoAnswer;
    };
    COMPANY_KEYWORDS
        .iter()
        .find(|(keyword, _)| answer.contains(keyword))
        .map_or(CompanyType::NoAnswer, |(_, company)| *company)
}

/// Work-mode answer through the configurable merge table.
pub fn normalize_work_mode(answer: Option<&str>, merges: &[WorkModeMerge]) -> WorkMode {
    let Some(answer) = answer else {
        return WorkMode::NoAnswer;
    };
    merges
        .iter()
        .find(|merge| answer.contains(merge.keyword.as_str()))
        .map_or(WorkMode::NoAnswer, |merge| merge.mode)
}

const CONTRACT_KEYWORDS: &[(&str, ContractType)] = &[
    ("Laboral", ContractType::Employment),
    ("Prestación de servicios", ContractType::Services),
    ("Contractor", ContractType::Services),
    ("Independiente", ContractType::Services),
];

pub fn normalize_contract_type(answer: Option<&str>) -> ContractType {
    let Some(answer) = answer else {
        return ContractType::NoAnswer;
    };
    CONTRACT_KEYWORDS
        .iter()
        .find(|(keyword, _)| answer.contains(keyword))
        .map_or(ContractType::NoAnswer, |(_, contract)| *contract)
}
