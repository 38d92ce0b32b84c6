//! Normalization of free-text survey answers.

mod categorical;

pub use categorical::{
    normalize_company_type, normalize_contract_type, normalize_education, normalize_english,
    normalize_work_mode,
};
