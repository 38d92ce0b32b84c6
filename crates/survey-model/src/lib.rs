//! Data model for the salary-survey cleaning pipeline.

pub mod enums;
pub mod error;
pub mod options;
pub mod record;
pub mod verdict;

pub use enums::{CompanyType, ContractType, Currency, WorkMode};
pub use error::{Result, SurveyError};
pub use options::{CleaningConfig, ExperienceBounds, SalaryBounds, VocabularyEntry, WorkModeMerge};
pub use record::{CleanRecord, EliminationEntry, FinancialBlock, RawRecord, ResolvedFinancials};
pub use verdict::{ValidationVerdict, Violation};
