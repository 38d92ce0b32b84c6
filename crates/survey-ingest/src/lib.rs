//! Survey ingestion: CSV loading, schema binding, raw-record extraction.

pub mod csv_table;
pub mod records;
pub mod schema;
pub mod value;

pub use csv_table::{SurveyTable, read_survey_table};
pub use records::extract_records;
pub use schema::{ColumnBinding, LogicalField, ResolvedSchema, SurveySchema};
pub use value::{format_numeric, is_blank, parse_f64, parse_i64};
