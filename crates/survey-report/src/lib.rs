//! Output writers for the cleaning pipeline.
//!
//! Three artifacts per run: the cleaned dataset, the elimination report,
//! and a schema-tagged JSON summary. All three are written even when the
//! clean set is empty; a completed run always leaves a full audit trail.

mod common;
mod dataset;
mod elimination;
mod summary;

pub use dataset::{CLEAN_DATASET_FILE, render_clean_dataset, write_clean_dataset};
pub use elimination::{
    ELIMINATION_REPORT_FILE, render_elimination_report, write_elimination_report,
};
pub use summary::{
    CleaningSummary, CurrencyDistribution, ReasonCount, SUMMARY_FILE, build_summary,
    currency_distribution, elimination_rate_percent, reason_breakdown, write_summary_json,
};
