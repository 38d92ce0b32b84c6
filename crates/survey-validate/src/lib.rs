//! Record validation.
//!
//! Applies the survey's plausibility rules to a record and its resolved
//! financials, producing a verdict with every fired violation in check
//! order. Rule outcomes are data, never errors: an implausible record is
//! routed to the elimination report, and the batch always completes.

mod rules;

pub use rules::{validate_record, violation_message};
