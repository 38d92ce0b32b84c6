//! Currency/salary resolution across the duplicated financial blocks.
//!
//! The form branches on the payment currency, but the export materializes
//! both branches as columns for every respondent. Whichever block has its
//! currency question answered is authoritative; the first (dollar-branch)
//! block wins when both were answered. Resolution is pure: it reads the
//! record and nothing else.

use survey_model::{Currency, FinancialBlock, RawRecord, ResolvedFinancials};

/// Reduces a raw currency answer to the currency enum by keyword.
fn classify_currency(answer: &str) -> Currency {
    if answer.contains("USD") || answer.contains("Dólares") {
        Currency::Usd
    } else if answer.contains("COP") || answer.contains("Pesos") {
        Currency::Cop
    } else {
        Currency::Unknown
    }
}

fn resolve_block(block: &FinancialBlock) -> ResolvedFinancials {
    let currency = block
        .currency
        .as_deref()
        .map_or(Currency::Unknown, classify_currency);
    ResolvedFinancials {
        currency,
        base_salary: block.base_salary,
        total_salary: block.total_salary,
    }
}

/// Picks the effective currency and salaries for one record.
pub fn resolve_financials(record: &RawRecord) -> ResolvedFinancials {
    if record.usd_block.has_currency() {
        resolve_block(&record.usd_block)
    } else if record.cop_block.has_currency() {
        resolve_block(&record.cop_block)
    } else {
        ResolvedFinancials::unknown()
    }
}
