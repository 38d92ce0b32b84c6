//! Cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the export, resolve the schema, extract raw records
//! 2. **Process**: resolve financials, validate, normalize per record
//! 3. **Report**: write the cleaned dataset, elimination report, and summary
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Only stage 1 and 3 touch the filesystem; stage 2 is pure.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use survey_ingest::{SurveySchema, extract_records, read_survey_table};
use survey_model::{CleaningConfig, RawRecord};
use survey_report::{
    build_summary, write_clean_dataset, write_elimination_report, write_summary_json,
};
use survey_transform::{ProcessedBatch, process_records};

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Raw records in input order.
    pub records: Vec<RawRecord>,
    /// Logical fields the export did not provide.
    pub unbound_fields: Vec<String>,
}

/// Read the export and extract one raw record per row.
pub fn ingest(input: &Path) -> Result<IngestResult> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();

    let table = read_survey_table(input)?;
    let schema = SurveySchema::survey_2025();
    let resolved = schema.resolve(&table.headers);
    for field in &resolved.unbound {
        warn!(field = %field, "field missing from export; its records will fail validation");
    }
    let records = extract_records(&table, &resolved);
    info!(records = records.len(), "ingested survey export");

    Ok(IngestResult {
        records,
        unbound_fields: resolved.unbound.iter().map(|field| field.to_string()).collect(),
    })
}

/// Load the cleaning configuration, defaulting when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<CleaningConfig> {
    let Some(path) = path else {
        return Ok(CleaningConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Run the pure record-level transform over the batch.
pub fn process(records: &[RawRecord], config: &CleaningConfig) -> ProcessedBatch {
    let span = info_span!("process", records = records.len());
    let _guard = span.enter();
    process_records(records, config)
}

/// Files written by the report stage.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub clean: PathBuf,
    pub eliminated: PathBuf,
    pub summary: PathBuf,
}

/// Write all three outputs. The clean set may be empty; the files are
/// written regardless so every run leaves a complete audit trail.
pub fn write_outputs(output_dir: &Path, batch: &ProcessedBatch) -> Result<OutputPaths> {
    let span = info_span!("report", output_dir = %output_dir.display());
    let _guard = span.enter();

    let clean = write_clean_dataset(output_dir, &batch.valid)?;
    let eliminated = write_elimination_report(output_dir, &batch.eliminated)?;
    let summary = build_summary(&batch.valid, &batch.eliminated);
    let summary = write_summary_json(output_dir, &summary)?;
    info!(
        clean = %clean.display(),
        eliminated = %eliminated.display(),
        "wrote outputs"
    );

    Ok(OutputPaths {
        clean,
        eliminated,
        summary,
    })
}
