use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use survey_cli::pipeline::{ingest, load_config, process, write_outputs};
use survey_ingest::SurveySchema;
use survey_report::reason_breakdown;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_clean(args: &CleanArgs) -> Result<RunResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));

    let ingest_result = ingest(&args.input)?;
    let batch = process(&ingest_result.records, &config);
    let breakdown = reason_breakdown(&batch.eliminated);

    let outputs = if args.dry_run {
        None
    } else {
        Some(write_outputs(&output_dir, &batch)?)
    };

    Ok(RunResult {
        input: args.input.clone(),
        output_dir,
        input_records: ingest_result.records.len(),
        valid_records: batch.valid.len(),
        eliminated_records: batch.eliminated.len(),
        breakdown,
        unbound_fields: ingest_result.unbound_fields,
        outputs,
    })
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        .join("output")
}

pub fn run_fields() -> Result<()> {
    let schema = SurveySchema::survey_2025();
    let mut table = Table::new();
    table.set_header(vec!["Field", "Binding"]);
    apply_table_style(&mut table);
    for (field, binding) in &schema.bindings {
        table.add_row(vec![field.to_string(), binding.to_string()]);
    }
    println!("{table}");
    Ok(())
}
