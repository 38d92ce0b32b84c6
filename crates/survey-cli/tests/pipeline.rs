//! End-to-end tests for the pipeline stages.

use std::fs;
use std::path::{Path, PathBuf};

use survey_cli::pipeline::{ingest, load_config, process, write_outputs};
use survey_model::{CleaningConfig, Violation};

const EXPERIENCE_HEADER: &str = "¿Cuántos años de experiencia en desarrollo de software tiene?";
const EDUCATION_HEADER: &str = "¿Cuál es su nivel de formación académica?";
const ENGLISH_HEADER: &str = "¿Cuál es su nivel de inglés? Marco de referencia Europeo";
const LANGUAGE_HEADER: &str =
    "¿En cuál de los siguientes lenguajes de programación ocupa la mayor parte de su tiempo laboral?";
const WORKMODE_HEADER: &str = "Su modo de trabajo es";
const COMPANY_HEADER: &str = "¿Para qué tipo de empresa trabaja?";
const CONTRACT_HEADER: &str =
    "¿Cuál es el tipo de contrato que tiene con la empresa dónde ejerce su trabajo principal?";

fn header_row() -> Vec<String> {
    let mut headers: Vec<String> = (0..19).map(|i| format!("filler {i}")).collect();
    headers[1] = EXPERIENCE_HEADER.to_string();
    headers[2] = EDUCATION_HEADER.to_string();
    headers[6] = ENGLISH_HEADER.to_string();
    headers[7] = LANGUAGE_HEADER.to_string();
    headers[8] = WORKMODE_HEADER.to_string();
    headers[10] = COMPANY_HEADER.to_string();
    headers[11] = CONTRACT_HEADER.to_string();
    headers
}

fn valid_cop_row() -> Vec<String> {
    let mut row = vec![String::new(); 19];
    row[1] = "6".to_string();
    row[2] = "Pregrado".to_string();
    row[6] = "B2 Puede liderar una reunión en inglés".to_string();
    row[7] = "Rust".to_string();
    row[8] = "Remoto".to_string();
    row[10] = "Colombiana con mercado nacional".to_string();
    row[11] = "Contrato Laboral".to_string();
    row[16] = "Pesos colombianos (COP)".to_string();
    row[17] = "60000000".to_string();
    row[18] = "72000000".to_string();
    row
}

fn usd_too_high_row() -> Vec<String> {
    let mut row = vec![String::new(); 19];
    row[1] = "10".to_string();
    row[7] = "Go".to_string();
    row[13] = "Dólares americanos (USD)".to_string();
    row[15] = "600000".to_string();
    row
}

fn write_fixture(dir: &Path) -> PathBuf {
    let mut lines = vec![header_row().join(",")];
    lines.push(valid_cop_row().join(","));
    lines.push(vec![String::new(); 19].join(","));
    lines.push(usd_too_high_row().join(","));
    let path = dir.join("salaries.csv");
    fs::write(&path, format!("{}\n", lines.join("\n"))).unwrap();
    path
}

#[test]
fn end_to_end_clean_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path());
    let output_dir = dir.path().join("output");

    let ingested = ingest(&input).unwrap();
    assert_eq!(ingested.records.len(), 3);
    assert!(ingested.unbound_fields.is_empty());

    let batch = process(&ingested.records, &CleaningConfig::default());
    assert_eq!(batch.valid.len() + batch.eliminated.len(), 3);
    assert_eq!(batch.valid.len(), 1);
    assert_eq!(batch.eliminated.len(), 2);

    let indices: Vec<usize> = batch
        .eliminated
        .iter()
        .map(|entry| entry.original_index)
        .collect();
    assert_eq!(indices, vec![1, 2]);
    assert_eq!(
        batch.eliminated[1].violations,
        vec![Violation::UnrealisticSalaryHigh]
    );

    let outputs = write_outputs(&output_dir, &batch).unwrap();
    let clean = fs::read_to_string(&outputs.clean).unwrap();
    let mut lines = clean.lines();
    assert!(lines.next().unwrap().starts_with("currency,"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("Pesos,Rust,Colombiana con mercado nacional,Remoto,Laboral,6,6,3,4,"));
    assert!(row.ends_with(",72000000"));

    let eliminated = fs::read_to_string(&outputs.eliminated).unwrap();
    assert_eq!(eliminated.lines().count(), 3);

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&outputs.summary).unwrap()).unwrap();
    assert_eq!(summary["input_records"], 3);
    assert_eq!(summary["valid_records"], 1);
    assert_eq!(summary["eliminated_records"], 2);
    assert_eq!(summary["currency_distribution"]["cop"], 1);
}

#[test]
fn outputs_are_written_even_when_nothing_survives() {
    let dir = tempfile::tempdir().unwrap();
    let mut lines = vec![header_row().join(",")];
    lines.push(vec![String::new(); 19].join(","));
    let input = dir.path().join("salaries.csv");
    fs::write(&input, format!("{}\n", lines.join("\n"))).unwrap();

    let ingested = ingest(&input).unwrap();
    let batch = process(&ingested.records, &CleaningConfig::default());
    assert!(batch.valid.is_empty());

    let outputs = write_outputs(&dir.path().join("output"), &batch).unwrap();
    let clean = fs::read_to_string(&outputs.clean).unwrap();
    assert_eq!(clean.lines().count(), 1);
    assert!(outputs.eliminated.exists());
    assert!(outputs.summary.exists());
}

#[test]
fn config_file_overrides_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "salary_bounds": { "usd_floor": 1000.0 } }"#,
    )
    .unwrap();

    let config = load_config(Some(&config_path)).unwrap();
    assert_eq!(config.salary_bounds.usd_floor, 1_000.0);
    assert_eq!(config.salary_bounds.cop_floor, 10_000_000.0);

    assert_eq!(load_config(None).unwrap(), CleaningConfig::default());
}

#[test]
fn malformed_config_is_a_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, "{ not json").unwrap();

    let error = load_config(Some(&config_path)).unwrap_err();
    assert!(error.to_string().contains("parse config"));
}

#[test]
fn missing_input_is_a_fatal_error() {
    let error = ingest(Path::new("/nonexistent/salaries.csv")).unwrap_err();
    assert!(error.to_string().contains("open survey export"));
}
