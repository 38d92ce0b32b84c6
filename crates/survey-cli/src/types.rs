use std::path::PathBuf;

use survey_cli::pipeline::OutputPaths;
use survey_report::{ReasonCount, elimination_rate_percent};

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub input_records: usize,
    pub valid_records: usize,
    pub eliminated_records: usize,
    pub breakdown: Vec<ReasonCount>,
    pub unbound_fields: Vec<String>,
    /// None on a dry run.
    pub outputs: Option<OutputPaths>,
}

impl RunResult {
    pub fn elimination_rate_percent(&self) -> f64 {
        elimination_rate_percent(self.input_records, self.eliminated_records)
    }
}
