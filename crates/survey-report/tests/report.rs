//! Rendering and file-writing tests for the report writers.

use survey_model::{
    CleanRecord, CompanyType, ContractType, Currency, EliminationEntry, Violation, WorkMode,
};
use survey_report::{
    build_summary, reason_breakdown, render_clean_dataset, render_elimination_report,
    write_clean_dataset, write_elimination_report, write_summary_json,
};

fn clean_record() -> CleanRecord {
    CleanRecord {
        currency: Currency::Cop,
        programming_language: "Rust".to_string(),
        company_type: CompanyType::DomesticMarket,
        work_mode: WorkMode::Remote,
        contract_type: ContractType::Employment,
        min_experience: 7,
        max_experience: 7,
        english_level: 3,
        education_level: 4,
        income: 84_000_000.0,
    }
}

fn elimination_entry() -> EliminationEntry {
    EliminationEntry {
        original_index: 4,
        currency: Some("Pesos colombianos (COP)".to_string()),
        experience_years: Some(2.0),
        programming_language: None,
        salary_type: Currency::Cop,
        base_salary_usd: None,
        total_salary_usd: None,
        base_salary_cop: None,
        total_salary_cop: Some(8_000_000.0),
        effective_base_salary: None,
        effective_total_salary: Some(8_000_000.0),
        violations: vec![Violation::MissingLanguage, Violation::UnrealisticSalaryLow],
        issues: vec![
            "missing programming language".to_string(),
            "unrealistic low COP salary: 8000000".to_string(),
        ],
    }
}

#[test]
fn clean_dataset_keeps_the_published_column_order() {
    let rendered = render_clean_dataset(&[clean_record()]).unwrap();
    insta::assert_snapshot!(rendered.trim_end(), @r"
    currency,main-programming-language,company-type,workmode,contract-type,min-experience,max-experience,english-level,max-title,income-in-currency
    Pesos,Rust,Colombiana con mercado nacional,Remoto,Laboral,7,7,3,4,84000000
    ");
}

#[test]
fn elimination_report_joins_issues_with_semicolons() {
    let rendered = render_elimination_report(&[elimination_entry()]).unwrap();
    insta::assert_snapshot!(rendered.trim_end(), @r"
    original_index,currency,experience_years,programming_language,salary_type,base_salary_usd,total_salary_usd,base_salary_cop,total_salary_cop,effective_base_salary,effective_total_salary,issues,issue_count
    4,Pesos colombianos (COP),2,,COP,,,,8000000,,8000000,missing programming language; unrealistic low COP salary: 8000000,2
    ");
}

#[test]
fn empty_outputs_still_render_headers() {
    let clean = render_clean_dataset(&[]).unwrap();
    assert!(clean.starts_with("currency,"));
    assert_eq!(clean.lines().count(), 1);

    let eliminated = render_elimination_report(&[]).unwrap();
    assert!(eliminated.starts_with("original_index,"));
    assert_eq!(eliminated.lines().count(), 1);
}

#[test]
fn breakdown_sorts_by_count_then_rule_order() {
    let mut first = elimination_entry();
    first.violations = vec![Violation::MissingLanguage, Violation::MissingExperience];
    let mut second = elimination_entry();
    second.violations = vec![Violation::MissingExperience];
    let breakdown = reason_breakdown(&[first, second]);

    assert_eq!(breakdown[0].reason, Violation::MissingExperience);
    assert_eq!(breakdown[0].count, 2);
    assert_eq!(breakdown[1].reason, Violation::MissingLanguage);
    assert_eq!(breakdown[1].count, 1);
}

#[test]
fn summary_counts_and_rate() {
    let valid = vec![clean_record(), clean_record(), clean_record()];
    let eliminated = vec![elimination_entry()];
    let summary = build_summary(&valid, &eliminated);

    assert_eq!(summary.input_records, 4);
    assert_eq!(summary.valid_records, 3);
    assert_eq!(summary.eliminated_records, 1);
    assert_eq!(summary.elimination_rate_percent, 25.0);
    assert_eq!(summary.currency_distribution.cop, 3);
    assert_eq!(summary.currency_distribution.usd, 0);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["schema"], "survey-cleaner.cleaning-summary");
    assert_eq!(json["breakdown"][0]["reason"], "missing-language");
}

#[test]
fn writers_create_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");

    let clean_path = write_clean_dataset(&output_dir, &[clean_record()]).unwrap();
    let eliminated_path = write_elimination_report(&output_dir, &[elimination_entry()]).unwrap();
    let summary = build_summary(&[clean_record()], &[elimination_entry()]);
    let summary_path = write_summary_json(&output_dir, &summary).unwrap();

    assert!(clean_path.exists());
    assert!(eliminated_path.exists());
    assert!(summary_path.exists());

    let written = std::fs::read_to_string(&summary_path).unwrap();
    assert!(written.ends_with('\n'));
}
