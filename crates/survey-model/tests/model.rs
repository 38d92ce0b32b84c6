//! Serialization round-trips for the model and configuration types.

use survey_model::{CleaningConfig, Currency, EliminationEntry, VocabularyEntry, Violation};

#[test]
fn config_round_trips_through_json() {
    let config = CleaningConfig::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let back: CleaningConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn partial_config_file_overrides_only_named_fields() {
    let json = r#"{
        "salary_bounds": { "usd_floor": 1000.0 },
        "english_unmatched_code": 0
    }"#;
    let config: CleaningConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.salary_bounds.usd_floor, 1_000.0);
    // Unnamed fields keep their defaults.
    assert_eq!(config.salary_bounds.usd_ceiling, 500_000.0);
    assert_eq!(config.english_unmatched_code, 0);
    assert_eq!(config.english_missing_code, 0);
    assert_eq!(config.education_vocabulary.len(), 5);
}

#[test]
fn wider_education_scale_is_expressible() {
    let json = r#"{
        "education_vocabulary": [
            { "token": "Ninguno", "code": 0 },
            { "token": "Bachiller", "code": 1 },
            { "token": "Técnico", "code": 2 },
            { "token": "Tecnólogo", "code": 3 },
            { "token": "Pregrado", "code": 4 },
            { "token": "Especialista", "code": 5 },
            { "token": "Maestría", "code": 6 },
            { "token": "Doctorado", "code": 7 }
        ]
    }"#;
    let config: CleaningConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.education_vocabulary.last(),
        Some(&VocabularyEntry::new("Doctorado", 7))
    );
    assert_eq!(config.education_default(), 0);
}

#[test]
fn elimination_entry_serializes_rule_identifiers() {
    let entry = EliminationEntry {
        original_index: 7,
        currency: Some("Pesos colombianos (COP)".to_string()),
        experience_years: Some(3.0),
        programming_language: None,
        salary_type: Currency::Cop,
        base_salary_usd: None,
        total_salary_usd: None,
        base_salary_cop: Some(60_000_000.0),
        total_salary_cop: Some(72_000_000.0),
        effective_base_salary: Some(60_000_000.0),
        effective_total_salary: Some(72_000_000.0),
        violations: vec![Violation::MissingLanguage],
        issues: vec!["missing programming language".to_string()],
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["salary_type"], "cop");
    assert_eq!(json["violations"][0], "missing-language");
    assert_eq!(entry.issue_count(), 1);
}
