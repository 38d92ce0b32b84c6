//! Raw-record extraction from a resolved export.

use survey_model::{FinancialBlock, RawRecord};
use tracing::debug;

use crate::csv_table::SurveyTable;
use crate::schema::{LogicalField, ResolvedSchema};
use crate::value::{is_blank, parse_f64};

fn text_field(row: &[String], schema: &ResolvedSchema, field: LogicalField) -> Option<String> {
    let column = schema.column_of(field)?;
    let cell = row.get(column)?;
    if is_blank(cell) {
        None
    } else {
        Some(cell.clone())
    }
}

fn numeric_field(row: &[String], schema: &ResolvedSchema, field: LogicalField) -> Option<f64> {
    let column = schema.column_of(field)?;
    row.get(column).and_then(|cell| parse_f64(cell))
}

fn extract_record(row: &[String], schema: &ResolvedSchema) -> RawRecord {
    RawRecord {
        experience_years: numeric_field(row, schema, LogicalField::ExperienceYears),
        programming_language: text_field(row, schema, LogicalField::ProgrammingLanguage),
        education_level: text_field(row, schema, LogicalField::EducationLevel),
        english_level: text_field(row, schema, LogicalField::EnglishLevel),
        company_type: text_field(row, schema, LogicalField::CompanyType),
        work_mode: text_field(row, schema, LogicalField::WorkMode),
        contract_type: text_field(row, schema, LogicalField::ContractType),
        usd_block: FinancialBlock {
            currency: text_field(row, schema, LogicalField::UsdCurrency),
            base_salary: numeric_field(row, schema, LogicalField::UsdBaseSalary),
            total_salary: numeric_field(row, schema, LogicalField::UsdTotalSalary),
        },
        cop_block: FinancialBlock {
            currency: text_field(row, schema, LogicalField::CopCurrency),
            base_salary: numeric_field(row, schema, LogicalField::CopBaseSalary),
            total_salary: numeric_field(row, schema, LogicalField::CopTotalSalary),
        },
    }
}

/// Extracts one `RawRecord` per table row, in input order.
pub fn extract_records(table: &SurveyTable, schema: &ResolvedSchema) -> Vec<RawRecord> {
    let records: Vec<RawRecord> = table
        .rows
        .iter()
        .map(|row| extract_record(row, schema))
        .collect();
    debug!(records = records.len(), "extracted raw records");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SurveySchema;

    fn table_with_row(row: Vec<&str>) -> SurveyTable {
        let mut headers: Vec<String> = (0..19).map(|i| format!("filler {i}")).collect();
        headers[1] = "¿Cuántos años de experiencia en desarrollo de software tiene?".to_string();
        headers[7] =
            "¿En cuál de los siguientes lenguajes de programación ocupa la mayor parte de su tiempo laboral?"
                .to_string();
        SurveyTable {
            headers,
            rows: vec![row.into_iter().map(String::from).collect()],
        }
    }

    fn row_of(width: usize) -> Vec<&'static str> {
        vec![""; width]
    }

    #[test]
    fn extracts_numeric_and_text_fields() {
        let mut row = row_of(19);
        row[1] = "7";
        row[7] = "Rust";
        row[16] = "Pesos colombianos (COP)";
        row[17] = "60000000";
        row[18] = "72000000";
        let table = table_with_row(row);
        let schema = SurveySchema::survey_2025().resolve(&table.headers);

        let records = extract_records(&table, &schema);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.experience_years, Some(7.0));
        assert_eq!(record.programming_language.as_deref(), Some("Rust"));
        assert_eq!(record.usd_block.currency, None);
        assert_eq!(
            record.cop_block.currency.as_deref(),
            Some("Pesos colombianos (COP)")
        );
        assert_eq!(record.cop_block.total_salary, Some(72_000_000.0));
    }

    #[test]
    fn malformed_numbers_become_absent() {
        let mut row = row_of(19);
        row[1] = "cinco";
        row[18] = "~8M";
        let table = table_with_row(row);
        let schema = SurveySchema::survey_2025().resolve(&table.headers);

        let record = &extract_records(&table, &schema)[0];
        assert_eq!(record.experience_years, None);
        assert_eq!(record.cop_block.total_salary, None);
    }

    #[test]
    fn short_rows_read_back_as_absent() {
        let mut row = row_of(10);
        row[1] = "3";
        let table = table_with_row(row);
        let schema = SurveySchema::survey_2025().resolve(&table.headers);

        let record = &extract_records(&table, &schema)[0];
        assert_eq!(record.experience_years, Some(3.0));
        assert_eq!(record.usd_block.currency, None);
        assert_eq!(record.cop_block.total_salary, None);
    }
}
