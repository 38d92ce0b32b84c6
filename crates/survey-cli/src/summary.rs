use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.outputs {
        Some(outputs) => {
            println!("Cleaned dataset: {}", outputs.clean.display());
            println!("Elimination report: {}", outputs.eliminated.display());
            println!("Summary: {}", outputs.summary.display());
        }
        None => println!("Dry run: no files written"),
    }

    let mut table = Table::new();
    table.set_header(vec!["Records", "Count"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input"), Cell::new(result.input_records)]);
    table.add_row(vec![
        Cell::new("Valid"),
        Cell::new(result.valid_records).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Eliminated"),
        Cell::new(result.eliminated_records).fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Elimination rate").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", result.elimination_rate_percent()))
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_breakdown(result);

    if !result.unbound_fields.is_empty() {
        eprintln!("Missing fields:");
        for field in &result.unbound_fields {
            eprintln!("- {field}");
        }
    }
}

fn print_breakdown(result: &RunResult) {
    if result.breakdown.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Elimination reason", "Records"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &result.breakdown {
        table.add_row(vec![
            Cell::new(entry.reason.as_str()),
            Cell::new(entry.count).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}
