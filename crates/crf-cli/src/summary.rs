use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crf_cli::batch::BatchOutcome;
use crf_model::Severity;

pub fn print_summary(outcome: &BatchOutcome) {
    println!("Records: {}", outcome.records);
    if let Some(path) = &outcome.output_path {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &outcome.report_path {
        println!("Diagnostics report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Normalized"),
        header_cell("Missing"),
        header_cell("Invalid"),
    ]);
    apply_column_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_normalized = 0usize;
    let mut total_missing = 0usize;
    let mut total_invalid = 0usize;
    for stats in &outcome.columns {
        total_normalized += stats.normalized;
        total_missing += stats.missing;
        total_invalid += stats.invalid;
        table.add_row(vec![
            Cell::new(&stats.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stats.kind.as_str()),
            Cell::new(stats.normalized),
            count_cell(stats.missing, Color::Yellow),
            count_cell(stats.invalid, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_normalized).add_attribute(Attribute::Bold),
        count_cell(total_missing, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_invalid, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_finding_table(outcome);
}

fn print_finding_table(outcome: &BatchOutcome) {
    if outcome.findings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_finding_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for finding in &outcome.findings {
        table.add_row(vec![
            Cell::new(finding.row),
            Cell::new(&finding.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            severity_cell(finding.severity),
            Cell::new(&finding.message),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn apply_column_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn apply_finding_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::DarkGrey),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
