use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use hsk_cli::report::{ColorReport, DateReport, StorageReport, ValidateReport, ValueReport};

pub fn print_validate_summary(report: &ValidateReport) {
    println!("Field: {}", report.kind);
    println!("Rule: {}", verdict(report.accepted));
    if let Some(checks) = &report.password {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Check"), header_cell("Result")]);
        apply_table_style(&mut table);
        table.add_row(vec![
            Cell::new("enrollment rule (8+ chars, 1 special)"),
            pass_cell(checks.enrollment_rule),
        ]);
        table.add_row(vec![
            Cell::new("strong policy (4 classes, 8-64 chars)"),
            pass_cell(checks.strong_policy),
        ]);
        table.add_row(vec![
            Cell::new("complexity gate (symbol + alphanumeric)"),
            pass_cell(checks.complexity),
        ]);
        println!("{table}");
    }
}

pub fn print_value_summary(report: &ValueReport) {
    match report.kind {
        Some(kind) => println!("Kind: {kind}"),
        None => println!("Kind: absent"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("usable scalar value"),
        pass_cell(report.valid_value),
    ]);
    table.add_row(vec![
        Cell::new("non-empty container"),
        pass_cell(report.valid_object),
    ]);
    if let Some(expected) = report.expected {
        table.add_row(vec![
            Cell::new(format!("matches expected kind '{}'", expected.kind)),
            pass_cell(expected.matched),
        ]);
    }
    println!("{table}");
    println!("Verdict: {}", verdict(report.accepted));
}

pub fn print_date_summary(report: &DateReport) {
    println!("Input: {}", report.input);
    match &report.canonical {
        Some(canonical) => println!("Canonical: {canonical}"),
        None => println!("Canonical: (input did not match the expected form)"),
    }
}

pub fn print_color_summary(report: &ColorReport) {
    println!("Input: {}", report.input);
    println!("Decoded: {}", report.rgba);
    if report.fallback {
        println!("Note: not a 6-digit hex color, gray fallback used");
    }
}

pub fn print_storage_summary(report: &StorageReport) {
    println!("Bucket: {}", report.bucket);
    println!("Root: {}", report.root.display());
    println!("Path: {}", report.path.display());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn pass_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn verdict(accepted: bool) -> &'static str {
    if accepted { "accepted" } else { "rejected" }
}
