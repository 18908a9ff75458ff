use super::*;

use shared::domain::Semester;

fn anchor() -> CalendarAnchor {
    CalendarAnchor::new(2023, Semester::Second)
}

#[test]
fn table_headers_show_resolved_terms() {
    let table = render_table(&[], anchor());
    assert_eq!(
        table.lines().next(),
        Some("name | studentContact | comment | Autumn 2023 | Spring 2024 | Autumn 2024")
    );
}

#[test]
fn table_rows_use_dash_for_missing_status() {
    let company = Company::new("Acme")
        .with_contact_person("Kari")
        .with_comment("ok")
        .with_status(2024, Semester::First, 3);
    let table = render_table(&[company], anchor());
    let row = table.lines().nth(1).expect("row");
    let cells: Vec<&str> = row.split('|').map(str::trim).collect();
    assert_eq!(cells, ["Acme", "Kari", "ok", "-", "3", "-"]);
}

#[test]
fn json_output_keeps_wire_field_names() {
    let out = render(&[Company::new("Acme")], anchor(), OutputFormat::Json).expect("json");
    assert!(out.contains("\"semesterStatuses\""));
    assert!(out.contains("\"adminComment\""));
}

#[test]
fn terms_listing_names_each_column() {
    let out = render_terms(CalendarAnchor::new(2023, Semester::First), OutputFormat::Table)
        .expect("terms");
    assert_eq!(out, "sem0\tSpring 2023\nsem1\tAutumn 2023\nsem2\tSpring 2024\n");
}
