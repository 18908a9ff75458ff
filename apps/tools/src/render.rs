use std::fmt::Write as _;

use serde::Serialize;
use shared::domain::{CalendarAnchor, Company, StatusColumn};
use sorting::{resolve_term, status_for, Term, NO_STATUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn render(
    companies: &[Company],
    anchor: CalendarAnchor,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(companies, anchor)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(companies)?),
    }
}

pub fn column_terms(anchor: CalendarAnchor) -> [Term; 3] {
    StatusColumn::ALL.map(|column| resolve_term(column, anchor))
}

#[derive(Debug, Serialize)]
struct TermRow {
    column: String,
    year: i32,
    semester: u8,
    label: String,
}

pub fn render_terms(anchor: CalendarAnchor, format: OutputFormat) -> anyhow::Result<String> {
    let rows: Vec<TermRow> = StatusColumn::ALL
        .iter()
        .zip(column_terms(anchor))
        .map(|(column, term)| TermRow {
            column: format!("sem{}", column.index()),
            year: term.year,
            semester: term.semester.index(),
            label: term.to_string(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            let mut out = String::new();
            for row in rows {
                let _ = writeln!(out, "{}\t{}", row.column, row.label);
            }
            Ok(out)
        }
    }
}

fn render_table(companies: &[Company], anchor: CalendarAnchor) -> String {
    let terms = column_terms(anchor);
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(companies.len() + 1);

    let mut header = vec![
        "name".to_string(),
        "studentContact".to_string(),
        "comment".to_string(),
    ];
    header.extend(terms.iter().map(Term::to_string));
    rows.push(header);

    for company in companies {
        let mut row = vec![
            company.name.clone(),
            company
                .student_contact
                .as_ref()
                .map(|contact| contact.sort_text().to_string())
                .unwrap_or_default(),
            company.admin_comment.clone(),
        ];
        row.extend(terms.iter().map(|term| {
            match status_for(company, term.year, term.semester) {
                NO_STATUS => "-".to_string(),
                status => status.to_string(),
            }
        }));
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", cells.join(" | ").trim_end());
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
