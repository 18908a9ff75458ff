use std::{cmp::Ordering, fmt};

use shared::domain::{CalendarAnchor, Company, Semester, StatusColumn};

use crate::{
    collation::{tie_break, Collation},
    dispatch::SortStrategy,
};

/// Status used when a company has no record for a term. Worse than any real code.
pub const NO_STATUS: u8 = 6;

/// A concrete academic term a status column resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub year: i32,
    pub semester: Semester,
}

impl Term {
    pub fn new(year: i32, semester: Semester) -> Self {
        Self { year, semester }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let season = match self.semester {
            Semester::First => "Spring",
            Semester::Second => "Autumn",
        };
        write!(f, "{season} {}", self.year)
    }
}

/// Maps a column to its term. The three columns are consecutive semesters starting
/// at the anchor, so the year rolls over at column 2 for a first-semester anchor and
/// at column 1 for a second-semester anchor.
pub fn resolve_term(column: StatusColumn, anchor: CalendarAnchor) -> Term {
    let index = column.index();
    let start = anchor.semester.index();
    let semester = if (index % 2 + start) % 2 == 0 {
        Semester::First
    } else {
        Semester::Second
    };

    let year = match anchor.semester {
        Semester::First if index < 2 => anchor.year,
        Semester::First => anchor.year + 1,
        Semester::Second if index == 0 => anchor.year,
        Semester::Second => anchor.year + 1,
    };

    Term::new(year, semester)
}

pub fn status_for(company: &Company, year: i32, semester: Semester) -> u8 {
    company
        .semester_statuses
        .iter()
        .find(|status| status.year == year && status.semester == semester)
        .map_or(NO_STATUS, |status| status.contacted_status)
}

pub fn by_contact_status(column: StatusColumn, anchor: CalendarAnchor) -> SortStrategy {
    SortStrategy::ContactStatus(resolve_term(column, anchor))
}

pub(crate) fn compare_contact_status(
    collation: &Collation,
    term: Term,
    ascending: bool,
    a: &Company,
    b: &Company,
) -> Ordering {
    let status_a = status_for(a, term.year, term.semester);
    let status_b = status_for(b, term.year, term.semester);
    let primary = if ascending {
        status_a.cmp(&status_b)
    } else {
        status_b.cmp(&status_a)
    };
    primary.then_with(|| tie_break(collation, a, b))
}

#[cfg(test)]
#[path = "tests/term_tests.rs"]
mod tests;
