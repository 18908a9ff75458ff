use std::cmp::Ordering;

use shared::domain::Company;

use crate::{
    collation::{tie_break, Collation},
    dispatch::SortStrategy,
};

/// Static company fields a roster can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    StudentContact,
    AdminComment,
}

impl Attribute {
    pub fn field_name(self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::StudentContact => "studentContact",
            Attribute::AdminComment => "adminComment",
        }
    }

    /// Text the attribute sorts by: a contact person's full name, otherwise the value itself.
    pub fn sort_text(self, company: &Company) -> Option<&str> {
        match self {
            Attribute::Name => Some(&company.name),
            Attribute::StudentContact => company.student_contact.as_ref().map(|v| v.sort_text()),
            Attribute::AdminComment => Some(&company.admin_comment),
        }
    }
}

pub fn by_attribute(attribute: Attribute) -> SortStrategy {
    SortStrategy::Attribute(attribute)
}

// Absent values sort last in both directions.
pub(crate) fn compare_attribute(
    collation: &Collation,
    attribute: Attribute,
    ascending: bool,
    a: &Company,
    b: &Company,
) -> Ordering {
    let primary = match (attribute.sort_text(a), attribute.sort_text(b)) {
        (Some(left), Some(right)) if left == right => Ordering::Equal,
        (Some(left), Some(right)) if ascending => collation.compare(left, right),
        (Some(left), Some(right)) => collation.compare(right, left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    primary.then_with(|| tie_break(collation, a, b))
}

#[cfg(test)]
#[path = "tests/attribute_tests.rs"]
mod tests;
