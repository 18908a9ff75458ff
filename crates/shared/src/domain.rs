use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Two semesters per academic year, serialized as `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn index(self) -> u8 {
        match self {
            Semester::First => 0,
            Semester::Second => 1,
        }
    }
}

impl TryFrom<u8> for Semester {
    type Error = RosterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Semester::First),
            1 => Ok(Semester::Second),
            other => Err(RosterError::InvalidSemester(other)),
        }
    }
}

impl From<Semester> for u8 {
    fn from(value: Semester) -> Self {
        value.index()
    }
}

/// Position of a temporal status column in the table, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColumn {
    Sem0,
    Sem1,
    Sem2,
}

impl StatusColumn {
    pub const ALL: [StatusColumn; 3] = [StatusColumn::Sem0, StatusColumn::Sem1, StatusColumn::Sem2];

    pub fn index(self) -> u8 {
        match self {
            StatusColumn::Sem0 => 0,
            StatusColumn::Sem1 => 1,
            StatusColumn::Sem2 => 2,
        }
    }
}

/// The term the leftmost status column represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarAnchor {
    pub year: i32,
    pub semester: Semester,
}

impl CalendarAnchor {
    pub fn new(year: i32, semester: Semester) -> Self {
        Self { year, semester }
    }

    pub fn try_from_raw(year: i32, semester: u8) -> Result<Self, RosterError> {
        Ok(Self::new(year, Semester::try_from(semester)?))
    }

    /// January through July is the first semester, August onwards the second.
    pub fn for_date(date: NaiveDate) -> Self {
        let semester = if date.month() >= 8 {
            Semester::Second
        } else {
            Semester::First
        };
        Self::new(date.year(), semester)
    }
}

impl fmt::Display for CalendarAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.semester.index())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub full_name: String,
}

/// A static column value: plain text, or a reference to a person shown by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Person(PersonRef),
}

impl AttributeValue {
    pub fn sort_text(&self) -> &str {
        match self {
            AttributeValue::Text(text) => text,
            AttributeValue::Person(person) => &person.full_name,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterStatus {
    pub year: i32,
    pub semester: Semester,
    pub contacted_status: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub student_contact: Option<AttributeValue>,
    #[serde(default)]
    pub admin_comment: String,
    #[serde(default)]
    pub semester_statuses: Vec<SemesterStatus>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            student_contact: None,
            admin_comment: String::new(),
            semester_statuses: Vec::new(),
        }
    }

    pub fn with_student_contact(mut self, contact: impl Into<AttributeValue>) -> Self {
        self.student_contact = Some(contact.into());
        self
    }

    pub fn with_contact_person(mut self, full_name: impl Into<String>) -> Self {
        self.student_contact = Some(AttributeValue::Person(PersonRef {
            full_name: full_name.into(),
        }));
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.admin_comment = comment.into();
        self
    }

    pub fn with_status(mut self, year: i32, semester: Semester, contacted_status: u8) -> Self {
        self.semester_statuses.push(SemesterStatus {
            year,
            semester,
            contacted_status,
        });
        self
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
