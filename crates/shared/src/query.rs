use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::StatusColumn;

/// Column or criterion a roster is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Sem0,
    Sem1,
    Sem2,
    StudentContact,
    Comment,
    /// Anything else a caller sent. Sorted by name, ascending.
    Unrecognized(String),
}

impl SortKey {
    pub const RECOGNIZED: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Sem0,
        SortKey::Sem1,
        SortKey::Sem2,
        SortKey::StudentContact,
        SortKey::Comment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Name => "name",
            SortKey::Sem0 => "sem0",
            SortKey::Sem1 => "sem1",
            SortKey::Sem2 => "sem2",
            SortKey::StudentContact => "studentContact",
            SortKey::Comment => "comment",
            SortKey::Unrecognized(raw) => raw,
        }
    }

    pub fn status_column(&self) -> Option<StatusColumn> {
        match self {
            SortKey::Sem0 => Some(StatusColumn::Sem0),
            SortKey::Sem1 => Some(StatusColumn::Sem1),
            SortKey::Sem2 => Some(StatusColumn::Sem2),
            _ => None,
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "name" => SortKey::Name,
            "sem0" => SortKey::Sem0,
            "sem1" => SortKey::Sem1,
            "sem2" => SortKey::Sem2,
            "studentContact" => SortKey::StudentContact,
            "comment" => SortKey::Comment,
            other => SortKey::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort request as it arrives from a query string. Both fields stay raw strings;
/// interpretation happens in [`SortQuery::sort_key`] and [`SortQuery::is_ascending`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascending: Option<String>,
}

impl SortQuery {
    pub fn new(sort_by: impl Into<String>, ascending: impl Into<String>) -> Self {
        Self {
            sort_by: Some(sort_by.into()),
            ascending: Some(ascending.into()),
        }
    }

    /// Decodes `sortBy` and `ascending` from a `key=value&...` string.
    /// The last occurrence of a key wins; other keys are ignored.
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "sortBy" => query.sort_by = Some(value.into_owned()),
                "ascending" => query.ascending = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::from(self.sort_by.as_deref().unwrap_or_default())
    }

    /// Only the literal string `"true"` means ascending.
    pub fn is_ascending(&self) -> bool {
        self.ascending.as_deref() == Some("true")
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
