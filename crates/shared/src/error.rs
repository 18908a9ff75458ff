use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("semester must be 0 or 1, got {0}")]
    InvalidSemester(u8),
    #[error("company #{index} ('{company}') has no {attribute}")]
    MissingAttribute {
        index: usize,
        company: String,
        attribute: &'static str,
    },
}
