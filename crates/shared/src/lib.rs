//! Roster records and the query shape shared by the sorting engine and its callers.

pub mod domain;
pub mod error;
pub mod query;
