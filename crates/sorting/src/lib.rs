//! Orders a company roster for table display by a static attribute or by the
//! contact status of one of three consecutive semesters.

pub mod attribute;
pub mod collation;
pub mod dispatch;
pub mod term;

pub use attribute::{by_attribute, Attribute};
pub use collation::{tie_break, Collation};
pub use dispatch::{
    sort_companies, sorted_companies, strategy_for, try_sort_companies, RosterComparator,
    SortStrategy,
};
pub use term::{by_contact_status, resolve_term, status_for, Term, NO_STATUS};
