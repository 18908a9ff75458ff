use std::cmp::Ordering;

use shared::{
    domain::{CalendarAnchor, Company},
    error::RosterError,
    query::{SortKey, SortQuery},
};
use tracing::{debug, trace};

use crate::{
    attribute::{by_attribute, compare_attribute, Attribute},
    collation::Collation,
    term::{by_contact_status, compare_contact_status, Term},
};

/// What a sort key orders by, before a direction is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    Attribute(Attribute),
    ContactStatus(Term),
}

impl SortStrategy {
    pub fn comparator(self, ascending: bool) -> RosterComparator {
        RosterComparator {
            strategy: self,
            ascending,
        }
    }
}

/// Strategy for a recognized key, `None` for anything else.
pub fn strategy_for(key: &SortKey, anchor: CalendarAnchor) -> Option<SortStrategy> {
    let strategy = match key {
        SortKey::Name => by_attribute(Attribute::Name),
        SortKey::StudentContact => by_attribute(Attribute::StudentContact),
        SortKey::Comment => by_attribute(Attribute::AdminComment),
        SortKey::Sem0 | SortKey::Sem1 | SortKey::Sem2 => {
            by_contact_status(key.status_column()?, anchor)
        }
        SortKey::Unrecognized(_) => return None,
    };
    Some(strategy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterComparator {
    strategy: SortStrategy,
    ascending: bool,
}

impl RosterComparator {
    /// Unrecognized keys ignore the requested direction and order by name, ascending.
    pub fn for_query(query: &SortQuery, anchor: CalendarAnchor) -> Self {
        let key = query.sort_key();
        match strategy_for(&key, anchor) {
            Some(strategy) => strategy.comparator(query.is_ascending()),
            None => {
                debug!(sort_by = %key, "unrecognized sort key, ordering by name ascending");
                by_attribute(Attribute::Name).comparator(true)
            }
        }
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn compare(&self, collation: &Collation, a: &Company, b: &Company) -> Ordering {
        match self.strategy {
            SortStrategy::Attribute(attribute) => {
                compare_attribute(collation, attribute, self.ascending, a, b)
            }
            SortStrategy::ContactStatus(term) => {
                compare_contact_status(collation, term, self.ascending, a, b)
            }
        }
    }

    pub fn sort(&self, collation: &Collation, companies: &mut [Company]) {
        companies.sort_by(|a, b| self.compare(collation, a, b));
    }
}

/// Reorders `companies` in place and hands the same slice back.
pub fn sort_companies<'a>(
    companies: &'a mut [Company],
    query: &SortQuery,
    anchor: CalendarAnchor,
) -> &'a mut [Company] {
    let comparator = RosterComparator::for_query(query, anchor);
    trace!(
        strategy = ?comparator.strategy(),
        ascending = comparator.ascending(),
        companies = companies.len(),
        "sorting roster"
    );
    comparator.sort(&Collation::root(), companies);
    companies
}

pub fn sorted_companies(
    companies: &[Company],
    query: &SortQuery,
    anchor: CalendarAnchor,
) -> Vec<Company> {
    let mut sorted = companies.to_vec();
    sort_companies(&mut sorted, query, anchor);
    sorted
}

/// Like [`sort_companies`], but rejects rosters missing the attribute the key reads.
/// The slice is left untouched on error.
pub fn try_sort_companies<'a>(
    companies: &'a mut [Company],
    query: &SortQuery,
    anchor: CalendarAnchor,
) -> Result<&'a mut [Company], RosterError> {
    let comparator = RosterComparator::for_query(query, anchor);
    if let SortStrategy::Attribute(attribute) = comparator.strategy() {
        ensure_attribute_present(companies, attribute)?;
    }
    comparator.sort(&Collation::root(), companies);
    Ok(companies)
}

fn ensure_attribute_present(companies: &[Company], attribute: Attribute) -> Result<(), RosterError> {
    match companies
        .iter()
        .enumerate()
        .find(|(_, company)| attribute.sort_text(company).is_none())
    {
        Some((index, company)) => Err(RosterError::MissingAttribute {
            index,
            company: company.name.clone(),
            attribute: attribute.field_name(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
