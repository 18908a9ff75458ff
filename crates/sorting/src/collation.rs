use std::{cmp::Ordering, fmt};

use icu_collator::{Collator, CollatorOptions};
use shared::domain::Company;
use tracing::warn;

/// Locale-aware string ordering for the root locale.
pub struct Collation {
    collator: Option<Collator>,
}

impl Collation {
    pub fn root() -> Self {
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(err) => {
                warn!(error = %err, "root collator unavailable, falling back to code point order");
                Self::code_point()
            }
        }
    }

    pub fn code_point() -> Self {
        Self { collator: None }
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => left.cmp(right),
        }
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale_aware", &self.collator.is_some())
            .finish()
    }
}

/// Orders by name, always ascending, whatever direction the primary sort uses.
pub fn tie_break(collation: &Collation, a: &Company, b: &Company) -> Ordering {
    collation.compare(&a.name, &b.name)
}

#[cfg(test)]
#[path = "tests/collation_tests.rs"]
mod tests;
