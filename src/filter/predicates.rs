//! Pure predicate functions for filtering smell records.
//!
//! Each predicate checks one clause of a [`FilterPredicate`](super::FilterPredicate)
//! and is a pure function of the record and the clause.
//!
//! # Design Principles
//!
//! - **Pure functions**: No side effects, deterministic output
//! - **Single responsibility**: Each predicate checks one thing
//! - **Composability**: The engine combines them with logical AND
//!
//! # Examples
//!
//! ```
//! use smelldash::core::{Severity, SmellRecord};
//! use smelldash::filter::predicates::*;
//! use smelldash::filter::Selection;
//!
//! let record = SmellRecord { severity: Severity::High, ..Default::default() };
//!
//! assert!(matches_severity(&record, Selection::All));
//! assert!(matches_severity(&record, Selection::Only(Severity::High)));
//! assert!(!matches_severity(&record, Selection::Only(Severity::Low)));
//! ```

use super::{SearchNeedle, Selection};
use crate::core::{Category, Severity, SmellRecord};

/// Severity clause: `All` or an exact match.
#[inline]
pub fn matches_severity(record: &SmellRecord, selection: Selection<Severity>) -> bool {
    selection.admits(record.severity)
}

/// Category clause: `All` or an exact match.
#[inline]
pub fn matches_category(record: &SmellRecord, selection: Selection<Category>) -> bool {
    selection.admits(record.category)
}

/// Search clause: empty needle, or a case-insensitive substring of the
/// description or the smell type.
///
/// ```
/// use smelldash::core::SmellRecord;
/// use smelldash::filter::predicates::matches_search;
/// use smelldash::filter::SearchNeedle;
///
/// let record = SmellRecord {
///     smell_type: "Long Method".into(),
///     description: "Function 'process' has 80 lines".into(),
///     ..Default::default()
/// };
///
/// assert!(matches_search(&record, &SearchNeedle::new("long")));
/// assert!(matches_search(&record, &SearchNeedle::new("PROCESS")));
/// assert!(!matches_search(&record, &SearchNeedle::new("sql")));
/// ```
#[inline]
pub fn matches_search(record: &SmellRecord, needle: &SearchNeedle) -> bool {
    needle.is_empty()
        || needle.found_in(&record.description)
        || needle.found_in(&record.smell_type)
}
