//! Ranked views over a record collection.
//!
//! These produce new sequences; the input order is never changed in place.

use crate::core::SmellRecord;
use std::cmp::Reverse;

/// Most urgent first, then by line number. Stable for equal keys.
pub fn rank(records: &[SmellRecord]) -> Vec<SmellRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|record| (Reverse(record.severity), record.line_number));
    ranked
}

/// The first `limit` records, or all of them when `limit` is `None`.
pub fn take_top(records: Vec<SmellRecord>, limit: Option<usize>) -> Vec<SmellRecord> {
    match limit {
        Some(n) => records.into_iter().take(n).collect(),
        None => records,
    }
}
