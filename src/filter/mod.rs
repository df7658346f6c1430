//! Composable record filtering.
//!
//! A record passes a [`FilterPredicate`] iff every clause admits it. Clauses
//! are evaluated in a fixed order (severity, category, search) and
//! short-circuit, which is also the order [`FilterStatistics`] attributes
//! rejections in.

pub mod predicates;

use crate::core::{Category, Severity, SmellRecord};
use predicates::{matches_category, matches_search, matches_severity};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Either every value or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    #[inline]
    pub fn admits(&self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => *selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl fmt::Display for Selection<Severity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(severity) => write!(f, "{}", severity.as_str()),
        }
    }
}

impl fmt::Display for Selection<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(category) => write!(f, "{}", category.as_str()),
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str("all"),
            Selection::Only(value) => value.serialize(serializer),
        }
    }
}

/// Lower-cased search text, computed once per filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNeedle {
    lowered: String,
}

impl SearchNeedle {
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.lowered)
    }
}

/// The user-driven filter state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPredicate {
    pub severity: Selection<Severity>,
    pub category: Selection<Category>,
    pub search_text: String,
}

impl FilterPredicate {
    /// The predicate that admits every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_severity(mut self, severity: Selection<Severity>) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_category(mut self, category: Selection<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// `all` / `all` / `""`.
    pub fn is_identity(&self) -> bool {
        self.severity.is_all() && self.category.is_all() && self.search_text.is_empty()
    }
}

/// Why records were dropped, attributed to the first failing clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStatistics {
    pub total_processed: usize,
    pub rejected_by_severity: usize,
    pub rejected_by_category: usize,
    pub rejected_by_search: usize,
    pub accepted: usize,
}

impl FilterStatistics {
    pub fn total_filtered(&self) -> usize {
        self.rejected_by_severity + self.rejected_by_category + self.rejected_by_search
    }

    /// Percentage of processed records that passed.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_processed == 0 {
            return 0.0;
        }
        (self.accepted as f64 / self.total_processed as f64) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Accepted,
    RejectedBySeverity,
    RejectedByCategory,
    RejectedBySearch,
}

fn evaluate(record: &SmellRecord, predicate: &FilterPredicate, needle: &SearchNeedle) -> Verdict {
    if !matches_severity(record, predicate.severity) {
        Verdict::RejectedBySeverity
    } else if !matches_category(record, predicate.category) {
        Verdict::RejectedByCategory
    } else if !matches_search(record, needle) {
        Verdict::RejectedBySearch
    } else {
        Verdict::Accepted
    }
}

/// Stable filter: output keeps the relative order of the input.
pub fn filter(records: &[SmellRecord], predicate: &FilterPredicate) -> Vec<SmellRecord> {
    if predicate.is_identity() {
        return records.to_vec();
    }

    let needle = SearchNeedle::new(&predicate.search_text);
    records
        .iter()
        .filter(|record| evaluate(record, predicate, &needle) == Verdict::Accepted)
        .cloned()
        .collect()
}

/// Filtered records together with rejection statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub records: Vec<SmellRecord>,
    pub statistics: FilterStatistics,
}

pub fn filter_with_stats(records: &[SmellRecord], predicate: &FilterPredicate) -> FilterOutcome {
    let needle = SearchNeedle::new(&predicate.search_text);
    let mut statistics = FilterStatistics {
        total_processed: records.len(),
        ..Default::default()
    };
    let mut accepted = Vec::new();

    for record in records {
        match evaluate(record, predicate, &needle) {
            Verdict::Accepted => accepted.push(record.clone()),
            Verdict::RejectedBySeverity => statistics.rejected_by_severity += 1,
            Verdict::RejectedByCategory => statistics.rejected_by_category += 1,
            Verdict::RejectedBySearch => statistics.rejected_by_search += 1,
        }
    }
    statistics.accepted = accepted.len();

    FilterOutcome {
        records: accepted,
        statistics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(smell_type: &str, severity: Severity, category: Category) -> SmellRecord {
        SmellRecord {
            smell_type: smell_type.to_string(),
            description: format!("{smell_type} detected"),
            severity,
            category,
            ..Default::default()
        }
    }

    fn sample() -> Vec<SmellRecord> {
        vec![
            record("SQL Injection", Severity::Critical, Category::Security),
            record("Bad Name", Severity::High, Category::Style),
            record("Nested Loops", Severity::Medium, Category::Performance),
            record("Trailing Space", Severity::High, Category::Style),
        ]
    }

    #[test]
    fn identity_predicate_returns_input() {
        let records = sample();
        assert_eq!(filter(&records, &FilterPredicate::all()), records);
    }

    #[test]
    fn conjunction_requires_every_clause() {
        let item = vec![record("Bad Name", Severity::High, Category::Style)];
        let cases = [
            (Selection::All, Selection::All, true),
            (Selection::Only(Severity::High), Selection::All, true),
            (Selection::All, Selection::Only(Category::Style), true),
            (Selection::Only(Severity::High), Selection::Only(Category::Style), true),
            (Selection::Only(Severity::Low), Selection::Only(Category::Style), false),
            (Selection::Only(Severity::High), Selection::Only(Category::Security), false),
        ];
        for (severity, category, expected) in cases {
            let predicate = FilterPredicate::all()
                .with_severity(severity)
                .with_category(category);
            assert_eq!(
                filter(&item, &predicate).len() == 1,
                expected,
                "severity={severity} category={category}"
            );
        }
    }

    #[test]
    fn filter_preserves_order() {
        let predicate = FilterPredicate::all().with_severity(Selection::Only(Severity::High));
        let names: Vec<_> = filter(&sample(), &predicate)
            .into_iter()
            .map(|r| r.smell_type)
            .collect();
        assert_eq!(names, vec!["Bad Name", "Trailing Space"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let predicate = FilterPredicate::all().with_search("sql");
        let result = filter(&sample(), &predicate);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].smell_type, "SQL Injection");
    }

    #[test]
    fn filter_is_idempotent() {
        let predicate = FilterPredicate::all()
            .with_category(Selection::Only(Category::Style))
            .with_search("name");
        let once = filter(&sample(), &predicate);
        let twice = filter(&once, &predicate);
        assert_eq!(once, twice);
    }

    #[test]
    fn statistics_attribute_first_failing_clause() {
        let predicate = FilterPredicate::all()
            .with_severity(Selection::Only(Severity::High))
            .with_category(Selection::Only(Category::Style))
            .with_search("bad");
        let outcome = filter_with_stats(&sample(), &predicate);
        assert_eq!(
            outcome.statistics,
            FilterStatistics {
                total_processed: 4,
                rejected_by_severity: 2,
                rejected_by_category: 0,
                rejected_by_search: 1,
                accepted: 1,
            }
        );
        assert_eq!(outcome.records, filter(&sample(), &predicate));
        assert_eq!(outcome.statistics.total_filtered(), 3);
        assert_eq!(outcome.statistics.acceptance_rate(), 25.0);
    }

    #[test]
    fn selection_parses_all_and_values() {
        assert_eq!("all".parse::<Selection<Severity>>(), Ok(Selection::All));
        assert_eq!("ALL".parse::<Selection<Category>>(), Ok(Selection::All));
        assert_eq!(
            "critical".parse::<Selection<Severity>>(),
            Ok(Selection::Only(Severity::Critical))
        );
        assert!("bogus".parse::<Selection<Category>>().is_err());
    }

    #[test]
    fn predicate_serializes_with_textual_selections() {
        let predicate = FilterPredicate::all().with_severity(Selection::Only(Severity::High));
        let json = serde_json::to_value(&predicate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"severity": "high", "category": "all", "searchText": ""})
        );
    }
}
