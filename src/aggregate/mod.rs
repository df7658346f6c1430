//! Counts and histograms over a collection of canonical records.
//!
//! Every output here is deterministic for a fixed input sequence: maps are
//! either fixed-order ([`SeverityCounts`]) or keyed by the canonical
//! category order, and per-type counts are explicitly sorted.

pub mod histogram;

pub use histogram::{bucket_label, bucket_lower_bound, confidence_histogram, ConfidenceBucket};

use crate::core::{Category, Severity, SmellRecord};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Count per severity. All four levels are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    counts: [usize; 4],
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        self.counts[severity.canonical_index()]
    }

    fn increment(&mut self, severity: Severity) {
        self.counts[severity.canonical_index()] += 1;
    }

    /// `(severity, count)` pairs in canonical order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        Severity::CANONICAL
            .iter()
            .map(move |severity| (*severity, self.get(*severity)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Most urgent severity with a non-zero count.
    pub fn highest_present(&self) -> Option<Severity> {
        self.iter().find(|(_, count)| *count > 0).map(|(s, _)| s)
    }
}

impl Serialize for SeverityCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Severity::CANONICAL.len()))?;
        for (severity, count) in self.iter() {
            map.serialize_entry(severity.as_str(), &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub smell_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub total_smells: usize,
    /// Distinct non-empty file paths.
    pub unique_files: usize,
    pub counts_by_severity: SeverityCounts,
    /// Sparse: only categories present in the input, canonical order.
    pub counts_by_category: BTreeMap<Category, usize>,
    pub confidence_histogram: Vec<ConfidenceBucket>,
    /// Sorted by count descending, then smell type ascending.
    pub counts_by_type: Vec<TypeCount>,
}

impl AggregateReport {
    /// Category with the highest count; ties go to the earlier canonical one.
    pub fn dominant_category(&self) -> Option<Category> {
        self.categories_by_count().into_iter().next()
    }

    /// Present categories ordered by count descending, canonical order on ties.
    pub fn categories_by_count(&self) -> Vec<Category> {
        let mut categories: Vec<_> = self.counts_by_category.iter().collect();
        // Stable sort keeps the BTreeMap's canonical order for equal counts.
        categories.sort_by(|a, b| b.1.cmp(a.1));
        categories.into_iter().map(|(c, _)| *c).collect()
    }
}

pub fn aggregate(records: &[SmellRecord]) -> AggregateReport {
    let mut counts_by_severity = SeverityCounts::default();
    let mut counts_by_category = BTreeMap::new();
    let mut type_counts: HashMap<&str, usize> = HashMap::new();
    let mut files = BTreeSet::new();

    for record in records {
        counts_by_severity.increment(record.severity);
        *counts_by_category.entry(record.category).or_insert(0) += 1;
        *type_counts.entry(record.smell_type.as_str()).or_insert(0) += 1;
        if !record.file_path.is_empty() {
            files.insert(record.file_path.as_str());
        }
    }

    AggregateReport {
        total_smells: records.len(),
        unique_files: files.len(),
        counts_by_severity,
        counts_by_category,
        confidence_histogram: confidence_histogram(records),
        counts_by_type: sort_type_counts(type_counts),
    }
}

fn sort_type_counts(type_counts: HashMap<&str, usize>) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = type_counts
        .into_iter()
        .map(|(smell_type, count)| TypeCount {
            smell_type: smell_type.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.smell_type.cmp(&b.smell_type))
    });
    counts
}
