//! Quality score: pass-through of the service's score, or a client-side
//! fallback heuristic when the service omits it.
//!
//! The fallback is a heuristic, not the service's scoring algorithm.

use crate::aggregate::SeverityCounts;
use crate::core::{Severity, SmellRecord};

pub const MAX_QUALITY_SCORE: u8 = 100;

/// Points deducted per record of the given severity by the fallback heuristic.
pub const fn severity_penalty(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => 15,
        Severity::High => 8,
        Severity::Medium => 4,
        Severity::Low => 1,
    }
}

/// Bounds-check a score supplied by the service: round to the nearest
/// integer, clamp to `[0, 100]`.
pub fn clamp_provided_score(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, f64::from(MAX_QUALITY_SCORE)) as u8
}

/// `100 - Σ penalty`, floored at zero.
pub fn fallback_quality_score(records: &[SmellRecord]) -> u8 {
    let penalty: u32 = records
        .iter()
        .map(|record| severity_penalty(record.severity))
        .sum();
    u32::from(MAX_QUALITY_SCORE).saturating_sub(penalty) as u8
}

/// Same heuristic computed from already-aggregated counts.
pub fn fallback_quality_score_from_counts(counts: &SeverityCounts) -> u8 {
    let penalty: u64 = counts
        .iter()
        .map(|(severity, count)| u64::from(severity_penalty(severity)) * count as u64)
        .sum();
    u64::from(MAX_QUALITY_SCORE).saturating_sub(penalty) as u8
}
