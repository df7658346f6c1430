//! Confidence decile histogram.

use crate::core::SmellRecord;
use serde::Serialize;

/// Width of one bucket in percentage points.
pub const BUCKET_WIDTH: u8 = 10;
/// Lower bound of the top bucket, which is closed on both ends.
pub const TOP_BUCKET: u8 = 90;

/// Guards against `0.3 * 100.0 == 29.999…` style representation error.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBucket {
    pub lower_bound: u8,
    pub bucket_label: String,
    pub count: usize,
}

impl ConfidenceBucket {
    pub fn new(lower_bound: u8, count: usize) -> Self {
        Self {
            lower_bound,
            bucket_label: bucket_label(lower_bound),
            count,
        }
    }
}

/// `floor(confidence * 100 / 10) * 10`, with `1.0` folded into the top bucket.
pub fn bucket_lower_bound(confidence: f64) -> u8 {
    let percent = confidence.clamp(0.0, 1.0) * 100.0;
    let decile = ((percent + EPSILON) / f64::from(BUCKET_WIDTH)).floor();
    let lower = decile * f64::from(BUCKET_WIDTH);
    lower.min(f64::from(TOP_BUCKET)) as u8
}

/// `[30,40)` for ordinary buckets, `[90,100]` for the inclusive top bucket.
pub fn bucket_label(lower_bound: u8) -> String {
    if lower_bound >= TOP_BUCKET {
        format!("[{TOP_BUCKET},100]")
    } else {
        format!("[{},{})", lower_bound, lower_bound + BUCKET_WIDTH)
    }
}

/// Non-empty buckets in ascending order of lower bound.
pub fn confidence_histogram(records: &[SmellRecord]) -> Vec<ConfidenceBucket> {
    let mut counts = [0usize; 10];
    for record in records {
        let index = usize::from(bucket_lower_bound(record.confidence) / BUCKET_WIDTH);
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(index, count)| ConfidenceBucket::new(index as u8 * BUCKET_WIDTH, *count))
        .collect()
}
