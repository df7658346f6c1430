//! Render-ready chart series.
//!
//! Pure shape, label and color assembly over an [`AggregateReport`]; nothing
//! here recomputes counts.

pub mod palette;
pub mod ranking;

pub use palette::{category_color, category_color_for_label, severity_color};
pub use ranking::{rank, take_top};

use crate::aggregate::AggregateReport;
use crate::core::Severity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesEntry {
    pub label: String,
    pub value: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Always four entries in canonical order, zeros kept.
    pub severity_series: Vec<SeriesEntry>,
    pub category_series: Vec<SeriesEntry>,
    pub confidence_series: Vec<LabeledValue>,
}

pub fn build_chart_series(report: &AggregateReport) -> ChartSeries {
    ChartSeries {
        severity_series: severity_series(report),
        category_series: category_series(report),
        confidence_series: confidence_series(report),
    }
}

fn severity_series(report: &AggregateReport) -> Vec<SeriesEntry> {
    Severity::CANONICAL
        .iter()
        .map(|severity| SeriesEntry {
            label: severity.label().to_string(),
            value: report.counts_by_severity.get(*severity),
            color: severity_color(*severity).to_string(),
        })
        .collect()
}

fn category_series(report: &AggregateReport) -> Vec<SeriesEntry> {
    report
        .counts_by_category
        .iter()
        .map(|(category, count)| SeriesEntry {
            label: category.label().to_string(),
            value: *count,
            color: category_color(*category).to_string(),
        })
        .collect()
}

fn confidence_series(report: &AggregateReport) -> Vec<LabeledValue> {
    report
        .confidence_histogram
        .iter()
        .map(|bucket| LabeledValue {
            label: bucket.bucket_label.clone(),
            value: bucket.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::core::{Category, SmellRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_report_still_has_four_severity_entries() {
        let series = build_chart_series(&aggregate(&[]));
        let labels: Vec<_> = series
            .severity_series
            .iter()
            .map(|e| (e.label.as_str(), e.value))
            .collect();
        assert_eq!(
            labels,
            vec![("Critical", 0), ("High", 0), ("Medium", 0), ("Low", 0)]
        );
        assert!(series.category_series.is_empty());
        assert!(series.confidence_series.is_empty());
    }

    #[test]
    fn series_use_fixed_colors() {
        let report = aggregate(&[SmellRecord {
            severity: Severity::Critical,
            category: Category::Performance,
            confidence: 0.5,
            ..Default::default()
        }]);
        let series = build_chart_series(&report);
        assert_eq!(series.severity_series[0].color, severity_color(Severity::Critical));
        assert_eq!(
            series.category_series,
            vec![SeriesEntry {
                label: "Performance".into(),
                value: 1,
                color: category_color(Category::Performance).into(),
            }]
        );
        assert_eq!(
            series.confidence_series,
            vec![LabeledValue {
                label: "[50,60)".into(),
                value: 1,
            }]
        );
    }

    #[test]
    fn series_mirror_the_report_without_recomputing() {
        let mut report = aggregate(&[]);
        // A report built elsewhere is taken at face value.
        report.counts_by_category.insert(Category::Style, 7);
        let series = build_chart_series(&report);
        assert_eq!(series.category_series[0].value, 7);
    }
}
