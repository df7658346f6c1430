//! Dashboard pipeline: raw payload → normalized result → derived view.
//!
//! Split in two stages so the expensive-looking part runs once per payload
//! and the cheap part runs on every filter change:
//!
//! 1. [`analyze_payload`] normalizes records, aggregates the full set and
//!    derives the summary.
//! 2. [`build_view`] filters (and optionally ranks) the visible list. Charts
//!    and summary always describe the full result, not the filtered subset.

use crate::aggregate::{aggregate, AggregateReport};
use crate::core::{AnalysisResult, SmellRecord};
use crate::errors::Result;
use crate::filter::{filter_with_stats, FilterPredicate, FilterStatistics};
use crate::normalize::normalize_payload;
use crate::summary::{derive_summary_from_report, DerivedSummary};
use crate::view::{build_chart_series, rank, take_top, ChartSeries};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info_span};

/// Everything derived from one payload, independent of the current filter.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedPayload {
    pub result: AnalysisResult,
    pub report: AggregateReport,
    pub summary: DerivedSummary,
    pub charts: ChartSeries,
    /// When the payload was analyzed. Views built from it carry this stamp.
    pub analyzed_at: DateTime<Utc>,
}

/// Presentation choices applied on top of an [`AnalyzedPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub predicate: FilterPredicate,
    /// Sort the visible list by severity then line instead of received order.
    pub ranked: bool,
    pub top: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub generated_at: DateTime<Utc>,
    pub options: ViewOptions,
    pub total_smells: usize,
    pub visible: Vec<SmellRecord>,
    pub filter_statistics: FilterStatistics,
    pub report: AggregateReport,
    pub summary: DerivedSummary,
    pub charts: ChartSeries,
}

pub fn analyze_payload(value: &Value) -> Result<AnalyzedPayload> {
    let raw = {
        let _span = info_span!("normalize").entered();
        normalize_payload(value)?
    };

    let report = {
        let _span = info_span!("aggregate").entered();
        aggregate(&raw.smells)
    };
    debug!(
        total = report.total_smells,
        unique_files = report.unique_files,
        "Aggregated smell records"
    );

    let summary = derive_summary_from_report(&report, raw.provided_summary.as_ref());
    debug!(
        quality_score = summary.quality_score(),
        score_source = ?summary.score_source,
        "Derived summary"
    );

    let charts = build_chart_series(&report);

    Ok(AnalyzedPayload {
        result: AnalysisResult {
            smells: raw.smells,
            summary: summary.summary.clone(),
        },
        report,
        summary,
        charts,
        analyzed_at: Utc::now(),
    })
}

pub fn build_view(analyzed: &AnalyzedPayload, options: &ViewOptions) -> DashboardView {
    let _span = info_span!("build_view").entered();

    let outcome = filter_with_stats(&analyzed.result.smells, &options.predicate);
    debug!(
        accepted = outcome.statistics.accepted,
        filtered = outcome.statistics.total_filtered(),
        "Applied filter"
    );

    let ordered = if options.ranked {
        rank(&outcome.records)
    } else {
        outcome.records
    };

    DashboardView {
        generated_at: analyzed.analyzed_at,
        options: options.clone(),
        total_smells: analyzed.result.smells.len(),
        visible: take_top(ordered, options.top),
        filter_statistics: outcome.statistics,
        report: analyzed.report.clone(),
        summary: analyzed.summary.clone(),
        charts: analyzed.charts.clone(),
    }
}

/// Both stages in one call.
pub fn build_dashboard(value: &Value, options: &ViewOptions) -> Result<DashboardView> {
    let analyzed = analyze_payload(value)?;
    Ok(build_view(&analyzed, options))
}
