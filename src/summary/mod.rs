//! Quality score and recommendation derivation.
//!
//! Service-provided values always win. Missing values are filled in by the
//! fallback heuristic in [`quality`] and the canned table in
//! [`recommendations`], and the result records which path was taken.

pub mod quality;
pub mod recommendations;

pub use quality::{
    clamp_provided_score, fallback_quality_score, fallback_quality_score_from_counts,
    severity_penalty,
};
pub use recommendations::{category_tip, derive_recommendations};

use crate::aggregate::{aggregate, AggregateReport};
use crate::core::{SmellRecord, Summary};
use crate::normalize::ProvidedSummary;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Provided,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Provided,
    Derived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSummary {
    #[serde(flatten)]
    pub summary: Summary,
    pub score_source: ScoreSource,
    pub recommendation_source: RecommendationSource,
}

impl DerivedSummary {
    pub fn quality_score(&self) -> u8 {
        self.summary.quality_score
    }

    pub fn recommendations(&self) -> &[String] {
        &self.summary.recommendations
    }

    /// The first `limit` recommendations, for display.
    pub fn top_recommendations(&self, limit: usize) -> &[String] {
        let end = limit.min(self.summary.recommendations.len());
        &self.summary.recommendations[..end]
    }
}

/// Derive the summary for `records`, honoring whatever the service provided.
pub fn derive_summary(
    records: &[SmellRecord],
    provided: Option<&ProvidedSummary>,
) -> DerivedSummary {
    derive_summary_from_report(&aggregate(records), provided)
}

/// As [`derive_summary`], reusing an aggregate computed over the same records.
pub fn derive_summary_from_report(
    report: &AggregateReport,
    provided: Option<&ProvidedSummary>,
) -> DerivedSummary {
    let (quality_score, score_source) = match provided.and_then(|p| p.quality_score) {
        Some(score) => (clamp_provided_score(score), ScoreSource::Provided),
        None => (
            fallback_quality_score_from_counts(&report.counts_by_severity),
            ScoreSource::Fallback,
        ),
    };

    let (recommendations, recommendation_source) = match provided
        .and_then(|p| p.recommendations.as_ref())
        .filter(|r| !r.is_empty())
    {
        Some(list) => (list.clone(), RecommendationSource::Provided),
        None => (derive_recommendations(report), RecommendationSource::Derived),
    };

    DerivedSummary {
        summary: Summary {
            quality_score,
            recommendations,
        },
        score_source,
        recommendation_source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Severity};

    fn sample() -> Vec<SmellRecord> {
        vec![
            SmellRecord {
                severity: Severity::Critical,
                category: Category::Security,
                ..Default::default()
            },
            SmellRecord {
                severity: Severity::Low,
                category: Category::Style,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn absent_summary_uses_fallbacks() {
        let summary = derive_summary(&sample(), None);
        assert_eq!(summary.quality_score(), 84);
        assert_eq!(summary.score_source, ScoreSource::Fallback);
        assert_eq!(summary.recommendation_source, RecommendationSource::Derived);
        assert!(!summary.recommendations().is_empty());
    }

    #[test]
    fn provided_values_pass_through() {
        let provided = ProvidedSummary {
            quality_score: Some(91.0),
            recommendations: Some(vec!["Keep functions short".into()]),
        };
        let summary = derive_summary(&sample(), Some(&provided));
        assert_eq!(summary.quality_score(), 91);
        assert_eq!(summary.recommendations(), ["Keep functions short".to_string()]);
        assert_eq!(summary.score_source, ScoreSource::Provided);
        assert_eq!(summary.recommendation_source, RecommendationSource::Provided);
    }

    #[test]
    fn out_of_range_provided_score_is_clamped() {
        let provided = ProvidedSummary {
            quality_score: Some(250.0),
            recommendations: None,
        };
        assert_eq!(derive_summary(&sample(), Some(&provided)).quality_score(), 100);
    }

    #[test]
    fn empty_provided_recommendations_are_derived() {
        let provided = ProvidedSummary {
            quality_score: None,
            recommendations: Some(vec![]),
        };
        let summary = derive_summary(&sample(), Some(&provided));
        assert_eq!(summary.recommendation_source, RecommendationSource::Derived);
        assert_eq!(summary.score_source, ScoreSource::Fallback);
    }

    #[test]
    fn top_recommendations_caps_at_length() {
        let summary = derive_summary(&sample(), None);
        assert_eq!(summary.top_recommendations(1).len(), 1);
        assert_eq!(
            summary.top_recommendations(50).len(),
            summary.recommendations().len()
        );
    }

    #[test]
    fn summary_serializes_flat() {
        let summary = derive_summary(&[], None);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["qualityScore"], 100);
        assert_eq!(json["scoreSource"], "fallback");
        assert_eq!(json["recommendationSource"], "derived");
    }
}
