// Export modules for library usage
pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod filter;
pub mod formatting;
pub mod io;
pub mod normalize;
pub mod observability;
pub mod pipeline;
pub mod session;
pub mod summary;
pub mod view;

// Re-export commonly used types
pub use crate::core::{AnalysisResult, Category, Metadata, Severity, SmellRecord, Summary};

pub use crate::errors::{Error, Result};

pub use crate::normalize::{normalize, normalize_payload, ProvidedSummary, RawAnalysis, RawSmellRecord};

pub use crate::aggregate::{aggregate, AggregateReport, ConfidenceBucket, SeverityCounts, TypeCount};

pub use crate::filter::{
    filter, filter_with_stats, FilterOutcome, FilterPredicate, FilterStatistics, Selection,
};

pub use crate::summary::{
    derive_summary, derive_summary_from_report, fallback_quality_score, DerivedSummary,
    RecommendationSource, ScoreSource,
};

pub use crate::view::{build_chart_series, rank, ChartSeries, SeriesEntry};

pub use crate::pipeline::{
    analyze_payload, build_dashboard, build_view, AnalyzedPayload, DashboardView, ViewOptions,
};

pub use crate::session::{AnalysisSession, Completion, RequestTicket};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
