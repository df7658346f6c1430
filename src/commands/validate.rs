use super::{configured_color_mode, resolve_config};
use crate::config::min_quality_threshold;
use crate::core::Severity;
use crate::errors::Error;
use crate::formatting::{FormattingConfig, Painter};
use crate::io::read_payload;
use crate::pipeline::{analyze_payload, AnalyzedPayload};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct ValidateOptions {
    pub payload: PathBuf,
    pub min_quality: Option<u8>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub score: u8,
    pub minimum: u8,
    pub total_smells: usize,
    pub worst: Option<Severity>,
}

impl ValidationOutcome {
    pub fn from_analysis(analyzed: &AnalyzedPayload, minimum: u8) -> Self {
        Self {
            score: analyzed.summary.quality_score(),
            minimum,
            total_smells: analyzed.report.total_smells,
            worst: analyzed.report.counts_by_severity.highest_present(),
        }
    }

    pub fn passed(&self) -> bool {
        self.score >= self.minimum
    }

    pub fn into_result(self) -> crate::errors::Result<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(Error::QualityGate {
                score: self.score,
                minimum: self.minimum,
            })
        }
    }
}

pub fn validate_payload(options: ValidateOptions) -> Result<ValidationOutcome> {
    let file_config = resolve_config(options.config.as_deref())?;
    let minimum = min_quality_threshold(&file_config, options.min_quality);

    let payload = read_payload(&options.payload)
        .with_context(|| format!("Failed to read payload {}", options.payload.display()))?;
    let analyzed = analyze_payload(&payload).context("Failed to analyze payload")?;
    let outcome = ValidationOutcome::from_analysis(&analyzed, minimum);

    let painter = Painter::new(FormattingConfig::from_env_with(configured_color_mode(
        &file_config,
    )));
    print_status(&painter, &outcome);

    Ok(outcome.into_result()?)
}

fn print_status(painter: &Painter, outcome: &ValidationOutcome) {
    let worst = match outcome.worst {
        Some(severity) => format!(
            ", worst severity {}",
            painter.severity(severity, severity.as_str())
        ),
        None => String::new(),
    };
    println!(
        "Quality score: {}/100 (minimum {}) across {} issues{}",
        painter.score(outcome.score),
        outcome.minimum,
        outcome.total_smells,
        worst
    );

    let (symbol, status) = if outcome.passed() {
        ("✓", painter.bold("PASS"))
    } else {
        ("✗", painter.bold("FAIL"))
    };
    println!("{symbol} Validation: {status}");
}
