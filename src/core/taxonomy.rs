//! Closed severity and category enumerations.
//!
//! Both enumerations are total over arbitrary input: [`Severity::from_lossy`]
//! and [`Category::from_lossy`] never fail, they fall back to
//! [`Severity::Low`] and [`Category::Other`] respectively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal urgency of a smell record.
///
/// Ordering follows urgency (`Low < Medium < High < Critical`). The canonical
/// display order used by reports and charts is the reverse, see
/// [`Severity::CANONICAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Canonical order: most urgent first.
    pub const CANONICAL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Human-readable label for reports and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Position in [`Severity::CANONICAL`].
    pub fn canonical_index(&self) -> usize {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    /// Parse a severity, case-insensitively, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }

    /// Total conversion: anything unrecognized is `Low`.
    pub fn from_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or(Severity::Low)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("unknown severity '{s}' (expected critical, high, medium or low)")
        })
    }
}

/// Topical classification of a smell record.
///
/// Declaration order is the canonical order, so the derived `Ord` can key
/// ordered maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Security,
    Performance,
    Maintainability,
    Complexity,
    Style,
    Other,
}

impl Category {
    pub const CANONICAL: [Category; 6] = [
        Category::Security,
        Category::Performance,
        Category::Maintainability,
        Category::Complexity,
        Category::Style,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Maintainability => "maintainability",
            Category::Complexity => "complexity",
            Category::Style => "style",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Security => "Security",
            Category::Performance => "Performance",
            Category::Maintainability => "Maintainability",
            Category::Complexity => "Complexity",
            Category::Style => "Style",
            Category::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "security" => Some(Category::Security),
            "performance" => Some(Category::Performance),
            "maintainability" => Some(Category::Maintainability),
            "complexity" => Some(Category::Complexity),
            "style" => Some(Category::Style),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Total conversion: anything unrecognized is `Other`.
    pub fn from_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown category '{s}' (expected security, performance, maintainability, complexity, style or other)"
            )
        })
    }
}
