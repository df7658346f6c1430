use super::taxonomy::{Category, Severity};
use serde::{Deserialize, Serialize};

/// Opaque pass-through key/value pairs attached to a record.
///
/// Insertion order is preserved (`serde_json` is built with
/// `preserve_order`). After normalization every value is a bool, number or
/// string.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

pub const DEFAULT_SMELL_TYPE: &str = "Unknown Issue";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_CONFIDENCE: f64 = 1.0;

/// A canonical, fully-defaulted smell record.
///
/// Deserializing goes through [`normalize`](crate::normalize::normalize), so
/// a record read from JSON holds the same invariants as one built by the
/// normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Map<String, serde_json::Value>")]
pub struct SmellRecord {
    pub smell_type: String,
    pub description: String,
    pub severity: Severity,
    pub category: Category,
    pub line_number: u64,
    pub column: u64,
    pub file_path: String,
    pub suggestion: String,
    pub confidence: f64,
    pub rule_id: String,
    pub metadata: Metadata,
}

impl Default for SmellRecord {
    fn default() -> Self {
        Self {
            smell_type: DEFAULT_SMELL_TYPE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            severity: Severity::Low,
            category: Category::Other,
            line_number: 0,
            column: 0,
            file_path: String::new(),
            suggestion: String::new(),
            confidence: DEFAULT_CONFIDENCE,
            rule_id: String::new(),
            metadata: Metadata::new(),
        }
    }
}

impl SmellRecord {
    pub fn has_suggestion(&self) -> bool {
        !self.suggestion.trim().is_empty()
    }

    /// `file:line` location, or just the line when no file is known.
    pub fn location(&self) -> String {
        if self.file_path.is_empty() {
            format!("line {}", self.line_number)
        } else {
            format!("{}:{}", self.file_path, self.line_number)
        }
    }
}

/// Quality score and recommendations shown alongside the record list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Always within `0..=100`.
    pub quality_score: u8,
    pub recommendations: Vec<String>,
}

/// The canonical result of one analysis request.
///
/// Never mutated after construction; filters and aggregates produce new
/// values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// In the order received from the service.
    pub smells: Vec<SmellRecord>,
    pub summary: Summary,
}
