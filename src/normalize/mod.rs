//! Raw record → canonical [`SmellRecord`] conversion.
//!
//! The analysis service treats its JSON loosely: fields go missing, carry the
//! wrong type, or use snake_case in one endpoint and camelCase in another.
//! [`normalize`] is a total function over that input. Each field is defaulted
//! on its own, so one bad value never affects its neighbours.

pub mod payload;

pub use payload::{normalize_payload, ProvidedSummary, RawAnalysis};

use crate::core::{
    Category, Metadata, Severity, SmellRecord, DEFAULT_CONFIDENCE, DEFAULT_DESCRIPTION,
    DEFAULT_SMELL_TYPE,
};
use serde_json::{Map, Value};

/// A partially-populated record as received from the service.
///
/// Every field is optional and untyped; `None` and JSON `null` are
/// equivalent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSmellRecord {
    pub smell_type: Option<Value>,
    pub description: Option<Value>,
    pub severity: Option<Value>,
    pub category: Option<Value>,
    pub line_number: Option<Value>,
    pub column: Option<Value>,
    pub file_path: Option<Value>,
    pub suggestion: Option<Value>,
    pub confidence: Option<Value>,
    pub rule_id: Option<Value>,
    pub metadata: Option<Value>,
}

/// Accepted spellings per field, first match wins.
const SMELL_TYPE_KEYS: &[&str] = &["smellType", "smell_type", "type"];
const DESCRIPTION_KEYS: &[&str] = &["description", "message"];
const SEVERITY_KEYS: &[&str] = &["severity"];
const CATEGORY_KEYS: &[&str] = &["category"];
const LINE_KEYS: &[&str] = &["lineNumber", "line_number", "line"];
const COLUMN_KEYS: &[&str] = &["column", "col"];
const FILE_PATH_KEYS: &[&str] = &["filePath", "file_path", "file"];
const SUGGESTION_KEYS: &[&str] = &["suggestion"];
const CONFIDENCE_KEYS: &[&str] = &["confidence"];
const RULE_ID_KEYS: &[&str] = &["ruleId", "rule_id"];
const METADATA_KEYS: &[&str] = &["metadata"];

fn pick(map: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
        .cloned()
}

impl RawSmellRecord {
    /// Build from a JSON object, accepting both camelCase and snake_case keys.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            smell_type: pick(map, SMELL_TYPE_KEYS),
            description: pick(map, DESCRIPTION_KEYS),
            severity: pick(map, SEVERITY_KEYS),
            category: pick(map, CATEGORY_KEYS),
            line_number: pick(map, LINE_KEYS),
            column: pick(map, COLUMN_KEYS),
            file_path: pick(map, FILE_PATH_KEYS),
            suggestion: pick(map, SUGGESTION_KEYS),
            confidence: pick(map, CONFIDENCE_KEYS),
            rule_id: pick(map, RULE_ID_KEYS),
            metadata: pick(map, METADATA_KEYS),
        }
    }

    /// Build from any JSON value; non-objects are treated as `{}`.
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_map).unwrap_or_default()
    }
}

/// Normalize a raw record into a canonical one. Never fails.
pub fn normalize(raw: &RawSmellRecord) -> SmellRecord {
    SmellRecord {
        smell_type: normalize_text(raw.smell_type.as_ref(), DEFAULT_SMELL_TYPE),
        description: normalize_text(raw.description.as_ref(), DEFAULT_DESCRIPTION),
        severity: normalize_severity(raw.severity.as_ref()),
        category: normalize_category(raw.category.as_ref()),
        line_number: normalize_position(raw.line_number.as_ref()),
        column: normalize_position(raw.column.as_ref()),
        file_path: normalize_optional_text(raw.file_path.as_ref()),
        suggestion: normalize_optional_text(raw.suggestion.as_ref()),
        confidence: normalize_confidence(raw.confidence.as_ref()),
        rule_id: normalize_optional_text(raw.rule_id.as_ref()),
        metadata: normalize_metadata(raw.metadata.as_ref()),
    }
}

impl From<Map<String, Value>> for SmellRecord {
    fn from(map: Map<String, Value>) -> Self {
        normalize(&RawSmellRecord::from_map(&map))
    }
}

/// Required text: non-strings and blank strings take the default.
pub fn normalize_text(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Optional text: non-strings become empty.
pub fn normalize_optional_text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn normalize_severity(value: Option<&Value>) -> Severity {
    value
        .and_then(Value::as_str)
        .map(Severity::from_lossy)
        .unwrap_or(Severity::Low)
}

pub fn normalize_category(value: Option<&Value>) -> Category {
    value
        .and_then(Value::as_str)
        .map(Category::from_lossy)
        .unwrap_or(Category::Other)
}

/// Line or column: negative clamps to 0, fractions floor, non-numbers are 0.
pub fn normalize_position(value: Option<&Value>) -> u64 {
    let Some(Value::Number(number)) = value else {
        return 0;
    };

    if let Some(unsigned) = number.as_u64() {
        return unsigned;
    }
    if number.as_i64().is_some() {
        // Representable as i64 but not u64: negative.
        return 0;
    }
    match number.as_f64() {
        Some(float) if float.is_finite() && float > 0.0 => float.floor() as u64,
        _ => 0,
    }
}

/// Confidence in `[0, 1]`: out-of-range clamps, non-numeric is `1.0`.
pub fn normalize_confidence(value: Option<&Value>) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(confidence) if confidence.is_nan() => DEFAULT_CONFIDENCE,
        Some(confidence) => confidence.clamp(0.0, 1.0),
        None => DEFAULT_CONFIDENCE,
    }
}

/// Keep primitive metadata values in their original order.
///
/// `null` entries are dropped; nested arrays and objects are flattened to
/// their compact JSON text. A non-object metadata value yields an empty map.
pub fn normalize_metadata(value: Option<&Value>) -> Metadata {
    let Some(Value::Object(entries)) = value else {
        return Metadata::new();
    };

    entries
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Some((key.clone(), value.clone()))
            }
            Value::Array(_) | Value::Object(_) => {
                Some((key.clone(), Value::String(value.to_string())))
            }
        })
        .collect()
}
