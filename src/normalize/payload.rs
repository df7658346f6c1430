//! Container-level parsing of an analysis payload.

use super::{normalize, RawSmellRecord};
use crate::core::SmellRecord;
use crate::errors::{Error, Result};
use serde_json::{Map, Value};

const SMELLS_KEYS: &[&str] = &["smells", "code_smells", "codeSmells"];
const SUMMARY_KEYS: &[&str] = &["summary", "smell_summary", "smellSummary"];
const QUALITY_SCORE_KEYS: &[&str] = &["qualityScore", "quality_score"];
const RECOMMENDATIONS_KEYS: &[&str] = &["recommendations"];

/// Summary fields as supplied by the service, before bounds checking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvidedSummary {
    pub quality_score: Option<f64>,
    pub recommendations: Option<Vec<String>>,
}

/// A payload after per-record normalization, with its summary still raw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAnalysis {
    pub smells: Vec<SmellRecord>,
    pub provided_summary: Option<ProvidedSummary>,
}

fn lookup<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

/// Parse a raw payload object.
///
/// Only the fundamental shape can fail: the payload must be an object, the
/// record list (when present) an array, and each entry an object. A missing
/// record list is an empty analysis.
pub fn normalize_payload(value: &Value) -> Result<RawAnalysis> {
    let object = value.as_object().ok_or_else(|| {
        Error::invalid_payload(format!(
            "expected a JSON object at the top level, found {}",
            json_type_name(value)
        ))
    })?;

    let smells = match lookup(object, SMELLS_KEYS) {
        None => Vec::new(),
        Some(Value::Array(entries)) => normalize_entries(entries)?,
        Some(other) => {
            return Err(Error::invalid_payload(format!(
                "expected the smell list to be an array, found {}",
                json_type_name(other)
            )))
        }
    };

    let provided_summary = lookup(object, SUMMARY_KEYS).and_then(parse_summary);

    tracing::debug!(
        records = smells.len(),
        has_summary = provided_summary.is_some(),
        "Normalized analysis payload"
    );

    Ok(RawAnalysis {
        smells,
        provided_summary,
    })
}

fn normalize_entries(entries: &[Value]) -> Result<Vec<SmellRecord>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .as_object()
                .map(|map| normalize(&RawSmellRecord::from_map(map)))
                .ok_or_else(|| {
                    Error::invalid_payload(format!(
                        "smell record #{index} is {}, expected an object",
                        json_type_name(entry)
                    ))
                })
        })
        .collect()
}

/// A summary that is not an object is treated as absent.
fn parse_summary(value: &Value) -> Option<ProvidedSummary> {
    let Some(object) = value.as_object() else {
        log::warn!(
            "Ignoring summary of type {}; it will be derived",
            json_type_name(value)
        );
        return None;
    };

    let quality_score = lookup(object, QUALITY_SCORE_KEYS)
        .and_then(Value::as_f64)
        .filter(|score| score.is_finite());

    let recommendations = lookup(object, RECOMMENDATIONS_KEYS)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

    Some(ProvidedSummary {
        quality_score,
        recommendations,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
