//! Rule-document loading, normalization, and title resolution.
//!
//! A rule document is either a single detection-rule record (a JSON object)
//! or an ordered array of such records. All downstream operations work on
//! the first record only — the narrative generator only ever narrates the
//! first record's rule layout against an arbitrary number of log entries.
//!
//! Parsing is deliberately permissive: a recognizable-but-imperfect document
//! degrades (empty record, `"Untitled"` title) rather than failing.

use std::path::Path;

use serde_json::Value;

use crate::error::{GenError, Result};

/// Title used when no record supplies one.
pub const UNTITLED: &str = "Untitled";

/// Parse a rule document from text.
///
/// Tries JSON first, then YAML (Sigma rules commonly arrive as YAML; the
/// YAML structure is converted to the JSON data model so the extractors see
/// a single shape). When both fail, the JSON error is reported since JSON is
/// the primary upload format.
pub fn parse_document(text: &str) -> Result<Value> {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(v) => v,
        Err(json_err) => match serde_yaml::from_str::<Value>(text) {
            Ok(v) => v,
            Err(_) => return Err(GenError::Json(json_err)),
        },
    };

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(GenError::UnsupportedDocument(format!(
            "expected an object or an array of records, got {}",
            type_name(&other)
        ))),
    }
}

/// Parse a rule document from a file path.
pub fn parse_document_file(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)?;
    parse_document(&text)
}

/// Normalize a document to its first record.
///
/// A single object is treated as a one-element sequence; records after the
/// first are ignored. Returns `None` for an empty array or a non-record
/// document.
pub fn first_record(doc: &Value) -> Option<&Value> {
    match doc {
        Value::Array(records) => records.first(),
        Value::Object(_) => Some(doc),
        _ => None,
    }
}

/// View a document as a slice of records.
pub fn records(doc: &Value) -> &[Value] {
    match doc {
        Value::Array(items) => items.as_slice(),
        Value::Object(_) => std::slice::from_ref(doc),
        _ => &[],
    }
}

/// Resolve the narrative title for a document.
///
/// Precedence: the first record's `runbook.title`, then its `title`, then
/// the literal `"Untitled"`. Total — an empty or malformed document resolves
/// to `"Untitled"`.
pub fn resolve_title(doc: &Value) -> String {
    let Some(record) = first_record(doc) else {
        return UNTITLED.to_string();
    };

    if let Some(title) = record
        .get("runbook")
        .and_then(|r| r.get("title"))
        .and_then(Value::as_str)
    {
        return title.to_string();
    }

    record
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(UNTITLED)
        .to_string()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
