//! Field extraction strategies.
//!
//! Two mutually exclusive strategies, selected by sniffing the shape of the
//! first record:
//!
//! - [`SelectionMapExtractor`]: the record carries a Sigma-style `detection`
//!   mapping of named selection sections. Every key of every mapping-valued
//!   section is a log field.
//! - [`RuleStringExtractor`]: the record carries a flat rule string under
//!   `detection_rule.rule` (or a top-level `rule`) of the form
//!   `field1:value1 AND field2:value2`.
//!
//! Both strategies share the same invariants: field names are unique, keep
//! first-seen order, and underscore-prefixed names are dropped (internal
//! meta fields). Extraction never fails — malformed shapes degrade to the
//! fixed fallback pair so synthesis always has at least one placeholder.

use serde_json::Value;

use crate::rule::first_record;

/// Fields used whenever a rule yields nothing extractable.
pub const FALLBACK_FIELDS: [&str; 2] = ["EventType", "TargetObject"];

/// The reserved `detection` key that combines selection sections.
const CONDITION_KEY: &str = "condition";

/// Derives the ordered list of log fields a detection rule references.
pub trait FieldExtractor {
    fn extract(&self, doc: &Value) -> Vec<String>;
}

/// Extracts fields from a Sigma-style `detection` mapping.
#[derive(Debug, Default)]
pub struct SelectionMapExtractor;

impl FieldExtractor for SelectionMapExtractor {
    fn extract(&self, doc: &Value) -> Vec<String> {
        let mut fields = Vec::new();

        let detection = first_record(doc)
            .and_then(|record| record.get("detection"))
            .and_then(Value::as_object);

        if let Some(detection) = detection {
            for (section, value) in detection {
                if section == CONDITION_KEY {
                    continue;
                }
                // Only mapping-valued sections name fields; list- and
                // scalar-valued sections (keyword detections) do not.
                if let Some(section_map) = value.as_object() {
                    for field in section_map.keys() {
                        push_field(&mut fields, field);
                    }
                }
            }
        }

        with_fallback(fields)
    }
}

/// Extracts fields from a flat `field:value AND field:value` rule string.
#[derive(Debug, Default)]
pub struct RuleStringExtractor;

impl FieldExtractor for RuleStringExtractor {
    fn extract(&self, doc: &Value) -> Vec<String> {
        let mut fields = Vec::new();

        if let Some(rule) = first_record(doc).and_then(rule_string) {
            for clause in rule.split("AND") {
                // Field name is everything before the first colon; clauses
                // without a colon are skipped.
                if let Some((name, _)) = clause.split_once(':') {
                    push_field(&mut fields, name);
                }
            }
        }

        with_fallback(fields)
    }
}

/// Pick the strategy matching the document's shape and run it.
///
/// A record with a mapping `detection` uses [`SelectionMapExtractor`]; a
/// record with a string rule uses [`RuleStringExtractor`]; anything else
/// returns the fallback pair.
pub fn extract_fields(doc: &Value) -> Vec<String> {
    match first_record(doc) {
        Some(record) if record.get("detection").is_some_and(Value::is_object) => {
            SelectionMapExtractor.extract(doc)
        }
        Some(record) if rule_string(record).is_some() => RuleStringExtractor.extract(doc),
        _ => with_fallback(Vec::new()),
    }
}

/// The flat rule string lives under `detection_rule.rule` in uploaded
/// documents, or directly under `rule`.
fn rule_string(record: &Value) -> Option<&str> {
    record
        .get("detection_rule")
        .and_then(|d| d.get("rule"))
        .and_then(Value::as_str)
        .or_else(|| record.get("rule").and_then(Value::as_str))
}

fn push_field(fields: &mut Vec<String>, name: &str) {
    let name = name.trim();
    if name.is_empty() || name.starts_with('_') {
        return;
    }
    if !fields.iter().any(|f| f == name) {
        fields.push(name.to_string());
    }
}

fn with_fallback(fields: Vec<String>) -> Vec<String> {
    if fields.is_empty() {
        FALLBACK_FIELDS.iter().map(|s| s.to_string()).collect()
    } else {
        fields
    }
}
