//! Full-field narrative expander.
//!
//! An alternate generation mode: instead of emitting a placeholder template,
//! expand every scalar field present on each record into final
//! human-readable text. Exposed only behind an explicit caller request —
//! never merged with the placeholder-template pipeline in `template`.

use serde_json::{Map, Value};

use crate::rule::{records, resolve_title};

/// Record keys already surfaced in the narrative preamble.
const SUMMARIZED_KEYS: [&str; 2] = ["title", "runbook"];

/// Expand a document's records into a finished narrative.
///
/// Every scalar field of each record becomes a bullet line; values that are
/// themselves mappings or sequences are skipped, except for a `detection`
/// mapping, which is rendered recursively as a labeled sub-list.
pub fn expand(doc: &Value, label: &str) -> String {
    let title = resolve_title(doc);
    let recs = records(doc);

    let mut lines: Vec<String> = Vec::new();
    if recs.len() == 1 {
        lines.push(format!(
            "{label} has detected {title}. As part of the investigation, {label} observed the following activity:"
        ));
    } else {
        lines.push(format!(
            "{label} has detected {title}. As part of the investigation, {label} observed multiple events:"
        ));
    }

    for record in recs {
        if let Some(fields) = record.as_object() {
            lines.push(String::new());
            expand_record(fields, &mut lines);
        }
    }

    let mut narrative = lines.join("\n");
    narrative.push('\n');
    narrative
}

fn expand_record(fields: &Map<String, Value>, lines: &mut Vec<String>) {
    for (key, value) in fields {
        if SUMMARIZED_KEYS.contains(&key.as_str()) {
            continue;
        }
        if key == "detection" {
            if let Some(detection) = value.as_object() {
                lines.push(format!("  * **{key}:**"));
                expand_detection(detection, lines);
            }
            continue;
        }
        if let Some(text) = scalar_text(value) {
            lines.push(format!("  * **{key}:** `{text}`"));
        }
    }
}

/// Render a `detection` mapping recursively: mapping-valued entries become a
/// labeled sub-list of field:criteria pairs, sequence-valued entries a
/// comma-joined back-quoted list, scalar entries a single back-quoted line.
fn expand_detection(detection: &Map<String, Value>, lines: &mut Vec<String>) {
    for (name, value) in detection {
        match value {
            Value::Object(section) => {
                lines.push(format!("    * {name}:"));
                for (field, criteria) in section {
                    lines.push(format!("      * {field}: `{}`", value_text(criteria)));
                }
            }
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(|v| format!("`{}`", value_text(v)))
                    .collect::<Vec<_>>()
                    .join(", ");
                lines.push(format!("    * {name}: {joined}"));
            }
            scalar => {
                lines.push(format!("    * {name}: `{}`", value_text(scalar)));
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Object(_) | Value::Array(_) => None,
        other => Some(value_text(other)),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
