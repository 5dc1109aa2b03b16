//! Liquid template synthesis.
//!
//! Emits a Liquid template that narrates a batch of log entries: a size
//! check on the bound collection selects between a single-event narrative
//! and an iterated multiple-events narrative, with one bullet-line
//! placeholder per extracted field in both branches.
//!
//! The emitted syntax must match the preview renderer exactly (`assign`,
//! `if`/`else`/`endif`, `for`/`endfor`, `{{ ... }}` output tags, `.size`).
//!
//! Synthesis is a pure function of its inputs: identical `(fields, title,
//! label)` always produce byte-identical output.

/// Synthesize a narrative template for the given fields.
///
/// `title` is the resolved rule title; `label` is the tenant display string,
/// substituted verbatim into the prose. Infallible for any input — an empty
/// `fields` slice still yields well-formed branch and loop structure, just
/// with zero bullet lines.
pub fn synthesize(fields: &[String], title: &str, label: &str) -> String {
    // Assembled as an ordered list of line fragments, joined once.
    let mut lines: Vec<String> = Vec::new();

    lines.push("{% assign log_entries = logs.log -%}".to_string());
    lines.push("{% if log_entries.size == 1 -%}".to_string());
    lines.push(format!(
        "  {label} has detected {title}. As part of the investigation, {label} observed the following activity:"
    ));
    lines.push(String::new());
    for field in fields {
        // Singular branch dereferences the first (index-0) log entry.
        lines.push(format!(
            "  * **{field}:** `{{{{ log_entries[0].{field} }}}}`"
        ));
    }
    lines.push(String::new());
    lines.push("{% else -%}".to_string());
    lines.push(format!(
        "  {label} has detected {title}. As part of the investigation, {label} observed multiple events:"
    ));
    lines.push(String::new());
    lines.push("  {% for log_entry in log_entries %}".to_string());
    for field in fields {
        // Plural branch dereferences the loop variable.
        lines.push(format!("  * **{field}:** `{{{{ log_entry.{field} }}}}`"));
    }
    lines.push("  {% endfor -%}".to_string());
    lines.push("{% endif -%}".to_string());

    let mut template = lines.join("\n");
    template.push('\n');
    template
}
