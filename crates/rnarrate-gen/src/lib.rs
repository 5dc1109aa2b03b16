//! # rnarrate-gen
//!
//! Generate parameterized Liquid narrative templates from Sigma-style
//! detection-rule documents.
//!
//! Given a rule document (JSON or YAML), this crate:
//!
//! - **Extracts fields**: the ordered, de-duplicated list of log fields the
//!   rule's `detection` sections reference (or, for legacy documents, the
//!   fields named by a flat `field:value AND ...` rule string).
//! - **Synthesizes a template**: Liquid text that branches between a
//!   single-event and a multiple-events narrative, with one placeholder
//!   bullet per field and a tenant label woven into the prose.
//! - **Expands narratives** (alternate mode): renders every scalar record
//!   field directly into final text, no placeholders.
//!
//! Extraction and synthesis are pure, deterministic, and permissive: a
//! malformed document degrades to fallback fields and an `"Untitled"` title
//! rather than failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use rnarrate_gen::{extract_fields, resolve_title, synthesize};
//! use serde_json::json;
//!
//! let doc = json!([{
//!     "title": "Suspicious Login",
//!     "detection": {
//!         "selection": {"EventID": 1, "LogonType": 3},
//!         "condition": "selection"
//!     }
//! }]);
//!
//! let fields = extract_fields(&doc);
//! assert_eq!(fields, vec!["EventID", "LogonType"]);
//!
//! let template = synthesize(&fields, &resolve_title(&doc), "Acme");
//! assert!(template.contains("Acme has detected Suspicious Login"));
//! ```

pub mod error;
pub mod expand;
pub mod extract;
pub mod rule;
pub mod template;

// Re-export the most commonly used types and functions at crate root
pub use error::{GenError, Result};
pub use expand::expand;
pub use extract::{
    FALLBACK_FIELDS, FieldExtractor, RuleStringExtractor, SelectionMapExtractor, extract_fields,
};
pub use rule::{UNTITLED, first_record, parse_document, parse_document_file, records, resolve_title};
pub use template::synthesize;
