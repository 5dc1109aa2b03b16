//! Opaque Liquid preview renderer.
//!
//! Wraps the [`liquid`] engine behind a narrow surface: given a template
//! string and a JSON data document, return rendered text or the engine's
//! error message verbatim. Templates are arbitrary strings (not
//! pre-registered files), so a fresh parser is built per call.

use serde_json::Value;

use crate::error::{RenderError, Result};

/// Renders template strings with the Liquid engine.
#[derive(Debug, Default)]
pub struct Renderer {
    _private: (),
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { _private: () }
    }

    /// Render `template` against a JSON data document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the template fails to parse,
    /// the data is not an object, or rendering fails (e.g. an undefined
    /// variable). The message is the engine's own text.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        let parsed = build_parser()?
            .parse(template)
            .map_err(|e| RenderError::Template(e.to_string()))?;
        let globals = liquid::to_object(data).map_err(|e| RenderError::Template(e.to_string()))?;
        parsed
            .render(&globals)
            .map_err(|e| RenderError::Template(e.to_string()))
    }

    /// Check that `template` parses, without rendering it.
    pub fn validate(&self, template: &str) -> Result<()> {
        build_parser()?
            .parse(template)
            .map(|_| ())
            .map_err(|e| RenderError::Template(e.to_string()))
    }
}

fn build_parser() -> Result<liquid::Parser> {
    liquid::ParserBuilder::with_stdlib()
        .build()
        .map_err(|e| RenderError::Template(e.to_string()))
}
