//! Named-template persistence.
//!
//! A flat namespace of `.liquid` text files in one directory. The directory
//! is an explicit configuration value handed to the store — never ambient
//! global state. Saves are last-writer-wins: saving under an existing name
//! overwrites it, with no versioning.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{RenderError, Result};

/// File extension for stored templates.
const TEMPLATE_EXT: &str = "liquid";

/// Configuration for the template store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the named templates.
    pub dir: PathBuf,
}

/// A stored template's name and location.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Reads and writes named template files.
#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Open a store, creating its directory if needed.
    pub fn open(config: StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.dir)?;
        Ok(TemplateStore { dir: config.dir })
    }

    /// Save `content` under `name`, overwriting any existing template.
    /// Returns the path written.
    pub fn save(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Load the template stored under `name`.
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(RenderError::NotFound(name.to_string()));
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// List all stored templates, sorted by name.
    pub fn list(&self) -> Result<Vec<TemplateEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXT) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                entries.push(TemplateEntry {
                    name: name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        Ok(self.dir.join(sanitize_name(name)?))
    }
}

/// Reduce a caller-supplied name to a safe flat file name, appending the
/// `.liquid` extension if missing.
///
/// Whitespace becomes `_`; anything outside `[A-Za-z0-9._-]` is dropped, so
/// path separators and parent-directory components cannot survive. Leading
/// and trailing dots are stripped before the extension check.
fn sanitize_name(name: &str) -> Result<String> {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '.' | '_' | '-'))
        .collect();
    let cleaned = cleaned.trim_matches('.');

    if cleaned.is_empty() {
        return Err(RenderError::InvalidName(name.to_string()));
    }

    if cleaned.ends_with(".liquid") {
        Ok(cleaned.to_string())
    } else {
        Ok(format!("{cleaned}.{TEMPLATE_EXT}"))
    }
}
