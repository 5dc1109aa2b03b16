use thiserror::Error;

/// Errors that can occur while loading a rule document.
///
/// Field extraction and template synthesis are infallible by construction;
/// errors exist only at the document-loading boundary.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported document shape: {0}")]
    UnsupportedDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
