use thiserror::Error;

/// Errors from preview rendering or the template store.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template engine rejected the template or its data. The message
    /// is the engine's own error text, passed through opaquely.
    #[error("template error: {0}")]
    Template(String),

    /// A template name sanitized down to nothing usable.
    #[error("invalid template name '{0}'")]
    InvalidName(String),

    /// No stored template under the requested name.
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
