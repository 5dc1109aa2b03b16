//! # rnarrate-render
//!
//! Collaborators around the template generator: an opaque Liquid preview
//! renderer and a named-template persistence store.
//!
//! The renderer exists to preview a synthesized template against sample log
//! data; whatever syntax `rnarrate-gen` emits must render here unchanged,
//! so both sides speak Liquid.
//!
//! ## Quick Start
//!
//! ```rust
//! use rnarrate_render::Renderer;
//! use serde_json::json;
//!
//! let renderer = Renderer::new();
//! let out = renderer
//!     .render("{{ logs.log.size }} entries", &json!({"logs": {"log": [1, 2, 3]}}))
//!     .unwrap();
//! assert_eq!(out, "3 entries");
//! ```

pub mod error;
pub mod preview;
pub mod store;

// Re-export the most commonly used types at crate root
pub use error::{RenderError, Result};
pub use preview::Renderer;
pub use store::{StoreConfig, TemplateEntry, TemplateStore};
