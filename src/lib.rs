//! Stencil - named YAML templates with strict argument binding

pub mod config;
pub mod embed;
pub mod error;
pub mod resource;
pub mod template;
pub mod templates;

pub use config::StencilConfig;
pub use embed::{ArgumentSet, Embed};
pub use error::{FixSuggestion, Result, StencilError};
pub use resource::ResourceKind;
pub use template::scan::{extract_placeholders, has_placeholders, normalize};
pub use template::Template;
pub use templates::Templates;
