//! Error types with fix suggestions

use thiserror::Error;

use crate::resource::ResourceKind;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

pub type Result<T, E = StencilError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum StencilError {
    // ─────────────────────────────────────────────────────────────
    // Collection errors (STN-001)
    // ─────────────────────────────────────────────────────────────

    #[error("STN-001: Duplicate {kind} name '{name}'")]
    DuplicateName { name: String, kind: ResourceKind },

    // ─────────────────────────────────────────────────────────────
    // Binding errors (STN-002 to STN-003)
    // ─────────────────────────────────────────────────────────────

    #[error("STN-002: Template '{template}' references '{{{name}}}' but no argument '{name}' was given")]
    MissingArgument { template: String, name: String },

    #[error("STN-003: Argument '{argument}' is not used by template '{template}'")]
    ExtraArgument { template: String, argument: String },

    // ─────────────────────────────────────────────────────────────
    // Field errors (STN-004 to STN-006)
    // ─────────────────────────────────────────────────────────────

    #[error("STN-004: Invalid template name '{name}' (allowed: letters, digits, '-', '_')")]
    InvalidName { name: String },

    #[error("STN-005: Template '{template}' has an empty 'yaml' field")]
    EmptyYaml { template: String },

    #[error("STN-006: Template '{name}' not found")]
    TemplateNotFound { name: String },

    // ─────────────────────────────────────────────────────────────
    // Ambient errors (STN-010 to STN-012)
    // ─────────────────────────────────────────────────────────────

    #[error("STN-010: YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("STN-011: IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("STN-012: Config error: {reason}")]
    Config { reason: String },
}

impl StencilError {
    /// Stable error code, e.g. `STN-002`
    pub fn code(&self) -> &'static str {
        match self {
            StencilError::DuplicateName { .. } => "STN-001",
            StencilError::MissingArgument { .. } => "STN-002",
            StencilError::ExtraArgument { .. } => "STN-003",
            StencilError::InvalidName { .. } => "STN-004",
            StencilError::EmptyYaml { .. } => "STN-005",
            StencilError::TemplateNotFound { .. } => "STN-006",
            StencilError::YamlParse(_) => "STN-010",
            StencilError::Io(_) => "STN-011",
            StencilError::Config { .. } => "STN-012",
        }
    }
}

impl FixSuggestion for StencilError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            StencilError::DuplicateName { .. } => Some("Give every template a unique name"),
            StencilError::MissingArgument { .. } => {
                Some("Add the missing key under 'args:' in the embed")
            }
            StencilError::ExtraArgument { .. } => {
                Some("Remove the argument or reference it in the template as {name}")
            }
            StencilError::InvalidName { .. } => {
                Some("Use only letters, digits, dashes and underscores in names")
            }
            StencilError::EmptyYaml { .. } => Some("Put the template body under 'yaml: |'"),
            StencilError::TemplateNotFound { .. } => {
                Some("Check the embed's 'template:' against `stencil check`")
            }
            StencilError::YamlParse(_) => Some("Check YAML syntax: indentation and quoting"),
            StencilError::Io(_) => Some("Check file path and permissions"),
            StencilError::Config { .. } => {
                Some("Pass the templates file explicitly or set STENCIL_TEMPLATES")
            }
        }
    }
}
