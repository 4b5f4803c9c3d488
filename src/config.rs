//! Stencil Configuration Module
//!
//! Config is stored in `~/.config/stencil/config.toml`:
//!
//! ```toml
//! templates = "/srv/app/templates.yaml"
//! ```
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. Command line (`--templates`)
//! 2. Environment variable (`STENCIL_TEMPLATES`)
//! 3. Config file
//! 4. Defaults (none)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StencilError};

pub const TEMPLATES_ENV: &str = "STENCIL_TEMPLATES";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StencilConfig {
    /// Default templates file
    pub templates: Option<PathBuf>,
}

impl StencilConfig {
    /// Returns `~/.config/stencil/` on Unix, `%APPDATA%/stencil/` on Windows
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stencil")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`.
    ///
    /// Returns default config if the file doesn't exist, error if it is
    /// malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| StencilError::Config {
            reason: format!("Failed to read config file: {}", e),
        })?;

        toml::from_str(&content).map_err(|e| StencilError::Config {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Environment variables take precedence over config file values.
    pub fn with_env(mut self) -> Self {
        if let Some(path) = std::env::var_os(TEMPLATES_ENV) {
            if !path.is_empty() {
                self.templates = Some(PathBuf::from(path));
            }
        }
        self
    }

    /// Pick the templates file: explicit path first, then config
    pub fn templates_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.templates.clone())
            .ok_or_else(|| StencilError::Config {
                reason: format!(
                    "No templates file given (use --templates, {} or {})",
                    TEMPLATES_ENV,
                    Self::config_path().display()
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = StencilConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, StencilConfig::default());
    }

    #[test]
    fn parses_templates_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "templates = \"/srv/templates.yaml\"\n").unwrap();
        let config = StencilConfig::load_from(&path).unwrap();
        assert_eq!(config.templates, Some(PathBuf::from("/srv/templates.yaml")));
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "templates = [").unwrap();
        let err = StencilConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, StencilError::Config { .. }));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn explicit_path_wins() {
        let config = StencilConfig {
            templates: Some(PathBuf::from("from-config.yaml")),
        };
        let path = config.templates_path(Some(Path::new("cli.yaml"))).unwrap();
        assert_eq!(path, PathBuf::from("cli.yaml"));
        let path = config.templates_path(None).unwrap();
        assert_eq!(path, PathBuf::from("from-config.yaml"));
    }

    #[test]
    fn no_path_anywhere_is_error() {
        let err = StencilConfig::default().templates_path(None).unwrap_err();
        assert!(matches!(err, StencilError::Config { .. }));
        assert!(err.to_string().contains(TEMPLATES_ENV));
    }

    #[test]
    fn config_path_ends_with_stencil() {
        let path = StencilConfig::config_path();
        assert!(path.ends_with("stencil/config.toml"));
    }
}
