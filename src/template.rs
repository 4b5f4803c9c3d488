//! Named YAML templates and argument substitution
//!
//! A template is a YAML fragment with `{name}` placeholders:
//!
//! ```yaml
//! name: spark_job
//! yaml: |
//!   job: {job_name}
//!   columns: {columns}
//!   filter: "{{ jinja_stays_as_is }}"
//! ```
//!
//! Populating it requires exactly one argument per placeholder: a missing
//! argument and an unused argument are both errors. Literal `{{` / `}}`
//! pairs pass through untouched.

pub mod flatten;
pub mod scan;

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embed::ArgumentSet;
use crate::error::{Result, StencilError};
use crate::resource::ResourceKind;

use self::flatten::flatten;
use self::scan::Token;

/// Pre-compiled regex for template names
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    name: String,
    yaml: String,
}

impl Template {
    pub fn new(name: impl Into<String>, yaml: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            yaml: yaml.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn yaml(&self) -> &str {
        &self.yaml
    }

    pub fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Template
    }

    /// Check the fields: name is `[A-Za-z0-9_-]+`, yaml is non-empty
    pub fn validate(&self) -> Result<()> {
        if !NAME_RE.is_match(&self.name) {
            return Err(StencilError::InvalidName {
                name: self.name.clone(),
            });
        }
        if self.yaml.is_empty() {
            return Err(StencilError::EmptyYaml {
                template: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Unique placeholder names in the template body, sorted
    pub fn variable_names(&self) -> BTreeSet<String> {
        scan::extract_placeholders(&self.yaml)
    }

    /// Template body with every placeholder in tight `{name}` form
    pub fn normalized(&self) -> Cow<'_, str> {
        scan::normalize(&self.yaml)
    }

    /// Substitute `args` into the template body.
    ///
    /// Every placeholder needs an argument and every argument needs a
    /// placeholder; the first offender in sorted order is reported. On
    /// error no text is produced.
    pub fn populate(&self, args: &ArgumentSet) -> Result<String> {
        let tokens = scan::tokenize(&self.yaml);
        let placeholders: BTreeSet<&str> =
            tokens.iter().filter_map(Token::placeholder_name).collect();

        if let Some(name) = placeholders
            .iter()
            .copied()
            .find(|name| !args.contains_key(*name))
        {
            debug!(template = %self.name, variable = name, "missing template argument");
            return Err(StencilError::MissingArgument {
                template: self.name.clone(),
                name: name.to_string(),
            });
        }

        if let Some(argument) = args
            .keys()
            .find(|key| !placeholders.contains(key.as_str()))
        {
            debug!(template = %self.name, argument = %argument, "extra template argument");
            return Err(StencilError::ExtraArgument {
                template: self.name.clone(),
                argument: argument.clone(),
            });
        }

        let replacements: BTreeMap<&str, String> = placeholders
            .iter()
            .map(|name| (*name, flatten(&args[*name])))
            .collect();

        let mut result = String::with_capacity(self.yaml.len() + 64);
        for token in &tokens {
            match token {
                Token::Literal(range) | Token::Escaped(range) => {
                    result.push_str(&self.yaml[range.clone()]);
                }
                Token::Placeholder { name, .. } => {
                    result.push_str(&replacements[name]);
                }
            }
        }

        debug!(
            template = %self.name,
            placeholders = placeholders.len(),
            bytes = result.len(),
            "populated template"
        );
        Ok(result)
    }
}
