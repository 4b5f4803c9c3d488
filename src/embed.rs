//! Embed requests: a template name plus the arguments to fill it with
//!
//! ```yaml
//! template: spark_job
//! args:
//!   job_name: nightly
//!   columns: [age, income]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::resource::ResourceKind;

/// Argument name → value. Sorted, so error reporting is deterministic.
pub type ArgumentSet = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    /// Name of the template to populate
    pub template: String,

    #[serde(default)]
    pub args: ArgumentSet,
}

impl Embed {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            args: ArgumentSet::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Embed
    }
}
