//! Template collections
//!
//! A templates file is a YAML sequence of templates:
//!
//! ```yaml
//! - name: base
//!   yaml: |
//!     kind: {kind}
//! - name: spark_job
//!   yaml: |
//!     job: {job_name}
//! ```
//!
//! Names must be unique across the collection.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::embed::Embed;
use crate::error::{Result, StencilError};
use crate::resource::ResourceKind;
use crate::template::Template;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Templates(Vec<Template>);

impl Templates {
    pub fn new(templates: Vec<Template>) -> Self {
        Self(templates)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a templates file (does not validate)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)?;
        let templates = Self::from_yaml(&yaml)?;
        debug!(path = %path.display(), count = templates.len(), "loaded templates");
        Ok(templates)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.0.iter()
    }

    /// Template names, in input order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(Template::name).collect()
    }

    /// Validate every template's fields, then name uniqueness.
    ///
    /// When several names are duplicated, the smallest one is reported.
    pub fn validate(&self) -> Result<()> {
        for template in &self.0 {
            template.validate()?;
        }

        let mut seen = HashSet::new();
        let mut duplicates = BTreeSet::new();
        for name in self.names() {
            if !seen.insert(name) {
                duplicates.insert(name);
            }
        }

        if let Some(name) = duplicates.first() {
            return Err(StencilError::DuplicateName {
                name: name.to_string(),
                kind: ResourceKind::Template,
            });
        }
        Ok(())
    }

    /// Name-indexed view; with duplicate names the last one wins
    pub fn map(&self) -> HashMap<&str, &Template> {
        self.0
            .iter()
            .map(|template| (template.name(), template))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.0.iter().find(|template| template.name() == name)
    }

    /// Populate the template an embed refers to
    #[instrument(skip_all, fields(template = %embed.template))]
    pub fn populate(&self, embed: &Embed) -> Result<String> {
        let template = self
            .get(&embed.template)
            .ok_or_else(|| StencilError::TemplateNotFound {
                name: embed.template.clone(),
            })?;
        template.populate(&embed.args)
    }
}

impl From<Vec<Template>> for Templates {
    fn from(templates: Vec<Template>) -> Self {
        Self(templates)
    }
}

impl<'a> IntoIterator for &'a Templates {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn templates(names: &[&str]) -> Templates {
        names
            .iter()
            .map(|name| Template::new(*name, "a: {x}"))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn validate_unique_names() {
        let templates = templates(&["base", "spark", "tf"]);
        assert!(templates.validate().is_ok());
        assert_eq!(templates.names(), vec!["base", "spark", "tf"]);
    }

    #[test]
    fn validate_duplicate_name() {
        let err = templates(&["base", "other", "base"]).validate().unwrap_err();
        assert!(matches!(
            err,
            StencilError::DuplicateName { ref name, kind: ResourceKind::Template } if name == "base"
        ));
    }

    #[test]
    fn validate_reports_smallest_duplicate() {
        let err = templates(&["z", "z", "b", "b", "a"]).validate().unwrap_err();
        assert!(matches!(err, StencilError::DuplicateName { ref name, .. } if name == "b"));
    }

    #[test]
    fn validate_checks_fields_first() {
        let templates = Templates::new(vec![
            Template::new("ok", "a: 1"),
            Template::new("bad name", "a: 1"),
        ]);
        assert!(matches!(
            templates.validate().unwrap_err(),
            StencilError::InvalidName { .. }
        ));
    }

    #[test]
    fn empty_collection_is_valid() {
        let templates = Templates::default();
        assert!(templates.is_empty());
        assert!(templates.validate().is_ok());
        assert!(templates.names().is_empty());
    }

    #[test]
    fn map_and_get() {
        let templates = templates(&["base", "spark"]);
        let map = templates.map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["spark"].name(), "spark");
        assert!(templates.get("base").is_some());
        assert!(templates.get("missing").is_none());
    }

    #[test]
    fn from_yaml_sequence() {
        let templates = Templates::from_yaml(
            "- name: base\n  yaml: |\n    kind: {kind}\n- name: job\n  yaml: 'job: {job}'\n",
        )
        .unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates.names(), vec!["base", "job"]);
        assert_eq!(templates.iter().next().unwrap().yaml(), "kind: {kind}\n");
    }

    #[test]
    fn from_yaml_rejects_mapping() {
        assert!(matches!(
            Templates::from_yaml("name: base\nyaml: x\n").unwrap_err(),
            StencilError::YamlParse(_)
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- name: base\n  yaml: 'a: {{x}}'").unwrap();
        let templates = Templates::load(file.path()).unwrap();
        assert_eq!(templates.names(), vec!["base"]);
        assert_eq!(templates.get("base").unwrap().yaml(), "a: {x}");
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            Templates::load("/definitely/not/here.yaml").unwrap_err(),
            StencilError::Io(_)
        ));
    }

    #[test]
    fn populate_embed() {
        let templates = templates(&["base"]);
        let embed = Embed::new("base").with_arg("x", json!(["p", "q"]));
        assert_eq!(templates.populate(&embed).unwrap(), r#"a: ["p", "q"]"#);
    }

    #[test]
    fn populate_unknown_template() {
        let templates = templates(&["base"]);
        let err = templates.populate(&Embed::new("nope")).unwrap_err();
        assert!(matches!(err, StencilError::TemplateNotFound { ref name } if name == "nope"));
    }

    #[test]
    fn iterate_by_reference() {
        let templates = templates(&["a", "b"]);
        let count = (&templates).into_iter().count();
        assert_eq!(count, 2);
        for template in &templates {
            assert_eq!(template.yaml(), "a: {x}");
        }
    }
}
