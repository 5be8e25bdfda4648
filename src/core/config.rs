// ============================================================================
// spark-classes - Class Config
// Theme-level class declarations shared by every node
// ============================================================================

use indexmap::IndexMap;
use serde::Deserialize;

use super::constants::MAX_RESOLVE_DEPTH;
use super::error::Result;
use crate::node::Node;
use crate::primitives::source::ClassSource;

/// Class declarations applied to every node, keyed by section.
///
/// Loaded from JSON, where each section maps to either a class string or a
/// `{ "class": bool }` object. Root classes are code-only since they are
/// usually a resolver.
///
/// # Example
///
/// ```
/// use spark_classes::ClassConfig;
///
/// let config = ClassConfig::from_json_str(r#"{
///     "sections": {
///         "outer": "field",
///         "input": { "field-input": true, "rounded": false }
///     }
/// }"#).unwrap();
///
/// assert!(config.section("outer").is_some());
/// assert!(config.section("label").is_none());
/// assert_eq!(config.max_resolve_depth, 32);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassConfig {
    pub sections: IndexMap<String, ClassSource>,
    pub max_resolve_depth: usize,
    #[serde(skip)]
    root: Option<ClassSource>,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            sections: IndexMap::new(),
            max_resolve_depth: MAX_RESOLVE_DEPTH,
            root: None,
        }
    }
}

impl ClassConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the declaration for one section.
    pub fn with_section(mut self, section: impl Into<String>, source: impl Into<ClassSource>) -> Self {
        self.sections.insert(section.into(), source.into());
        self
    }

    /// Set a resolver that contributes classes to every section.
    pub fn with_root_classes<F>(mut self, f: F) -> Self
    where
        F: Fn(&Node, &str) -> ClassSource + 'static,
    {
        self.root = Some(ClassSource::resolver(f));
        self
    }

    pub fn section(&self, section: &str) -> Option<&ClassSource> {
        self.sections.get(section)
    }

    pub fn root_classes(&self) -> Option<&ClassSource> {
        self.root.as_ref()
    }
}
