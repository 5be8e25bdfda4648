// ============================================================================
// spark-classes - Section Classes
// Layer theme, root and node-level declarations for one section
// ============================================================================

use serde_json::Value;

use crate::core::config::ClassConfig;
use crate::core::constants::{CLASSES_PROP, SECTION_CLASS_SUFFIX};
use crate::core::error::Result;
use crate::core::types::ClassMap;
use crate::node::Node;
use crate::primitives::merge::generate_class_list;
use crate::primitives::source::{resolve_with_depth, ClassSource};

/// Collect the class declarations that apply to `section`, lowest priority
/// first:
///
/// 1. the config's root classes
/// 2. the config's declaration for the section
/// 3. the node's `"<section>Class"` string prop
/// 4. the section's entry in the node's `"classes"` prop
///
/// Layers that are not present are skipped.
pub fn section_sources(node: &Node, section: &str, config: &ClassConfig) -> Result<Vec<ClassSource>> {
    let mut sources = Vec::with_capacity(4);

    sources.extend(config.root_classes().cloned());
    sources.extend(config.section(section).cloned());

    let class_prop = format!("{section}{SECTION_CLASS_SUFFIX}");
    sources.extend(node.prop_str(&class_prop).map(ClassSource::Literal));

    if let Some(Value::Object(mut per_section)) = node.prop(CLASSES_PROP) {
        if let Some(value) = per_section.remove(section) {
            sources.push(serde_json::from_value(value)?);
        }
    }

    Ok(sources)
}

/// Resolve every layer for `section` and generate its class list.
///
/// A `$reset` in any layer discards the layers below it.
///
/// # Example
///
/// ```
/// use spark_classes::{section_classes, ClassConfig, Node};
/// use serde_json::json;
///
/// let config = ClassConfig::new()
///     .with_section("input", "field-input rounded")
///     .with_root_classes(|node, section| format!("{}-{}", node.name(), section).into());
///
/// let node = Node::new("email");
/// node.set_prop("inputClass", "wide");
/// node.set_prop("classes", json!({ "input": { "rounded": false } }));
///
/// let list = section_classes(&node, "input", &config).unwrap();
/// assert_eq!(list.as_deref(), Some("email-input field-input wide"));
/// ```
pub fn section_classes(node: &Node, section: &str, config: &ClassConfig) -> Result<Option<String>> {
    let maps = section_sources(node, section, config)?
        .iter()
        .map(|source| resolve_with_depth(section, node, Some(source), config.max_resolve_depth))
        .collect::<Result<Vec<ClassMap>>>()?;

    Ok(generate_class_list(node, section, maps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ClassError;
    use serde_json::json;

    #[test]
    fn nothing_configured_is_none() {
        let node = Node::new("n");
        let list = section_classes(&node, "input", &ClassConfig::new()).unwrap();
        assert_eq!(list, None);
    }

    #[test]
    fn layers_are_ordered_lowest_first() {
        let config = ClassConfig::new()
            .with_section("label", "theme")
            .with_root_classes(|_, _| "root".into());
        let node = Node::new("n");
        node.set_prop("labelClass", "prop");
        node.set_prop("classes", json!({ "label": "local" }));

        let list = section_classes(&node, "label", &config).unwrap();
        assert_eq!(list.as_deref(), Some("root theme prop local"));
    }

    #[test]
    fn reset_in_node_classes_drops_theme() {
        let config = ClassConfig::new().with_section("input", "theme-a theme-b");
        let node = Node::new("n");
        node.set_prop("classes", json!({ "input": { "$reset": true, "mine": true } }));

        let list = section_classes(&node, "input", &config).unwrap();
        assert_eq!(list.as_deref(), Some("mine"));
    }

    #[test]
    fn other_sections_are_untouched() {
        let config = ClassConfig::new().with_section("input", "i");
        let node = Node::new("n");
        node.set_prop("classes", json!({ "input": "x" }));

        assert_eq!(section_classes(&node, "label", &config).unwrap(), None);
    }

    #[test]
    fn malformed_classes_prop_is_an_error() {
        let node = Node::new("n");
        node.set_prop("classes", json!({ "input": 7 }));

        let err = section_classes(&node, "input", &ClassConfig::new()).unwrap_err();
        assert!(matches!(err, ClassError::Config(_)));
    }

    #[test]
    fn config_depth_limit_applies() {
        let mut config = ClassConfig::new()
            .with_root_classes(|_, _| ClassSource::resolver(|_, _| "deep".into()));
        config.max_resolve_depth = 1;

        let err = section_classes(&Node::new("n"), "input", &config).unwrap_err();
        assert!(matches!(err, ClassError::ResolveDepthExceeded { depth: 1, .. }));
    }

    #[test]
    fn node_hook_sees_section_name() {
        let node = Node::new("n");
        node.set_prop("outerClass", "a b");
        node.use_classes(|section: &str, mut classes: ClassMap| {
            if section == "outer" {
                classes.remove("a");
            }
            classes
        });

        let list = section_classes(&node, "outer", &ClassConfig::new()).unwrap();
        assert_eq!(list.as_deref(), Some("b"));
    }
}
