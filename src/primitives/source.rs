// ============================================================================
// spark-classes - Class Sources
// Normalize string / map / resolver declarations into a canonical ClassMap
// ============================================================================

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer};

use crate::core::constants::MAX_RESOLVE_DEPTH;
use crate::core::error::{ClassError, Result};
use crate::core::types::ClassMap;
use crate::node::Node;

// =============================================================================
// CLASS SOURCE - A declaration that can be a string, a map, or a resolver
// =============================================================================

/// Resolver function: computes a declaration from the node and the
/// composition key being classed.
pub type ClassResolver = Rc<dyn Fn(&Node, &str) -> ClassSource>;

/// A class declaration attached to a node.
///
/// - `Literal` - space-separated class names, all switched on
/// - `Map` - an already canonical class map
/// - `Resolver` - evaluated lazily; may itself return another resolver
///
/// # Example
///
/// ```
/// use spark_classes::{create_classes, ClassSource, Node};
///
/// let node = Node::new("email");
/// node.set_prop("state", "invalid");
///
/// let source = ClassSource::resolver(|node, key| {
///     if node.prop_str("state").as_deref() == Some("invalid") {
///         format!("{key} {key}--invalid").into()
///     } else {
///         key.into()
///     }
/// });
///
/// let classes = create_classes("input", &node, Some(&source));
/// assert!(classes.is_on("input"));
/// assert!(classes.is_on("input--invalid"));
/// ```
#[derive(Clone)]
pub enum ClassSource {
    Literal(String),
    Map(ClassMap),
    Resolver(ClassResolver),
}

impl ClassSource {
    pub fn literal(classes: impl Into<String>) -> Self {
        ClassSource::Literal(classes.into())
    }

    pub fn map(classes: ClassMap) -> Self {
        ClassSource::Map(classes)
    }

    /// Wrap a closure as a resolver declaration.
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&Node, &str) -> ClassSource + 'static,
    {
        ClassSource::Resolver(Rc::new(f))
    }

    /// A declaration that resolves to no classes.
    pub fn empty() -> Self {
        ClassSource::Literal(String::new())
    }

    pub fn is_resolver(&self) -> bool {
        matches!(self, ClassSource::Resolver(_))
    }
}

impl fmt::Debug for ClassSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassSource::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            ClassSource::Map(m) => f.debug_tuple("Map").field(m).finish(),
            ClassSource::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&str> for ClassSource {
    fn from(classes: &str) -> Self {
        ClassSource::Literal(classes.to_string())
    }
}

impl From<String> for ClassSource {
    fn from(classes: String) -> Self {
        ClassSource::Literal(classes)
    }
}

impl From<ClassMap> for ClassSource {
    fn from(classes: ClassMap) -> Self {
        ClassSource::Map(classes)
    }
}

// Config files and node props can only carry the two data shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Literal(String),
    Map(ClassMap),
}

impl<'de> Deserialize<'de> for ClassSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match RawSource::deserialize(deserializer)? {
            RawSource::Literal(s) => ClassSource::Literal(s),
            RawSource::Map(m) => ClassSource::Map(m),
        })
    }
}

// =============================================================================
// CREATE CLASSES - Resolve a declaration to a ClassMap
// =============================================================================

/// Resolve a class declaration into a canonical class map.
///
/// `None` and empty strings resolve to an empty map. Resolver chains are
/// followed until a string or map is reached. The returned map is always a
/// fresh copy; mutating it never touches the declaration.
///
/// Never fails: a resolver chain longer than [`MAX_RESOLVE_DEPTH`] is logged
/// and treated as empty. Use [`try_create_classes`] to observe that case.
pub fn create_classes(property: &str, node: &Node, source: Option<&ClassSource>) -> ClassMap {
    match try_create_classes(property, node, source) {
        Ok(classes) => classes,
        Err(err) => {
            tracing::warn!(node = node.name(), property, error = %err, "discarding class declaration");
            ClassMap::new()
        }
    }
}

/// Like [`create_classes`], but reports runaway resolver chains.
pub fn try_create_classes(
    property: &str,
    node: &Node,
    source: Option<&ClassSource>,
) -> Result<ClassMap> {
    resolve_with_depth(property, node, source, MAX_RESOLVE_DEPTH)
}

/// Resolve with an explicit limit on resolver hops.
pub fn resolve_with_depth(
    property: &str,
    node: &Node,
    source: Option<&ClassSource>,
    max_depth: usize,
) -> Result<ClassMap> {
    let Some(source) = source else {
        return Ok(ClassMap::new());
    };

    let mut resolved: Option<ClassSource> = None;
    let mut hops = 0;

    loop {
        let current = resolved.as_ref().unwrap_or(source);
        let resolver = match current {
            ClassSource::Literal(tokens) => return Ok(ClassMap::from_tokens(tokens)),
            ClassSource::Map(classes) => return Ok(classes.clone()),
            ClassSource::Resolver(resolver) => Rc::clone(resolver),
        };

        if hops == max_depth {
            return Err(ClassError::ResolveDepthExceeded {
                property: property.to_string(),
                depth: max_depth,
            });
        }
        hops += 1;
        resolved = Some(resolver(node, property));
    }
}

// =============================================================================
// TESTS
// =============================================================================
