// ============================================================================
// spark-classes - Class List Generation
// Merge canonical maps, route them through the node's hook, emit the string
// ============================================================================

use crate::core::types::{ClassMap, ClassPayload};
use crate::hooks::dispatcher::ClassHost;
use crate::node::Node;
use crate::primitives::source::{create_classes, ClassSource};

// =============================================================================
// MERGE
// =============================================================================

/// Fold class maps left to right.
///
/// Later maps override earlier ones for the same class name. A map whose
/// reserved reset key is `true` discards everything accumulated so far and
/// becomes the new accumulator. The reset key itself never survives.
///
/// # Example
///
/// ```
/// use spark_classes::{class_map, merge_class_maps};
///
/// let merged = merge_class_maps([
///     class_map! { "a" => true, "b" => true },
///     class_map! { "b" => false },
///     class_map! { "c" => true },
/// ]);
///
/// assert_eq!(merged, class_map! { "a" => true, "b" => false, "c" => true });
/// ```
pub fn merge_class_maps<I>(maps: I) -> ClassMap
where
    I: IntoIterator<Item = ClassMap>,
{
    maps.into_iter()
        .enumerate()
        .fold(ClassMap::new(), |mut combined, (index, mut current)| {
            if current.take_reset() {
                tracing::trace!(index, discarded = combined.len(), "class reset");
                return current;
            }
            combined.assign(current);
            combined
        })
}

// =============================================================================
// GENERATE CLASS LIST
// =============================================================================

/// Merge class maps, dispatch them through the host's class hook, and join
/// what survives into a class string.
///
/// A class survives when the hook returns it switched on AND it was switched
/// on in the merged input. The hook can therefore drop or flip classes but
/// cannot introduce new ones. Survivors are joined with single spaces in the
/// order the hook returned them.
///
/// Returns `None` when no class survives (never an empty string).
///
/// # Example
///
/// ```
/// use spark_classes::{class_map, generate_class_list, ClassMap, Node};
///
/// let node = Node::new("name");
/// let list = generate_class_list(
///     &node,
///     "input",
///     [ClassMap::from_tokens("foo bar"), class_map! { "$reset" => true, "baz" => true }],
/// );
/// assert_eq!(list.as_deref(), Some("baz"));
///
/// assert_eq!(generate_class_list(&node, "input", Vec::<ClassMap>::new()), None);
/// ```
pub fn generate_class_list<H, I>(host: &H, property: &str, maps: I) -> Option<String>
where
    H: ClassHost + ?Sized,
    I: IntoIterator<Item = ClassMap>,
{
    let combined = merge_class_maps(maps);
    let dispatched = host.dispatch_classes(ClassPayload::new(property, combined.clone()));

    let list = dispatched
        .classes
        .active()
        .filter(|name| combined.is_on(name))
        .collect::<Vec<_>>()
        .join(" ");

    tracing::debug!(property, classes = %list, "class list generated");

    if list.is_empty() { None } else { Some(list) }
}

/// Normalize each declaration against `node`, then generate the class list.
///
/// # Example
///
/// ```
/// use spark_classes::{class_map, compose_classes, ClassSource, Node};
///
/// let node = Node::new("name");
/// let list = compose_classes(
///     &node,
///     "input",
///     &[
///         class_map! { "a" => true }.into(),
///         ClassSource::resolver(|_, _| "a b".into()),
///     ],
/// );
/// assert_eq!(list.as_deref(), Some("a b"));
/// ```
pub fn compose_classes(node: &Node, property: &str, sources: &[ClassSource]) -> Option<String> {
    let maps = sources
        .iter()
        .map(|source| create_classes(property, node, Some(source)));
    generate_class_list(node, property, maps)
}

// =============================================================================
// TESTS
// =============================================================================
