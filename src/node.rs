// ============================================================================
// spark-classes - Node
// Minimal stateful owner of props and a class hook
// ============================================================================

use std::cell::RefCell;

use indexmap::IndexMap;
use serde_json::Value;

use crate::core::types::ClassPayload;
use crate::hooks::dispatcher::{ClassHook, ClassHost, InterceptorId};
use crate::hooks::interceptor::ClassInterceptor;

/// A stateful UI node: a name, a bag of props and a class hook.
///
/// Class resolution only reads from the node; resolvers receive it so they
/// can derive classes from its props.
///
/// # Example
///
/// ```
/// use spark_classes::Node;
///
/// let node = Node::new("email");
/// node.set_prop("disabled", true);
/// node.set_prop("inputClass", "wide");
///
/// assert_eq!(node.prop_bool("disabled"), Some(true));
/// assert_eq!(node.prop_str("inputClass").as_deref(), Some("wide"));
/// ```
#[derive(Debug, Default)]
pub struct Node {
    name: String,
    props: RefCell<IndexMap<String, Value>>,
    hook: ClassHook,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: RefCell::new(IndexMap::new()),
            hook: ClassHook::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Props
    // =========================================================================

    /// Set a prop, returning the previous value.
    pub fn set_prop(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.props.borrow_mut().insert(key.into(), value.into())
    }

    pub fn remove_prop(&self, key: &str) -> Option<Value> {
        self.props.borrow_mut().shift_remove(key)
    }

    /// Clone of the prop's current value.
    pub fn prop(&self, key: &str) -> Option<Value> {
        self.props.borrow().get(key).cloned()
    }

    pub fn prop_str(&self, key: &str) -> Option<String> {
        self.props
            .borrow()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn prop_bool(&self, key: &str) -> Option<bool> {
        self.props.borrow().get(key).and_then(Value::as_bool)
    }

    pub fn has_prop(&self, key: &str) -> bool {
        self.props.borrow().contains_key(key)
    }

    // =========================================================================
    // Class hook
    // =========================================================================

    /// The node's class interception pipeline.
    pub fn hook(&self) -> &ClassHook {
        &self.hook
    }

    /// Append a class interceptor to this node's pipeline.
    pub fn use_classes<I: ClassInterceptor + 'static>(&self, interceptor: I) -> InterceptorId {
        self.hook.push(interceptor)
    }
}

impl ClassHost for Node {
    fn dispatch_classes(&self, payload: ClassPayload) -> ClassPayload {
        self.hook.dispatch(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ClassMap;
    use serde_json::json;

    #[test]
    fn props_round_trip() {
        let node = Node::new("n");
        assert_eq!(node.set_prop("a", 1), None);
        assert_eq!(node.set_prop("a", 2), Some(json!(1)));
        assert_eq!(node.prop("a"), Some(json!(2)));
        assert!(node.has_prop("a"));
        assert_eq!(node.remove_prop("a"), Some(json!(2)));
        assert!(!node.has_prop("a"));
    }

    #[test]
    fn typed_prop_accessors_ignore_other_types() {
        let node = Node::new("n");
        node.set_prop("flag", "yes");
        assert_eq!(node.prop_bool("flag"), None);
        assert_eq!(node.prop_str("flag").as_deref(), Some("yes"));
        assert_eq!(node.prop_str("missing"), None);
    }

    #[test]
    fn node_dispatches_through_its_hook() {
        let node = Node::new("n");
        node.use_classes(|_: &str, mut classes: ClassMap| {
            classes.insert("hooked", true);
            classes
        });

        let out = node.dispatch_classes(ClassPayload::new("input", ClassMap::new()));
        assert!(out.classes.is_on("hooked"));
        assert_eq!(node.hook().len(), 1);
    }
}
