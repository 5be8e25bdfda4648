// ============================================================================
// spark-classes - Class Hook
// Ordered interceptor chain owned by a node
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::core::types::ClassPayload;
use crate::hooks::interceptor::ClassInterceptor;

// =============================================================================
// CLASS HOST - The collaborator contract
// =============================================================================

/// Anything that can route merged classes through an interception pipeline.
///
/// The returned payload keeps the same shape, but its classes may differ
/// arbitrarily from the input.
pub trait ClassHost {
    fn dispatch_classes(&self, payload: ClassPayload) -> ClassPayload;
}

// =============================================================================
// CLASS HOOK
// =============================================================================

/// Handle returned when registering an interceptor, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptorId(u64);

/// Ordered chain of class interceptors.
///
/// Interceptors run in chain order, each receiving the previous one's output.
/// The chain is snapshotted when a dispatch starts, so interceptors may
/// register or remove interceptors on the same hook while running; the
/// change applies to the next dispatch.
///
/// # Example
///
/// ```
/// use spark_classes::{class_map, ClassHook, ClassMap, ClassPayload};
///
/// let hook = ClassHook::new();
/// hook.push(|_: &str, mut classes: ClassMap| {
///     classes.insert("themed", true);
///     classes
/// });
///
/// let out = hook.dispatch(ClassPayload::new("input", class_map! { "a" => true }));
/// assert_eq!(out.property, "input");
/// assert!(out.classes.is_on("themed"));
/// ```
#[derive(Default)]
pub struct ClassHook {
    chain: RefCell<Vec<(InterceptorId, Rc<dyn ClassInterceptor>)>>,
    next_id: Cell<u64>,
}

impl ClassHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interceptor to the end of the chain.
    pub fn push<I: ClassInterceptor + 'static>(&self, interceptor: I) -> InterceptorId {
        let id = self.allocate_id();
        self.chain.borrow_mut().push((id, Rc::new(interceptor)));
        id
    }

    /// Insert an interceptor at the front of the chain.
    pub fn unshift<I: ClassInterceptor + 'static>(&self, interceptor: I) -> InterceptorId {
        let id = self.allocate_id();
        self.chain.borrow_mut().insert(0, (id, Rc::new(interceptor)));
        id
    }

    /// Remove a previously registered interceptor.
    ///
    /// Returns false if the id is unknown (already removed, or from another hook).
    pub fn remove(&self, id: InterceptorId) -> bool {
        let mut chain = self.chain.borrow_mut();
        let before = chain.len();
        chain.retain(|(existing, _)| *existing != id);
        chain.len() != before
    }

    pub fn len(&self) -> usize {
        self.chain.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.chain.borrow_mut().clear();
    }

    /// Run the payload through every interceptor in order.
    pub fn dispatch(&self, payload: ClassPayload) -> ClassPayload {
        // Snapshot so interceptors can touch the hook without a borrow panic.
        let chain: Vec<_> = self.chain.borrow().clone();

        let ClassPayload {
            property,
            mut classes,
        } = payload;

        for (id, interceptor) in &chain {
            classes = interceptor.apply(&property, classes);
            tracing::trace!(property = %property, interceptor = id.0, classes = classes.len(), "class interceptor applied");
        }

        ClassPayload { property, classes }
    }

    fn allocate_id(&self) -> InterceptorId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        InterceptorId(id)
    }
}

impl ClassHost for ClassHook {
    fn dispatch_classes(&self, payload: ClassPayload) -> ClassPayload {
        self.dispatch(payload)
    }
}

impl fmt::Debug for ClassHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassHook")
            .field("interceptors", &self.len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_map;
    use crate::core::types::ClassMap;

    fn tag(name: &'static str) -> impl Fn(&str, ClassMap) -> ClassMap {
        move |_: &str, mut classes: ClassMap| {
            classes.insert(name, true);
            classes
        }
    }

    fn order(out: &ClassPayload) -> Vec<&str> {
        out.classes.keys().collect()
    }

    #[test]
    fn empty_hook_is_identity() {
        let hook = ClassHook::new();
        let payload = ClassPayload::new("input", class_map! { "a" => true, "b" => false });
        assert_eq!(hook.dispatch(payload.clone()), payload);
    }

    #[test]
    fn runs_in_registration_order() {
        let hook = ClassHook::new();
        hook.push(tag("first"));
        hook.push(tag("second"));
        hook.unshift(tag("zeroth"));

        let out = hook.dispatch(ClassPayload::new("input", ClassMap::new()));
        assert_eq!(order(&out), vec!["zeroth", "first", "second"]);
    }

    #[test]
    fn interceptors_see_the_property() {
        let hook = ClassHook::new();
        hook.push(|property: &str, mut classes: ClassMap| {
            classes.insert(format!("for-{property}"), true);
            classes
        });

        let out = hook.dispatch(ClassPayload::new("label", ClassMap::new()));
        assert!(out.classes.is_on("for-label"));
    }

    #[test]
    fn remove_unregisters() {
        let hook = ClassHook::new();
        let a = hook.push(tag("a"));
        hook.push(tag("b"));

        assert!(hook.remove(a));
        assert!(!hook.remove(a));
        assert_eq!(hook.len(), 1);

        let out = hook.dispatch(ClassPayload::new("input", ClassMap::new()));
        assert_eq!(order(&out), vec!["b"]);
    }

    #[test]
    fn registering_during_dispatch_applies_next_time() {
        let hook = Rc::new(ClassHook::new());
        let weak = Rc::downgrade(&hook);
        hook.push(move |_: &str, classes: ClassMap| {
            if let Some(hook) = weak.upgrade() {
                if hook.len() == 1 {
                    hook.push(tag("late"));
                }
            }
            classes
        });

        let first = hook.dispatch(ClassPayload::new("input", ClassMap::new()));
        assert!(!first.classes.contains_key("late"));

        let second = hook.dispatch(ClassPayload::new("input", ClassMap::new()));
        assert!(second.classes.is_on("late"));
    }

    #[test]
    fn clear_empties_the_chain() {
        let hook = ClassHook::new();
        hook.push(tag("a"));
        hook.clear();
        assert!(hook.is_empty());
    }
}
