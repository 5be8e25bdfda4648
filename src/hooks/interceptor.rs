// ============================================================================
// spark-classes - Class Interceptors
// A single rewrite step in a node's class pipeline
// ============================================================================

use crate::core::types::ClassMap;

/// One step of a node's class pipeline.
///
/// Receives the composition key being classed and the merged classes, and
/// returns the classes to hand to the next step. It may add, remove or flip
/// any entry.
///
/// Any `Fn(&str, ClassMap) -> ClassMap` closure is an interceptor.
///
/// # Example
///
/// ```
/// use spark_classes::{class_map, ClassInterceptor, ClassMap};
///
/// struct Prefix(&'static str);
///
/// impl ClassInterceptor for Prefix {
///     fn apply(&self, _property: &str, classes: ClassMap) -> ClassMap {
///         classes
///             .into_iter()
///             .map(|(name, on)| (format!("{}{}", self.0, name), on))
///             .collect()
///     }
/// }
///
/// let out = Prefix("fk-").apply("input", class_map! { "outer" => true });
/// assert!(out.is_on("fk-outer"));
/// ```
pub trait ClassInterceptor {
    fn apply(&self, property: &str, classes: ClassMap) -> ClassMap;
}

impl<F> ClassInterceptor for F
where
    F: Fn(&str, ClassMap) -> ClassMap,
{
    fn apply(&self, property: &str, classes: ClassMap) -> ClassMap {
        self(property, classes)
    }
}

// =============================================================================
// BUILT-IN INTERCEPTORS
// =============================================================================

/// Interceptor that only runs for one composition key and passes every other
/// key through untouched.
pub struct ForProperty<I> {
    property: String,
    inner: I,
}

/// Restrict `inner` to the composition key `property`.
pub fn for_property<I: ClassInterceptor>(property: impl Into<String>, inner: I) -> ForProperty<I> {
    ForProperty {
        property: property.into(),
        inner,
    }
}

impl<I: ClassInterceptor> ClassInterceptor for ForProperty<I> {
    fn apply(&self, property: &str, classes: ClassMap) -> ClassMap {
        if property == self.property {
            self.inner.apply(property, classes)
        } else {
            classes
        }
    }
}
