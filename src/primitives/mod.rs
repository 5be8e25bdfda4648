// ============================================================================
// spark-classes - Primitives Module
// Class sources and class list generation
// ============================================================================

pub mod merge;
pub mod source;

// Re-export for convenience
pub use merge::{compose_classes, generate_class_list, merge_class_maps};
pub use source::{create_classes, resolve_with_depth, try_create_classes, ClassResolver, ClassSource};
