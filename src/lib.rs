// ============================================================================
// spark-classes - Composable CSS Classes for Stateful UI Nodes
// ============================================================================
//
// Class declarations (strings, maps or resolver functions) are normalized to
// canonical class maps, merged with `$reset` support, routed through the
// node's class hook and finally joined into a class string.
// ============================================================================

pub mod core;
pub mod hooks;
mod macros;
pub mod node;
pub mod primitives;
pub mod sections;

// Re-export core items at crate root for ergonomic access
pub use crate::core::constants;
pub use crate::core::config::ClassConfig;
pub use crate::core::error::{ClassError, Result};
pub use crate::core::types::{ClassMap, ClassPayload};

pub use hooks::dispatcher::{ClassHook, ClassHost, InterceptorId};
pub use hooks::interceptor::{for_property, ClassInterceptor, ForProperty};
pub use node::Node;
pub use primitives::merge::{compose_classes, generate_class_list, merge_class_maps};
pub use primitives::source::{
    create_classes, resolve_with_depth, try_create_classes, ClassResolver, ClassSource,
};
pub use sections::{section_classes, section_sources};

// =============================================================================
// TESTS
// =============================================================================
