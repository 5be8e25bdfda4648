// ============================================================================
// spark-classes - Constants
// Reserved keys and limits used by class resolution
// ============================================================================

// =============================================================================
// RESERVED KEYS
// =============================================================================

/// Reserved class key that discards everything accumulated before it.
///
/// Never emitted as a class name.
pub const RESET_KEY: &str = "$reset";

/// Node prop holding a per-section map of class declarations.
pub const CLASSES_PROP: &str = "classes";

/// Suffix appended to a section name to form its string class prop
/// (`"input"` -> `"inputClass"`).
pub const SECTION_CLASS_SUFFIX: &str = "Class";

// =============================================================================
// LIMITS
// =============================================================================

/// Default maximum number of resolver hops followed before giving up.
pub const MAX_RESOLVE_DEPTH: usize = 32;
