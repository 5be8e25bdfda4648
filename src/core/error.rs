// ============================================================================
// spark-classes - Errors
// ============================================================================

/// Errors produced while resolving class declarations or loading config.
///
/// The merge/dispatch path never fails; only resolution and config parsing do.
#[derive(Debug, thiserror::Error)]
pub enum ClassError {
    #[error("resolver chain for `{property}` exceeded {depth} hops")]
    ResolveDepthExceeded { property: String, depth: usize },

    #[error("invalid class config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClassError>;
