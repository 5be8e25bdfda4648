// ============================================================================
// spark-classes - Hooks Module
// Class interception pipeline: interceptors and the ordered hook
// ============================================================================

pub mod dispatcher;
pub mod interceptor;

pub use dispatcher::{ClassHook, ClassHost, InterceptorId};
pub use interceptor::{for_property, ClassInterceptor, ForProperty};
