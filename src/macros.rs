// ============================================================================
// spark-classes - Ergonomic Macros
// ============================================================================

/// Build a [`ClassMap`](crate::ClassMap) from `name => flag` pairs.
///
/// # Usage
///
/// ```rust
/// use spark_classes::class_map;
///
/// let classes = class_map! { "btn" => true, "btn-active" => false };
/// assert!(classes.is_on("btn"));
/// assert_eq!(classes.len(), 2);
///
/// let empty = class_map! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! class_map {
    () => {
        $crate::ClassMap::new()
    };
    ($($name:expr => $on:expr),+ $(,)?) => {
        {
            let mut map = $crate::ClassMap::new();
            $( map.insert($name, $on); )+
            map
        }
    };
}
