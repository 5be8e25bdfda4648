// ============================================================================
// spark-classes - Type Definitions
// Canonical class maps and the payload passed through class interceptors
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::constants::RESET_KEY;

// =============================================================================
// CLASS MAP
// =============================================================================
//
// A canonical class map is an ordered mapping from class name to inclusion
// flag. Insertion order is what the final class string is joined in, so the
// map is backed by IndexMap rather than HashMap.
//
// Overwriting an existing key keeps its original position (same as assigning
// onto an existing object property), which is what the merge relies on for
// last-write-wins without reordering.
// =============================================================================

/// Canonical class map: class name -> inclusion flag.
///
/// A missing key is equivalent to `false` for output purposes.
///
/// # Example
///
/// ```
/// use spark_classes::ClassMap;
///
/// let mut classes = ClassMap::from_tokens("btn  btn-primary");
/// classes.insert("btn-primary", false);
///
/// assert!(classes.is_on("btn"));
/// assert!(!classes.is_on("btn-primary"));
/// assert!(!classes.is_on("missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassMap(IndexMap<String, bool>);

impl ClassMap {
    /// Create an empty class map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Create an empty class map with room for `capacity` classes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Build a map from a whitespace-separated list of class names.
    ///
    /// Every token maps to `true`. Runs of whitespace never produce empty
    /// keys, and repeated tokens collapse into one entry.
    pub fn from_tokens(tokens: &str) -> Self {
        tokens.split_whitespace().map(|name| (name, true)).collect()
    }

    /// Set the flag for `name`, returning the previous flag if there was one.
    pub fn insert(&mut self, name: impl Into<String>, on: bool) -> Option<bool> {
        self.0.insert(name.into(), on)
    }

    /// Remove `name`, keeping the order of the remaining classes.
    pub fn remove(&mut self, name: &str) -> Option<bool> {
        self.0.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    /// True when `name` is present and set to `true`.
    pub fn is_on(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Remove the reserved reset key and report whether it was set.
    pub fn take_reset(&mut self) -> bool {
        self.remove(RESET_KEY).unwrap_or(false)
    }

    /// Assign every entry of `other` onto this map (last write wins).
    pub fn assign(&mut self, other: ClassMap) {
        self.0.extend(other.0);
    }

    /// Iterate over `(name, flag)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.0.iter().map(|(name, &on)| (name.as_str(), on))
    }

    /// Iterate over class names in insertion order, regardless of flag.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over the names whose flag is `true`.
    pub fn active(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().filter(|&(_, on)| on).map(|(name, _)| name)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut map = ClassMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, bool)> for ClassMap {
    fn extend<I: IntoIterator<Item = (K, bool)>>(&mut self, iter: I) {
        for (name, on) in iter {
            self.insert(name, on);
        }
    }
}

impl IntoIterator for ClassMap {
    type Item = (String, bool);
    type IntoIter = indexmap::map::IntoIter<String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<IndexMap<String, bool>> for ClassMap {
    fn from(map: IndexMap<String, bool>) -> Self {
        Self(map)
    }
}

// =============================================================================
// CLASS PAYLOAD
// =============================================================================

/// The value routed through a node's class hook: which composition key
/// (section) is being classed, and the merged classes for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPayload {
    pub property: String,
    pub classes: ClassMap,
}

impl ClassPayload {
    pub fn new(property: impl Into<String>, classes: ClassMap) -> Self {
        Self {
            property: property.into(),
            classes,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tokens_skips_empty_segments() {
        let map = ClassMap::from_tokens("  a   b\tc\n");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(map.iter().all(|(_, on)| on));
    }

    #[test]
    fn from_tokens_collapses_duplicates() {
        let map = ClassMap::from_tokens("a b a");
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut map = ClassMap::from_tokens("a b c");
        map.insert("a", false);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(map.active().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn take_reset_removes_the_key() {
        let mut map: ClassMap = [(RESET_KEY, true), ("x", true)].into_iter().collect();
        assert!(map.take_reset());
        assert!(!map.contains_key(RESET_KEY));
        assert!(!map.take_reset());

        let mut off: ClassMap = [(RESET_KEY, false)].into_iter().collect();
        assert!(!off.take_reset());
        assert!(off.is_empty());
    }

    #[test]
    fn remove_preserves_order() {
        let mut map = ClassMap::from_tokens("a b c d");
        map.remove("b");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn deserializes_from_json_object() {
        let map: ClassMap = serde_json::from_str(r#"{"z": true, "a": false}"#).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert!(map.is_on("z"));
        assert_eq!(map.get("a"), Some(false));
    }
}
