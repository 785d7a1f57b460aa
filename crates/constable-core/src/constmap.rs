//! The resolved name-to-value mapping for one architecture.

use indexmap::IndexMap;

/// An insertion-ordered mapping from constant name to value.
///
/// Entries keep the order in which resolution first bound them, so a scan
/// is observable step by step; emission sorts by name instead. A name is
/// bound at most once at any point: inserting again overwrites in place,
/// and removal makes a later insert start a fresh entry at the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantMap {
    entries: IndexMap<String, i64>,
}

impl ConstantMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Binds `name` to `value`, overwriting any live binding.
    pub fn insert(&mut self, name: impl Into<String>, value: i64) {
        self.entries.insert(name.into(), value);
    }

    /// Returns the current value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    /// Removes the binding for `name`. Preserves the relative order of the
    /// remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<i64> {
        self.entries.shift_remove(name)
    }

    /// Returns true if `name` is currently bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Layers `other` on top of this map: every entry of `other` is
    /// inserted, overwriting same-name entries already present.
    pub fn merge_from(&mut self, other: &ConstantMap) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Iterates names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns all entries sorted by name ascending, the emission order.
    pub fn sorted_entries(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }
}

impl FromIterator<(String, i64)> for ConstantMap {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut map = ConstantMap::new();
        map.insert("EPERM", 1);
        map.insert("ENOENT", 2);
        map.insert("EPERM", 100);

        assert_eq!(map.get("EPERM"), Some(100));
        assert_eq!(map.len(), 2);
        let names: Vec<_> = map.names().collect();
        assert_eq!(names, vec!["EPERM", "ENOENT"]);
    }

    #[test]
    fn test_remove_then_reinsert() {
        let mut map = ConstantMap::new();
        map.insert("EAGAIN", 11);
        assert_eq!(map.remove("EAGAIN"), Some(11));
        assert!(!map.contains("EAGAIN"));

        map.insert("EAGAIN", 35);
        assert_eq!(map.get("EAGAIN"), Some(35));
    }

    #[test]
    fn test_merge_from_later_wins() {
        let mut base: ConstantMap = [("read".to_string(), 0), ("write".to_string(), 1)]
            .into_iter()
            .collect();
        let overlay: ConstantMap = [("write".to_string(), 64), ("openat".to_string(), 56)]
            .into_iter()
            .collect();

        base.merge_from(&overlay);
        assert_eq!(base.get("read"), Some(0));
        assert_eq!(base.get("write"), Some(64));
        assert_eq!(base.get("openat"), Some(56));
    }

    #[test]
    fn test_sorted_entries() {
        let map: ConstantMap = [
            ("ENOENT".to_string(), 2),
            ("EPERM".to_string(), 1),
            ("EACCES".to_string(), 13),
        ]
        .into_iter()
        .collect();

        let sorted = map.sorted_entries();
        assert_eq!(
            sorted,
            vec![("EACCES", 13), ("ENOENT", 2), ("EPERM", 1)]
        );
    }
}
