use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Key-scoped storage: one value per key.
///
/// Used where callers always look things up by an owner key (license per
/// organization, metadata per API) rather than scanning the whole population.
pub struct MapStorage<K, V> {
    entries: Arc<RwLock<HashMap<K, V>>>,
}

/// One-to-many grouping: every key owns a list.
pub type MultiMapStorage<K, V> = MapStorage<K, Vec<V>>;

impl<K: Eq + Hash, V> MapStorage<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the whole map. A later duplicate key wins.
    pub fn init_with(&self, entries: impl IntoIterator<Item = (K, V)>) {
        let fresh: HashMap<K, V> = entries.into_iter().collect();
        *self.write_guard() = fresh;
    }

    pub fn reset(&self) {
        self.write_guard().clear();
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.read_guard().contains_key(key)
    }

    /// Returns the previous value, if any.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.write_guard().insert(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.write_guard().remove(key)
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> MapStorage<K, V> {
    pub fn get(&self, key: &K) -> Option<V> {
        self.read_guard().get(key).cloned()
    }

    pub fn snapshot(&self) -> HashMap<K, V> {
        self.read_guard().clone()
    }

    /// All values, in no particular order.
    pub fn values(&self) -> Vec<V> {
        self.read_guard().values().cloned().collect()
    }
}

impl<K: Eq + Hash + Clone, V: Clone + Default> MapStorage<K, V> {
    pub fn get_or_default(&self, key: &K) -> V {
        self.get(key).unwrap_or_default()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> MapStorage<K, Vec<V>> {
    pub fn push(&self, key: K, value: V) {
        self.write_guard().entry(key).or_default().push(value);
    }

    /// Values grouped under `key`, empty when the key is unknown.
    pub fn get_all(&self, key: &K) -> Vec<V> {
        self.get_or_default(key)
    }

    /// Drop the values under `key` matching `predicate`; returns how many went.
    pub fn remove_values_where<P>(&self, key: &K, predicate: P) -> usize
    where
        P: Fn(&V) -> bool,
    {
        let mut entries = self.write_guard();
        let Some(values) = entries.get_mut(key) else {
            return 0;
        };
        let before = values.len();
        values.retain(|value| !predicate(value));
        let removed = before - values.len();
        if values.is_empty() {
            entries.remove(key);
        }
        removed
    }
}

impl<K: Eq + Hash, V> Default for MapStorage<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for MapStorage<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("MapStorage")
            .field("entries", &*entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_missing_key_is_none_not_error() {
        let storage: MapStorage<String, u32> = MapStorage::new();
        assert_eq!(storage.get(&"org".to_string()), None);
        assert_eq!(storage.get_or_default(&"org".to_string()), 0);
    }

    #[test]
    fn init_with_replaces_the_whole_map() {
        let storage = MapStorage::new();
        storage.insert("old", 1);
        storage.init_with(vec![("a", 1), ("b", 2)]);
        assert!(!storage.contains_key(&"old"));
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get(&"b"), Some(2));
    }

    #[test]
    fn one_value_per_key() {
        let storage = MapStorage::new();
        assert_eq!(storage.insert("k", 1), None);
        assert_eq!(storage.insert("k", 2), Some(1));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn multi_map_groups_by_key() {
        let storage: MultiMapStorage<&str, &str> = MapStorage::new();
        storage.push("api-1", "m1");
        storage.push("api-1", "m2");
        storage.push("api-2", "m3");
        assert_eq!(storage.get_all(&"api-1"), vec!["m1", "m2"]);
        assert!(storage.get_all(&"api-3").is_empty());

        assert_eq!(storage.remove_values_where(&"api-2", |v| *v == "m3"), 1);
        assert!(!storage.contains_key(&"api-2"));
    }

    #[test]
    fn reset_empties() {
        let storage = MapStorage::new();
        storage.init_with(vec![(1, "a")]);
        storage.reset();
        storage.reset();
        assert!(storage.is_empty());
    }
}
