use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Insertion-ordered in-memory collection.
///
/// `Storage::new()` owns its sequence. `Storage::shared_with` hands out a second
/// handle over the same sequence, for fakes that read what another fake writes.
pub struct Storage<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Storage<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Handle over the same backing sequence as `other`.
    pub fn shared_with(other: &Storage<T>) -> Self {
        Self {
            items: Arc::clone(&other.items),
        }
    }

    pub fn is_shared_with(&self, other: &Storage<T>) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    // Values only: a poisoned lock still guards a consistent Vec.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace all contents, keeping the input order.
    pub fn init_with(&self, items: impl IntoIterator<Item = T>) {
        let fresh: Vec<T> = items.into_iter().collect();
        *self.write_guard() = fresh;
    }

    pub fn reset(&self) {
        self.write_guard().clear();
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.read_guard().iter().position(predicate)
    }

    pub fn push(&self, item: T) {
        self.write_guard().push(item);
    }

    /// Replace the first element matching `predicate`, keeping its position.
    ///
    /// Gives the value back when nothing matched.
    pub fn replace_first<P>(&self, predicate: P, item: T) -> std::result::Result<usize, T>
    where
        P: Fn(&T) -> bool,
    {
        let mut items = self.write_guard();
        match items.iter().position(predicate) {
            Some(index) => {
                items[index] = item;
                Ok(index)
            }
            None => Err(item),
        }
    }

    /// Remove every element matching `predicate`, returning how many went.
    pub fn remove_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let mut items = self.write_guard();
        let before = items.len();
        items.retain(|item| !predicate(item));
        before - items.len()
    }

    /// Run `f` against a read-only view of the contents.
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.read_guard())
    }
}

impl<T: Clone> Storage<T> {
    /// Owned copy of the contents in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.read_guard().clone()
    }

    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.read_guard().iter().find(|item| predicate(item)).cloned()
    }

    /// Matches in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.read_guard()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.read_guard().get(index).cloned()
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("items", &*self.read_guard())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_replaces_and_keeps_order() {
        let storage = Storage::new();
        storage.init_with(vec!["x"]);
        storage.init_with(vec!["c", "a", "b"]);
        assert_eq!(storage.snapshot(), vec!["c", "a", "b"]);
    }

    #[test]
    fn init_with_does_not_alias_the_input() {
        let storage = Storage::new();
        let mut seed = vec![1, 2, 3];
        storage.init_with(seed.clone());
        seed.push(4);
        assert_eq!(storage.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn snapshot_is_detached() {
        let storage = Storage::new();
        storage.init_with(vec![1, 2]);
        let mut copy = storage.snapshot();
        copy.clear();
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn reset_is_idempotent() {
        let storage = Storage::new();
        storage.init_with(vec![1, 2]);
        storage.reset();
        storage.reset();
        assert!(storage.is_empty());
    }

    #[test]
    fn find_index_returns_first_match() {
        let storage = Storage::new();
        storage.init_with(vec![1, 4, 6, 8]);
        assert_eq!(storage.find_index(|n| n % 2 == 0), Some(1));
        assert_eq!(storage.find_index(|n| *n > 100), None);
    }

    #[test]
    fn replace_first_keeps_position() {
        let storage = Storage::new();
        storage.init_with(vec!["a", "b", "c"]);
        assert_eq!(storage.replace_first(|s| *s == "b", "B"), Ok(1));
        assert_eq!(storage.snapshot(), vec!["a", "B", "c"]);
        assert_eq!(storage.replace_first(|s| *s == "z", "Z"), Err("Z"));
    }

    #[test]
    fn remove_where_counts_removed() {
        let storage = Storage::new();
        storage.init_with(vec![1, 2, 3, 4]);
        assert_eq!(storage.remove_where(|n| n % 2 == 0), 2);
        assert_eq!(storage.snapshot(), vec![1, 3]);
        assert_eq!(storage.remove_where(|n| *n == 42), 0);
    }

    #[test]
    fn shared_handles_see_each_other() {
        let owner = Storage::new();
        let reader = Storage::shared_with(&owner);
        owner.push(7);
        assert_eq!(reader.snapshot(), vec![7]);
        assert!(reader.is_shared_with(&owner));
        assert!(!Storage::<i32>::new().is_shared_with(&owner));
    }
}
