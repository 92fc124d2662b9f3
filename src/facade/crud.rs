use crate::config::InMemoryConfig;
use crate::core::{DeletePolicy, Entity, Result, StoreError};
use crate::storage::Storage;
use tracing::{Level, event};

/// Create/update/delete/get over a `Storage<T>`, keyed by `Entity::key`.
///
/// Identity assignment is the caller's job: `create` stores what it is given.
pub struct CrudFacade<T> {
    storage: Storage<T>,
    log_mutations: bool,
}

impl<T: Entity> CrudFacade<T> {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            storage: Storage::new(),
            log_mutations: config.log_mutations,
        }
    }

    /// Façade over the same data as `other`.
    pub fn shared_with(other: &CrudFacade<T>) -> Self {
        Self {
            storage: Storage::shared_with(&other.storage),
            log_mutations: other.log_mutations,
        }
    }

    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    pub fn init_with(&self, items: Vec<T>) {
        self.storage.init_with(items);
    }

    pub fn reset(&self) {
        self.storage.reset();
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.storage.snapshot()
    }

    fn trace(&self, action: &'static str, key: &T::Key) {
        if self.log_mutations {
            event!(Level::DEBUG, kind = T::KIND, key = %key, action, "in-memory mutation");
        }
    }

    pub fn create(&self, entity: T) -> Result<T> {
        self.trace("create", &entity.key());
        self.storage.push(entity.clone());
        Ok(entity)
    }

    /// Replace the stored entity with the same key, keeping its position.
    pub fn update(&self, entity: T) -> Result<T> {
        let key = entity.key();
        match self.storage.replace_first(|stored| stored.has_key(&key), entity.clone()) {
            Ok(_) => {
                self.trace("update", &key);
                Ok(entity)
            }
            Err(_) => Err(StoreError::not_found(T::KIND, key)),
        }
    }

    /// Lenient delete: a missing key is not an error.
    pub fn delete(&self, key: &T::Key) -> Result<()> {
        self.delete_with(key, DeletePolicy::Lenient)
    }

    pub fn delete_with(&self, key: &T::Key, policy: DeletePolicy) -> Result<()> {
        let removed = self.storage.remove_where(|stored| stored.has_key(key));
        if removed == 0 && policy == DeletePolicy::Strict {
            return Err(StoreError::not_found(T::KIND, key));
        }
        if removed > 0 {
            self.trace("delete", key);
        }
        Ok(())
    }

    /// Strict lookup.
    pub fn get(&self, key: &T::Key) -> Result<T> {
        self.find_by_id(key)
            .ok_or_else(|| StoreError::not_found(T::KIND, key))
    }

    /// Lenient lookup.
    pub fn find_by_id(&self, key: &T::Key) -> Option<T> {
        self.storage.find(|stored| stored.has_key(key))
    }

    pub fn exists(&self, key: &T::Key) -> bool {
        self.storage.find_index(|stored| stored.has_key(key)).is_some()
    }
}

impl<T: Entity> Default for CrudFacade<T> {
    fn default() -> Self {
        Self::new()
    }
}
