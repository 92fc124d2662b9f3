/// Fixture contract shared by every in-memory service.
///
/// Test setup seeds with `init_with`, assertions read `storage()`, teardown
/// calls `reset`.
pub trait InMemoryAlternative<T>: Resettable {
    /// Replace all contents with `items`, keeping their order.
    fn init_with(&self, items: Vec<T>);

    /// Owned copy of the current contents.
    fn storage(&self) -> Vec<T>;
}

/// Object-safe half of the fixture contract, so fakes over different entity
/// types can be reset together.
pub trait Resettable {
    fn reset(&self);
}

pub fn reset_all(fakes: &[&dyn Resettable]) {
    for fake in fakes {
        fake.reset();
    }
}

/// Implements `InMemoryAlternative` and `Resettable` for a fake whose data
/// lives in a `Storage<T>` field.
#[macro_export]
macro_rules! in_memory_alternative {
    ($service:ty, $entity:ty, $field:ident) => {
        impl $crate::storage::Resettable for $service {
            fn reset(&self) {
                self.$field.reset();
            }
        }

        impl $crate::storage::InMemoryAlternative<$entity> for $service {
            fn init_with(&self, items: Vec<$entity>) {
                self.$field.init_with(items);
            }

            fn storage(&self) -> Vec<$entity> {
                self.$field.snapshot()
            }
        }
    };
}
