use std::fmt::{Debug, Display};

/// A stored domain object with a stable identity key.
///
/// The storage core only needs the key; every other field is payload.
/// Composite keys are dedicated structs implementing `Display` so that
/// they can be named in `NotFound` errors.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Key: Clone + PartialEq + Display + Debug + Send + Sync;

    /// Human readable entity name used in error messages and log events.
    const KIND: &'static str;

    fn key(&self) -> Self::Key;

    fn has_key(&self, key: &Self::Key) -> bool {
        self.key() == *key
    }
}

/// What a `delete` does when nothing matches the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Absence is a no-op.
    #[default]
    Lenient,
    /// Absence is a `NotFound` error.
    Strict,
}
