//! Injectable clock and id sources.
//!
//! Components that stamp entities with a creation time or generate ids take
//! these as constructor parameters instead of reading process-wide state, so
//! a test can pin both.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub trait TimeProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant until `set` moves it.
#[derive(Debug)]
pub struct FixedTimeProvider {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedTimeProvider {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner()) = instant;
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always hands out the same id.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> String {
        self.id.clone()
    }
}

/// `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_moves_only_when_set() {
        let first = Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2020, 2, 2, 0, 0, 0).unwrap();
        let clock = FixedTimeProvider::new(first);
        assert_eq!(clock.now(), first);
        assert_eq!(clock.now(), first);
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn sequence_ids_are_monotonic() {
        let ids = SequenceIdGenerator::new("audit");
        assert_eq!(ids.next_id(), "audit-1");
        assert_eq!(ids.next_id(), "audit-2");
    }

    #[test]
    fn uuid_ids_parse() {
        let id = Uuid::parse_str(&UuidGenerator.next_id()).unwrap();
        assert_eq!(id.get_version_num(), 4);
    }
}
