use dashmap::DashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// In-memory map whose entries expire a fixed time after insertion.
///
/// Expiry is lazy: an expired entry is simply reported as absent on read
/// and overwritten by the next insert. There is no background sweep.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: DashMap<K, (V, Instant)>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Lookup against an explicit clock reading.
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let entry = self.entries.get(key)?;
        let (value, stored_at) = entry.value();
        if now.saturating_duration_since(*stored_at) < self.ttl {
            Some(value.clone())
        } else {
            None
        }
    }

    /// Store a complete value. Overwrites whatever was there.
    pub fn insert(&self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    pub fn insert_at(&self, key: K, value: V, now: Instant) {
        self.entries.insert(key, (value, now));
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Stored entries, expired ones included until they are overwritten or cleared.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
