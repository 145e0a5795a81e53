use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// In-memory key/value store with per-entry expiration.
///
/// Expiry is lazy: an entry is evicted when a `get` observes that its
/// deadline has passed. There is no background sweeper and no size bound;
/// unbounded growth is an accepted limitation of a single-process
/// deployment. Each process instance has an independent cache.
///
/// Interior locking makes a shared `Arc<TtlCache<..>>` safe for concurrent
/// request handlers; both operations are synchronous and non-suspending.
pub struct TtlCache<K, V> {
    inner: Mutex<HashMap<K, Entry<V>>>,
    default_ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create an empty cache whose [`insert`](Self::insert) uses
    /// `default_ttl`.
    #[must_use]
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Look up `key`, treating an expired entry as absent.
    ///
    /// The check and the eviction happen under one lock: once an expiry has
    /// been observed, the stale entry is gone before the miss is reported.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut guard = self.inner.lock().expect("cache mutex poisoned");
        if let Some(entry) = guard.get(key)
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.value.clone());
        }
        // Expired or absent; drop whatever is stored before reporting a miss.
        guard.remove(key);
        None
    }

    /// Store `value` under `key` with the cache-wide default TTL,
    /// overwriting any existing entry.
    pub fn insert(&self, key: K, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    /// Store `value` under `key` with an explicit TTL.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.inner
            .lock()
            .expect("cache mutex poisoned")
            .insert(key, entry);
    }

    /// Number of entries currently held, counting not-yet-evicted stale
    /// ones. Intended for test inspection.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache mutex poisoned").len()
    }

    /// Whether the cache holds no entries at all.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
