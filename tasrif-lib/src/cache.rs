use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

use sieve_cache::SieveCache;

use crate::error::CacheError;

/// A bounded memo table with SIEVE eviction, shareable across threads.
pub struct MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    cache: Mutex<SieveCache<K, V>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let cache = SieveCache::new(capacity).map_err(|error| CacheError(error.to_string()))?;
        Ok(Self {
            cache: Mutex::new(cache),
        })
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, key: &K, compute: impl FnOnce() -> V) -> V {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = cache.get(key) {
            return value.clone();
        }
        let value = compute();
        cache.insert(key.clone(), value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> std::fmt::Debug for MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache").field("len", &self.len()).finish()
    }
}
