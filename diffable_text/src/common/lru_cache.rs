// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounded LRU (Least Recently Used) storage.
//!
//! [`crate::LexiconCache`] keeps one [`crate::Lexicon`] per `(locale, currency)` pair
//! here. Building a lexicon means formatting sample values through a
//! [`crate::FormatService`], which is comparatively expensive, so entries are kept around.
//! The capacity is fixed so that an app that cycles through many locales does not grow
//! the cache without limit.
//!
//! - Lookups use [`rustc_hash::FxHashMap`]. Keys are trusted locale identifiers, not
//!   adversarial input.
//! - Recency is tracked with a monotonic access counter. The entry with the smallest
//!   counter is evicted when a new key arrives at capacity.
//!
//! ```
//! use diffable_text::LruCache;
//!
//! let mut cache = LruCache::<&str, u32>::new(2);
//! cache.insert("en_US", 1);
//! cache.insert("de_DE", 2);
//! cache.get(&"en_US");
//! cache.insert("fr_FR", 3);
//! assert!(cache.contains_key(&"en_US"));
//! assert!(!cache.contains_key(&"de_DE"));
//! ```

use std::{hash::Hash,
          sync::{Arc, Mutex}};

use rustc_hash::{FxBuildHasher, FxHashMap};

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    last_access: u64,
}

/// A capacity bounded map that evicts the least recently used entry.
#[derive(Debug)]
pub struct LruCache<K, V> {
    map: FxHashMap<K, CacheEntry<V>>,
    capacity: usize,
    access_counter: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// # Panics
    ///
    /// Panics if capacity is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Cache capacity must be greater than 0");
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            capacity,
            access_counter: 0,
        }
    }

    /// Returns the value for `key` and marks it as recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.access_counter += 1;
        let access = self.access_counter;
        self.map.get_mut(key).map(|entry| {
            entry.last_access = access;
            &entry.value
        })
    }

    /// Inserts `value` for `key`, evicting the least recently used entry if a new key
    /// arrives while the cache is full. Returns the previous value for `key`, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.access_counter += 1;

        if self.map.len() >= self.capacity
            && !self.map.contains_key(&key)
            && let Some(lru_key) = self
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(k, _)| k.clone())
        {
            self.map.remove(&lru_key);
        }

        let entry = CacheEntry {
            value,
            last_access: self.access_counter,
        };
        self.map.insert(key, entry).map(|it| it.value)
    }

    /// Returns a clone of the cached value for `key`, or builds it with `create`, caches
    /// it, and returns it. Errors from `create` are passed through and nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns whatever error `create` returns.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: &K,
        create: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(key) {
            return Ok(value.clone());
        }
        let value = create()?;
        self.insert(key.clone(), value.clone());
        Ok(value)
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.access_counter = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Does NOT update the access time of the entry.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool { self.map.contains_key(key) }
}

/// Thread-safe wrapper for [`LruCache`]. All operations acquire the mutex.
pub type ThreadSafeLruCache<K, V> = Arc<Mutex<LruCache<K, V>>>;

#[must_use]
pub fn new_threadsafe_lru_cache<K, V>(capacity: usize) -> ThreadSafeLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    Arc::new(Mutex::new(LruCache::new(capacity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_replace() {
        let mut cache = LruCache::new(3);

        assert_eq!(cache.insert("en_US", 1), None);
        assert_eq!(cache.get(&"en_US"), Some(&1));
        assert_eq!(cache.insert("en_US", 2), Some(1));
        assert_eq!(cache.get(&"en_US"), Some(&2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 3);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let mut cache = LruCache::new(3);
        cache.insert("en_US", 1);
        cache.insert("de_DE", 2);
        cache.insert("fr_FR", 3);

        // Touch two of them, so "fr_FR" is the least recently used.
        cache.get(&"en_US");
        cache.get(&"de_DE");

        cache.insert("sv_SE", 4);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&"fr_FR"), None);
        assert_eq!(cache.get(&"en_US"), Some(&1));
        assert_eq!(cache.get(&"de_DE"), Some(&2));
        assert_eq!(cache.get(&"sv_SE"), Some(&4));
    }

    #[test]
    fn test_get_or_try_insert_with() {
        let mut cache = LruCache::<&str, String>::new(2);
        let mut builds = 0;

        for _ in 0..3 {
            let value = cache
                .get_or_try_insert_with(&"en_US", || {
                    builds += 1;
                    Ok::<_, ()>("lexicon".to_string())
                })
                .unwrap();
            assert_eq!(value, "lexicon");
        }
        assert_eq!(builds, 1);

        let result = cache.get_or_try_insert_with(&"xx_XX", || Err("unknown locale"));
        assert_eq!(result, Err("unknown locale"));
        assert!(!cache.contains_key(&"xx_XX"));
    }

    #[test]
    fn test_clear() {
        let mut cache = LruCache::new(3);
        cache.insert("en_US", 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    #[should_panic(expected = "Cache capacity must be greater than 0")]
    fn test_zero_capacity_panics() { let _cache = LruCache::<String, i32>::new(0); }

    #[test]
    fn test_thread_safe_cache() {
        let cache = new_threadsafe_lru_cache(4);
        let handles: Vec<_> = (0..4)
            .map(|it| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.lock().unwrap().insert(it, it * 10);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.lock().unwrap().len(), 4);
    }
}
