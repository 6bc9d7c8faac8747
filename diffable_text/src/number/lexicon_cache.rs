// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

use crate::{FormatService, Lexicon, LexiconError, LruCache, ThreadSafeLruCache,
            call_if_true, new_threadsafe_lru_cache};

const DEBUG_LEXICON_CACHE: bool = false;

/// Enough for the handful of locales and currencies one screen shows at a time.
pub const DEFAULT_LEXICON_CACHE_CAPACITY: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexiconKey {
    pub locale: String,
    pub currency: Option<String>,
}

/// Shared, bounded cache of [`Lexicon`]s keyed by locale (and currency code).
///
/// Clones share the same entries. Lexicons are immutable once built, so a cached one is
/// handed out as an [`Arc`]. Keys don't include the [`FormatService`]: use one cache per
/// service.
#[derive(Clone, Debug)]
pub struct LexiconCache {
    inner: ThreadSafeLruCache<LexiconKey, Arc<Lexicon>>,
}

impl Default for LexiconCache {
    fn default() -> Self { Self::new(DEFAULT_LEXICON_CACHE_CAPACITY) }
}

impl LexiconCache {
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: new_threadsafe_lru_cache(capacity),
        }
    }

    /// See [`Lexicon::standard`].
    ///
    /// # Errors
    ///
    /// Returns the [`LexiconError`] of building the lexicon. Failures are not cached.
    pub fn standard(
        &self,
        service: &dyn FormatService,
        locale: &str,
    ) -> Result<Arc<Lexicon>, LexiconError> {
        let key = LexiconKey {
            locale: locale.to_string(),
            currency: None,
        };
        self.get_or_build(&key, || Lexicon::standard(service, locale))
    }

    /// See [`Lexicon::currency`].
    ///
    /// # Errors
    ///
    /// Returns the [`LexiconError`] of building the lexicon. Failures are not cached.
    pub fn currency(
        &self,
        service: &dyn FormatService,
        locale: &str,
        code: &str,
    ) -> Result<Arc<Lexicon>, LexiconError> {
        let key = LexiconKey {
            locale: locale.to_string(),
            currency: Some(code.to_string()),
        };
        self.get_or_build(&key, || Lexicon::currency(service, locale, code))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.lock().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lock().is_empty() }

    #[must_use]
    pub fn contains(&self, key: &LexiconKey) -> bool { self.lock().contains_key(key) }

    pub fn clear(&self) { self.lock().clear(); }

    fn get_or_build(
        &self,
        key: &LexiconKey,
        build: impl FnOnce() -> Result<Lexicon, LexiconError>,
    ) -> Result<Arc<Lexicon>, LexiconError> {
        self.lock().get_or_try_insert_with(key, || {
            call_if_true!(DEBUG_LEXICON_CACHE, {
                tracing::debug!(message = "building lexicon", ?key);
            });
            build().map(Arc::new)
        })
    }

    /// A panic while holding the lock can't leave an entry half written, so a poisoned
    /// lock is still usable.
    fn lock(&self) -> MutexGuard<'_, LruCache<LexiconKey, Arc<Lexicon>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinFormatService, assert_eq2};

    #[test]
    fn test_shared_entries() {
        let cache = LexiconCache::new(2);
        let first = cache.standard(&BuiltinFormatService, "en_US").unwrap();
        let second = cache.clone().standard(&BuiltinFormatService, "en_US").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq2!(cache.len(), 1);

        let currency = cache.currency(&BuiltinFormatService, "en_US", "USD").unwrap();
        assert_eq2!(currency.label(), Some("$"));
        assert_eq2!(cache.len(), 2);
        assert!(cache.contains(&LexiconKey {
            locale: "en_US".into(),
            currency: Some("USD".into()),
        }));
    }

    #[test]
    fn test_eviction() {
        let cache = LexiconCache::new(1);
        cache.standard(&BuiltinFormatService, "en_US").unwrap();
        cache.standard(&BuiltinFormatService, "de_DE").unwrap();
        assert_eq2!(cache.len(), 1);
        assert!(!cache.contains(&LexiconKey {
            locale: "en_US".into(),
            currency: None,
        }));
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = LexiconCache::default();
        assert!(cache.standard(&BuiltinFormatService, "xx_XX").is_err());
        assert!(cache.currency(&BuiltinFormatService, "en_US", "usd").is_err());
        assert!(cache.is_empty());
    }
}
