//! Memoizing translation resolver.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use ymo_core::{context_key, key_hash};
use ymo_format::TranslationTable;

use crate::provider::ResourceProvider;

/// Counters for cache behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to hash the key.
    pub hashed: u64,
}

/// Translation service: a loaded table plus a resolution cache.
///
/// The cache is keyed by string content and maps each key to the hash of its
/// table entry, or `None` for a miss. It only grows. Lookups are total: a
/// missing translation, a poisoned lock or an empty table all fall back to
/// returning the input.
#[derive(Debug, Default)]
pub struct Translator {
    table: TranslationTable,
    pub(crate) cache: RwLock<HashMap<Box<str>, Option<u32>>>,
    hits: AtomicU64,
    hashed: AtomicU64,
}

impl Translator {
    pub fn new(table: TranslationTable) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    /// A translator that returns every string unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a table from raw bytes (malformed input degrades, never fails).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(TranslationTable::load(bytes))
    }

    /// Load the table the provider has for `language`, or an empty one.
    pub fn from_provider(provider: &dyn ResourceProvider, language: &str) -> Self {
        match provider.load(language) {
            Some(bytes) => Self::from_bytes(&bytes),
            None => {
                tracing::info!(language, "no translation table, using source strings");
                Self::empty()
            }
        }
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Translate `source`, or return it unchanged when there is no entry.
    pub fn resolve<'a>(&'a self, source: &'a str) -> &'a str {
        self.lookup(source).unwrap_or(source)
    }

    /// Translate `source` disambiguated by `context`.
    ///
    /// Looks up `"{context}\x04{source}"`; on a miss the context is dropped
    /// and `source` is returned unchanged.
    pub fn resolve_in_context<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(&context_key(context, source)).unwrap_or(source)
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(found) = self.cached(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return found.and_then(|hash| self.table.get(hash));
        }

        let hash = key_hash(key);
        self.hashed.fetch_add(1, Ordering::Relaxed);
        let found = self.table.contains(hash).then_some(hash);

        if let Ok(mut cache) = self.cache.write() {
            cache.entry(key.into()).or_insert(found);
        }

        found.and_then(|hash| self.table.get(hash))
    }

    fn cached(&self, key: &str) -> Option<Option<u32>> {
        self.cache.read().ok()?.get(key).copied()
    }

    pub fn stats(&self) -> ResolveStats {
        ResolveStats {
            hits: self.hits.load(Ordering::Relaxed),
            hashed: self.hashed.load(Ordering::Relaxed),
        }
    }

    /// Number of distinct keys resolved so far.
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl From<TranslationTable> for Translator {
    fn from(table: TranslationTable) -> Self {
        Self::new(table)
    }
}
