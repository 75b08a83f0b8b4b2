//! Fragment Cache Module
//!
//! Main cache engine: at-most-once generation per key, hit/miss accounting
//! and lifecycle operations (prewarm, invalidate, clear).

use std::collections::HashMap;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, FragmentKey, GeneratorTable, HitCounters, InsertionOrder};

// == Fragment Cache ==
/// Memoizes the output of a [`GeneratorTable`].
///
/// Between creation (or the last `clear`/`invalidate` of a key) and the next
/// invalidation, each key's generator runs at most once. All operations are
/// synchronous and take `&mut self` when they can mutate, so a single owner
/// sees a consistent store.
#[derive(Debug)]
pub struct FragmentCache {
    /// Materialized fragments
    entries: HashMap<FragmentKey, CacheEntry>,
    /// Creation order of the cached keys
    order: InsertionOrder,
    /// Running hit/miss counters
    counters: HitCounters,
    /// Content producers, one per key
    generators: GeneratorTable,
}

impl FragmentCache {
    // == Constructor ==
    /// Creates an empty cache over the given generators.
    pub fn new(generators: GeneratorTable) -> Self {
        Self {
            entries: HashMap::with_capacity(FragmentKey::ALL.len()),
            order: InsertionOrder::new(),
            counters: HitCounters::new(),
            generators,
        }
    }

    // == Get ==
    /// Returns the fragment for `key`, generating it on first use.
    ///
    /// A hit bumps the entry's hit count and the global hit counter. A miss
    /// runs the generator once, stores a fresh entry and bumps the miss
    /// counter. A panicking generator leaves the cache untouched.
    pub fn get(&mut self, key: FragmentKey) -> String {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.record_hit();
            self.counters.record_hit();
            debug!(key = %key, hit_count = entry.hit_count, "fragment cache hit");
            return entry.content.clone();
        }

        let content = self.materialize(key);
        debug!(key = %key, size = content.len(), "fragment cache miss");
        content
    }

    // == Has ==
    /// Checks membership without touching statistics.
    pub fn has(&self, key: FragmentKey) -> bool {
        self.entries.contains_key(&key)
    }

    // == Prewarm ==
    /// Generates every key that is not cached yet, in registry order.
    ///
    /// Existing entries keep their `created_at` and `hit_count`. Each
    /// generation counts as a miss. Returns how many entries were created.
    pub fn prewarm(&mut self) -> usize {
        let mut generated = 0;
        for key in FragmentKey::ALL {
            if !self.entries.contains_key(&key) {
                self.materialize(key);
                generated += 1;
            }
        }

        info!(
            generated,
            entries = self.entries.len(),
            "fragment cache prewarmed"
        );
        generated
    }

    // == Invalidate ==
    /// Drops the entry for `key`. Returns whether one was removed.
    ///
    /// Counters and other entries are left alone.
    pub fn invalidate(&mut self, key: FragmentKey) -> bool {
        let removed = self.entries.remove(&key).is_some();
        if removed {
            self.order.remove(key);
            debug!(key = %key, "fragment invalidated");
        }
        removed
    }

    // == Clear ==
    /// Drops every entry and resets both counters.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.counters.reset();
        info!(dropped, "fragment cache cleared");
    }

    // == Entry ==
    /// Read-only view of the stored entry, without touching statistics.
    pub fn entry(&self, key: FragmentKey) -> Option<&CacheEntry> {
        self.entries.get(&key)
    }

    // == Keys ==
    /// Cached keys, oldest entry first.
    pub fn keys(&self) -> Vec<FragmentKey> {
        self.order.iter().collect()
    }

    // == Stats ==
    /// Computes a fresh statistics snapshot. Never mutates the cache.
    pub fn stats(&self) -> CacheStats {
        let entries = self.order.iter().filter_map(|key| {
            self.entries
                .get(&key)
                .map(|entry| (key, entry.hit_count, entry.size_bytes()))
        });
        CacheStats::from_parts(self.counters, entries)
    }

    // == Length ==
    /// Returns the current number of cached fragments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Materialize ==
    /// Miss path shared by `get` and `prewarm`.
    ///
    /// The generator runs before any state changes.
    fn materialize(&mut self, key: FragmentKey) -> String {
        let content = self.generators.generate(key);
        self.entries.insert(key, CacheEntry::new(content.clone()));
        self.order.push(key);
        self.counters.record_miss();
        content
    }
}
