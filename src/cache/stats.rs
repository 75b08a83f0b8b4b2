//! Cache Statistics Module
//!
//! Running hit/miss counters and the derived snapshot reported by the cache.

use serde::Serialize;

use crate::cache::FragmentKey;

// == Hit Counters ==
/// The two running counters owned by the cache.
///
/// Both only ever grow, until [`HitCounters::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitCounters {
    /// Lookups served from an existing entry
    pub hits: u64,
    /// Lookups (or prewarm steps) that had to run a generator
    pub misses: u64,
}

impl HitCounters {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Reset ==
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Key Hits ==
/// Popularity of one cached fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyHits {
    pub key: FragmentKey,
    pub hit_count: u64,
}

// == Cache Stats ==
/// Point-in-time view of the cache, computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of fragments currently cached
    pub entry_count: usize,
    /// Hits since creation or the last clear
    pub total_hits: u64,
    /// Misses since creation or the last clear
    pub total_misses: u64,
    /// Sum of content byte lengths over current entries
    pub total_size_bytes: usize,
    /// Percentage of lookups served without generation, 0 when idle
    pub hit_rate: f64,
    /// Current entries, most hit first, ties in creation order
    pub entries_by_hits: Vec<KeyHits>,
}

impl CacheStats {
    // == Build ==
    /// Assembles a snapshot from the counters and the current entries.
    ///
    /// `entries` must be yielded in creation order. The sort is stable, so
    /// equal hit counts keep that order.
    pub fn from_parts<I>(counters: HitCounters, entries: I) -> Self
    where
        I: IntoIterator<Item = (FragmentKey, u64, usize)>,
    {
        let mut entry_count = 0;
        let mut total_size_bytes = 0;
        let mut entries_by_hits = Vec::new();

        for (key, hit_count, size_bytes) in entries {
            entry_count += 1;
            total_size_bytes += size_bytes;
            entries_by_hits.push(KeyHits { key, hit_count });
        }

        entries_by_hits.sort_by(|a, b| b.hit_count.cmp(&a.hit_count));

        Self {
            entry_count,
            total_hits: counters.hits,
            total_misses: counters.misses,
            total_size_bytes,
            hit_rate: hit_rate(counters.hits, counters.misses),
            entries_by_hits,
        }
    }

    // == Summary ==
    /// One-line report for periodic logging.
    pub fn summary(&self) -> String {
        let top = self
            .entries_by_hits
            .first()
            .map(|k| format!("{} ({} hits)", k.key, k.hit_count))
            .unwrap_or_else(|| "none".to_string());

        format!(
            "entries={} hits={} misses={} hit_rate={:.1}% size={}B top={}",
            self.entry_count,
            self.total_hits,
            self.total_misses,
            self.hit_rate,
            self.total_size_bytes,
            top
        )
    }
}

/// Hit percentage: `hits / (hits + misses) * 100`, or 0.0 with no lookups.
pub fn hit_rate(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64 * 100.0
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_new() {
        let counters = HitCounters::new();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
    }

    #[test]
    fn test_counters_reset() {
        let mut counters = HitCounters::new();
        counters.record_hit();
        counters.record_miss();
        counters.record_miss();
        counters.reset();
        assert_eq!(counters, HitCounters::default());
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(hit_rate(0, 0), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        assert_eq!(hit_rate(4, 0), 100.0);
    }

    #[test]
    fn test_hit_rate_all_misses() {
        assert_eq!(hit_rate(0, 3), 0.0);
    }

    #[test]
    fn test_hit_rate_three_hits_one_miss() {
        assert_eq!(hit_rate(3, 1), 75.0);
    }

    #[test]
    fn test_from_parts_sums_and_sorts() {
        let counters = HitCounters { hits: 3, misses: 3 };
        let stats = CacheStats::from_parts(
            counters,
            vec![
                (FragmentKey::Styles, 0, 10),
                (FragmentKey::Header, 2, 20),
                (FragmentKey::Footer, 1, 5),
            ],
        );

        assert_eq!(stats.entry_count, 3);
        assert_eq!(stats.total_size_bytes, 35);
        assert_eq!(stats.hit_rate, 50.0);
        let ranked: Vec<_> = stats.entries_by_hits.iter().map(|k| k.key).collect();
        assert_eq!(
            ranked,
            vec![FragmentKey::Header, FragmentKey::Footer, FragmentKey::Styles]
        );
    }

    #[test]
    fn test_from_parts_ties_keep_creation_order() {
        let stats = CacheStats::from_parts(
            HitCounters::new(),
            vec![
                (FragmentKey::Footer, 1, 0),
                (FragmentKey::Scripts, 1, 0),
                (FragmentKey::Header, 1, 0),
            ],
        );

        let ranked: Vec<_> = stats.entries_by_hits.iter().map(|k| k.key).collect();
        assert_eq!(
            ranked,
            vec![FragmentKey::Footer, FragmentKey::Scripts, FragmentKey::Header]
        );
    }

    #[test]
    fn test_summary_empty() {
        let stats = CacheStats::from_parts(HitCounters::new(), Vec::new());
        let line = stats.summary();
        assert!(line.contains("entries=0"));
        assert!(line.contains("top=none"));
    }

    #[test]
    fn test_serialize_camel_case() {
        let stats = CacheStats::from_parts(
            HitCounters { hits: 1, misses: 1 },
            vec![(FragmentKey::SkeletonTask, 1, 4)],
        );
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["entryCount"], 1);
        assert_eq!(json["totalSizeBytes"], 4);
        assert_eq!(json["entriesByHits"][0]["key"], "skeletonTask");
        assert_eq!(json["entriesByHits"][0]["hitCount"], 1);
    }
}
