//! Cache Module
//!
//! Memoizes dashboard fragments so each one is generated at most once per
//! cache lifetime, with hit/miss introspection.

mod accessors;
mod entry;
mod generators;
mod key;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use generators::{Generator, GeneratorTable};
pub use key::FragmentKey;
pub use order::InsertionOrder;
pub use stats::{hit_rate, CacheStats, HitCounters, KeyHits};
pub use store::FragmentCache;

// == Public Constants ==
/// Number of fragments in the registry
pub const FRAGMENT_COUNT: usize = FragmentKey::ALL.len();
