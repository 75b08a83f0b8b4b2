//! Generator Table Module
//!
//! Maps every fragment key to the function that produces its content.

use std::fmt;

use crate::cache::FragmentKey;

/// A zero-argument fragment producer.
///
/// Generators are expected to be synchronous, deterministic and free of side
/// effects. The cache treats their output as an opaque string.
pub type Generator = Box<dyn Fn() -> String + Send + Sync>;

// == Generator Table ==
/// Exhaustive key-to-generator mapping, fixed once handed to a cache.
pub struct GeneratorTable {
    /// Indexed by [`FragmentKey::index`]
    generators: Vec<Generator>,
}

impl GeneratorTable {
    // == Constructor ==
    /// Builds a table by asking `f` for the generator of every key.
    ///
    /// # Example
    /// ```
    /// use fragment_cache::cache::GeneratorTable;
    ///
    /// let table = GeneratorTable::from_fn(|key| Box::new(move || format!("<div>{key}</div>")));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(FragmentKey) -> Generator,
    {
        Self {
            generators: FragmentKey::ALL.iter().map(|key| f(*key)).collect(),
        }
    }

    // == Override ==
    /// Replaces the generator for a single key.
    pub fn with_generator<G>(mut self, key: FragmentKey, generator: G) -> Self
    where
        G: Fn() -> String + Send + Sync + 'static,
    {
        self.generators[key.index()] = Box::new(generator);
        self
    }

    // == Generate ==
    /// Runs the generator registered for `key`.
    ///
    /// A panicking generator unwinds straight through to the caller.
    pub fn generate(&self, key: FragmentKey) -> String {
        (self.generators[key.index()])()
    }
}

impl fmt::Debug for GeneratorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorTable")
            .field("generators", &self.generators.len())
            .finish()
    }
}
