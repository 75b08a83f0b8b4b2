//! Insertion Order Module
//!
//! Remembers the order in which fragments were materialized.

use std::collections::VecDeque;

use crate::cache::FragmentKey;

// == Insertion Order ==
/// Tracks creation order of cached keys.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest entry
/// - Back = Most recently created entry
#[derive(Debug, Default)]
pub struct InsertionOrder {
    order: VecDeque<FragmentKey>,
}

impl InsertionOrder {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records a newly created entry.
    ///
    /// A key that is already tracked is moved to the back.
    pub fn push(&mut self, key: FragmentKey) {
        self.remove(key);
        self.order.push_back(key);
    }

    // == Remove ==
    /// Forgets a key. Returns whether it was tracked.
    pub fn remove(&mut self, key: FragmentKey) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.order.remove(idx);
                true
            }
            None => false,
        }
    }

    // == Position ==
    /// Creation rank of a key, 0 being the oldest.
    pub fn position(&self, key: FragmentKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Iterate ==
    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = FragmentKey> + '_ {
        self.order.iter().copied()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_push_keeps_creation_order() {
        let mut order = InsertionOrder::new();
        order.push(FragmentKey::Footer);
        order.push(FragmentKey::Header);
        order.push(FragmentKey::Styles);

        let keys: Vec<_> = order.iter().collect();
        assert_eq!(
            keys,
            vec![FragmentKey::Footer, FragmentKey::Header, FragmentKey::Styles]
        );
    }

    #[test]
    fn test_push_existing_moves_to_back() {
        let mut order = InsertionOrder::new();
        order.push(FragmentKey::Header);
        order.push(FragmentKey::Footer);
        order.push(FragmentKey::Header);

        assert_eq!(order.len(), 2);
        assert_eq!(order.position(FragmentKey::Footer), Some(0));
        assert_eq!(order.position(FragmentKey::Header), Some(1));
    }

    #[test]
    fn test_remove() {
        let mut order = InsertionOrder::new();
        order.push(FragmentKey::Header);
        order.push(FragmentKey::Footer);

        assert!(order.remove(FragmentKey::Header));
        assert!(!order.remove(FragmentKey::Header));
        assert_eq!(order.position(FragmentKey::Footer), Some(0));
        assert_eq!(order.position(FragmentKey::Header), None);
    }

    #[test]
    fn test_clear() {
        let mut order = InsertionOrder::new();
        order.push(FragmentKey::Scripts);
        order.push(FragmentKey::SearchBox);
        order.clear();
        assert!(order.is_empty());
    }
}
