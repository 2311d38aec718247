//! Order-sensitive hash combining.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Folds a sequence of values into one hash, in order.
///
/// Equal sequences always produce the same result within one build;
/// permuting the sequence changes it.
#[derive(Debug, Clone, Default)]
pub struct HashCombiner {
    hasher: DefaultHasher,
    count: usize,
}

impl HashCombiner {
    /// Creates an empty combiner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one value to the fold.
    pub fn add<T: Hash + ?Sized>(&mut self, value: &T) {
        self.hasher.write_usize(self.count);
        value.hash(&mut self.hasher);
        self.count += 1;
    }

    /// Returns the number of values added so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Finishes the fold.
    #[must_use]
    pub fn finish(self) -> u64 {
        self.hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combine(values: &[i64]) -> u64 {
        let mut combiner = HashCombiner::new();
        for value in values {
            combiner.add(value);
        }
        combiner.finish()
    }

    #[test]
    fn test_combiner_deterministic() {
        assert_eq!(combine(&[1, 2, 3]), combine(&[1, 2, 3]));
    }

    #[test]
    fn test_combiner_order_sensitive() {
        assert_ne!(combine(&[1, 2]), combine(&[2, 1]));
    }

    #[test]
    fn test_combiner_empty_is_constant() {
        assert_eq!(combine(&[]), combine(&[]));
        assert!(HashCombiner::new().is_empty());
    }

    #[test]
    fn test_combiner_counts() {
        let mut combiner = HashCombiner::new();
        combiner.add("a");
        combiner.add(&7u8);
        assert_eq!(combiner.len(), 2);
    }
}
