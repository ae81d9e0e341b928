//! Vocabulary indexer mapping feature strings to dense integer indices.

use ahash::AHashMap;

use crate::error::{PolarityError, Result};

/// A bidirectional mapping between feature strings and indices.
///
/// Indices are handed out contiguously from 0 in first-seen order and are
/// never reassigned, so they can address a dense weight vector directly.
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    /// Feature string -> index.
    ids: AHashMap<String, usize>,
    /// Index -> feature string.
    objects: Vec<String>,
}

impl Indexer {
    /// Create a new empty indexer.
    pub fn new() -> Self {
        Indexer {
            ids: AHashMap::new(),
            objects: Vec::new(),
        }
    }

    /// Create with initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Indexer {
            ids: AHashMap::with_capacity(capacity),
            objects: Vec::with_capacity(capacity),
        }
    }

    /// Check if a key has been indexed.
    pub fn contains(&self, key: &str) -> bool {
        self.ids.contains_key(key)
    }

    /// Look up the index of a key.
    ///
    /// Returns a lookup error if the key was never added.
    pub fn index_of(&self, key: &str) -> Result<usize> {
        self.ids
            .get(key)
            .copied()
            .ok_or_else(|| PolarityError::lookup(format!("'{key}' is not in the vocabulary")))
    }

    /// Return the index of `key`, assigning the next free index if it is new.
    pub fn add_and_get_index(&mut self, key: &str) -> usize {
        if let Some(&index) = self.ids.get(key) {
            return index;
        }

        let index = self.objects.len();
        self.ids.insert(key.to_string(), index);
        self.objects.push(key.to_string());
        index
    }

    /// Get the key stored at `index`.
    pub fn get_object(&self, index: usize) -> Option<&str> {
        self.objects.get(index).map(String::as_str)
    }

    /// Get the number of indexed keys.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over `(index, key)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, key)| (index, key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_first_seen_order() {
        let mut indexer = Indexer::new();
        assert!(indexer.is_empty());

        assert_eq!(indexer.add_and_get_index("good"), 0);
        assert_eq!(indexer.add_and_get_index("bad"), 1);
        assert_eq!(indexer.add_and_get_index("good"), 0);
        assert_eq!(indexer.add_and_get_index("movie"), 2);
        assert_eq!(indexer.add_and_get_index("bad"), 1);

        assert_eq!(indexer.len(), 3);
        let keys: Vec<_> = indexer.iter().collect();
        assert_eq!(keys, vec![(0, "good"), (1, "bad"), (2, "movie")]);
    }

    #[test]
    fn test_lookup() {
        let mut indexer = Indexer::with_capacity(4);
        indexer.add_and_get_index("fun");

        assert!(indexer.contains("fun"));
        assert!(!indexer.contains("dull"));
        assert_eq!(indexer.index_of("fun").unwrap(), 0);
        assert_eq!(indexer.get_object(0), Some("fun"));
        assert_eq!(indexer.get_object(1), None);

        match indexer.index_of("dull") {
            Err(PolarityError::Lookup(msg)) => assert!(msg.contains("dull")),
            other => panic!("Expected lookup error, got {other:?}"),
        }
        assert_eq!(indexer.len(), 1);
    }
}
