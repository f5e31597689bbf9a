//! # Token Frequency Vocabulary

use crate::types::{WSHashMap, hash_map_new};

/// `{ token -> count }` vocabulary, with an optional frequency threshold.
///
/// Tokens counted below the threshold are not [`contains`](Self::contains)
/// members, but their counts are still retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    counts: WSHashMap<String, u64>,
    threshold: Option<u64>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            counts: hash_map_new(),
            threshold: None,
        }
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut vocab = Self::default();
        for (token, count) in iter {
            vocab.insert(token, count);
        }
        vocab
    }
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token count; returns the previous count.
    pub fn insert<S: Into<String>>(
        &mut self,
        token: S,
        count: u64,
    ) -> Option<u64> {
        self.counts.insert(token.into(), count)
    }

    /// The minimum count for membership, if any.
    pub fn threshold(&self) -> Option<u64> {
        self.threshold
    }

    /// Set the minimum count for membership.
    pub fn set_threshold(
        &mut self,
        threshold: Option<u64>,
    ) {
        self.threshold = threshold;
    }

    /// Set the minimum count for membership, and return the vocabulary.
    pub fn with_threshold(
        mut self,
        threshold: Option<u64>,
    ) -> Self {
        self.set_threshold(threshold);
        self
    }

    /// The raw count of `token`, ignoring the threshold.
    pub fn count(
        &self,
        token: &str,
    ) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Is `token` present with a count meeting the threshold?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.count(token)
            .is_some_and(|count| self.threshold.is_none_or(|t| count >= t))
    }

    /// The number of entries, ignoring the threshold.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
