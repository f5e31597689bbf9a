//! # Segmentation Cache

use parking_lot::Mutex;

use crate::types::{WSHashMap, hash_map_new};

/// The default number of entries a [`SegmentationCache`] may exceed
/// before it is cleared.
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1000;

/// Interior-mutable ``{ word -> subwords }`` memo for deterministic merges.
///
/// Eviction is all-or-nothing: an insertion into a cache holding more than
/// `max_entries` entries first clears the whole cache. Correctness never
/// depends on which entries survive.
#[derive(Debug)]
pub struct SegmentationCache {
    max_entries: usize,
    entries: Mutex<WSHashMap<String, Vec<String>>>,
}

impl Default for SegmentationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_MAX_ENTRIES)
    }
}

impl Clone for SegmentationCache {
    /// Clones start empty.
    fn clone(&self) -> Self {
        Self::new(self.max_entries)
    }
}

impl SegmentationCache {
    /// Create a new cache.
    ///
    /// ## Arguments
    /// * `max_entries` - the size which, once exceeded, triggers a clear.
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            entries: Mutex::new(hash_map_new()),
        }
    }

    /// The configured clear threshold.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Look up a cached segmentation.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<Vec<String>> {
        self.entries.lock().get(word).cloned()
    }

    /// Cache a segmentation, clearing the cache first if it is over capacity.
    pub fn insert(
        &self,
        word: &str,
        subwords: Vec<String>,
    ) {
        let mut entries = self.entries.lock();
        if entries.len() > self.max_entries {
            log::trace!("Clearing segmentation cache at {} entries", entries.len());
            entries.clear();
        }
        entries.insert(word.to_string(), subwords);
    }

    /// The number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
