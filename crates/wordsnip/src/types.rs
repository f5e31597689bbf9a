//! # Common Types

/// The priority of a merge; the 0-based order in which it was learned.
///
/// Lower ranks merge first.
pub type Rank = usize;

/// The end-of-word marker appended to the final symbol of a word.
pub const END_OF_WORD: &str = "</w>";

/// The default continuation marker.
pub const DEFAULT_SEPARATOR: &str = "@@";

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WSHashMap<K, V> {
            WSHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WSHashMap<K, V> {
            WSHashMap::with_capacity(capacity)
        }
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WSHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WSHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type WSHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WSHashMap<K, V> {
            WSHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WSHashMap<K, V> {
            WSHashMap::with_capacity(capacity)
        }
    }
}
