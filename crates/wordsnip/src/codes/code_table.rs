//! # Merge Code Table
//!
//! An immutable, rank-ordered index of learned merge pairs.

use core::fmt;

use crate::types::{Rank, WSHashMap, hash_map_new};

/// The codes version this crate segments with.
///
/// Version 0.2 attaches the end-of-word marker to the final character.
/// Tables declaring another version still load, with a warning.
pub const SUPPORTED_CODES_VERSION: &str = "0.2";

/// An ordered ``(left, right)`` pair of adjacent symbols which may merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MergePair {
    /// The left symbol.
    pub left: String,

    /// The right symbol.
    pub right: String,
}

impl MergePair {
    /// Build a new pair.
    pub fn new<L, R>(
        left: L,
        right: R,
    ) -> Self
    where
        L: Into<String>,
        R: Into<String>,
    {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// The symbol produced by merging the pair.
    pub fn merged(&self) -> String {
        let mut merged = String::with_capacity(self.left.len() + self.right.len());
        merged.push_str(&self.left);
        merged.push_str(&self.right);
        merged
    }
}

impl<L, R> From<(L, R)> for MergePair
where
    L: Into<String>,
    R: Into<String>,
{
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

impl fmt::Display for MergePair {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

/// Rank-ordered merge pairs.
///
/// - `pairs[rank]` is the pair learned at `rank`; ranks are dense ``0..n``.
/// - `ranks` is ``{ left -> { right -> rank } }``, so lookups borrow `&str`.
/// - `merged` is ``{ left + right -> rank }``, keeping the lowest rank
///   when two pairs concatenate to the same symbol.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    pairs: Vec<MergePair>,
    ranks: WSHashMap<String, WSHashMap<String, Rank>>,
    merged: WSHashMap<String, Rank>,
    version: Option<String>,
}

impl CodeTable {
    /// Build a table from pairs in rank order.
    ///
    /// ## Arguments
    /// * `pairs` - the pairs; the n-th pair gets rank `n`.
    ///
    /// ## Returns
    /// The table. A repeated pair keeps its first rank and the repeat is
    /// skipped with a warning, so ranks stay dense.
    pub fn from_pairs<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<MergePair>,
    {
        let mut table = Self::default();
        for (idx, pair) in pairs.into_iter().enumerate() {
            table.push_pair(pair.into(), idx + 1);
        }
        table
    }

    /// Append the next-ranked pair.
    ///
    /// ## Arguments
    /// * `pair` - the pair.
    /// * `line` - the 1-based source line, for the duplicate warning.
    ///
    /// ## Returns
    /// `false` if the pair was already ranked and nothing was added.
    pub(crate) fn push_pair(
        &mut self,
        pair: MergePair,
        line: usize,
    ) -> bool {
        let rank = self.pairs.len();

        let rights = self
            .ranks
            .entry(pair.left.clone())
            .or_insert_with(hash_map_new);
        if let Some(&first) = rights.get(&pair.right) {
            log::warn!("Skipping duplicate merge pair on line {line}: {pair} (already rank {first})");
            return false;
        }
        rights.insert(pair.right.clone(), rank);

        self.merged.entry(pair.merged()).or_insert(rank);
        self.pairs.push(pair);

        true
    }

    /// Record the declared codes version.
    ///
    /// Versions other than [`SUPPORTED_CODES_VERSION`] are kept and warned about.
    pub(crate) fn set_version(
        &mut self,
        version: &str,
    ) {
        if version != SUPPORTED_CODES_VERSION {
            log::warn!(
                "Codes declare version {version}; segmenting with version {SUPPORTED_CODES_VERSION} rules"
            );
        }
        self.version = Some(version.to_string());
    }

    /// The declared codes version, if the source had a version header.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The number of merge pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up the rank of ``(left, right)``.
    pub fn rank(
        &self,
        left: &str,
        right: &str,
    ) -> Option<Rank> {
        self.ranks.get(left)?.get(right).copied()
    }

    /// Get the pair learned at `rank`.
    pub fn pair(
        &self,
        rank: Rank,
    ) -> Option<&MergePair> {
        self.pairs.get(rank)
    }

    /// Find the pair whose merge produced `merged`.
    ///
    /// ## Returns
    /// The lowest-ranked pair concatenating to `merged`, if any.
    pub fn lookup_merged(
        &self,
        merged: &str,
    ) -> Option<&MergePair> {
        self.merged.get(merged).map(|&rank| &self.pairs[rank])
    }

    /// Iterate over the pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &MergePair> {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_ranks() {
        let table = CodeTable::from_pairs([("l", "o"), ("lo", "w"), ("e", "r</w>")]);

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.version(), None);

        assert_eq!(table.rank("l", "o"), Some(0));
        assert_eq!(table.rank("lo", "w"), Some(1));
        assert_eq!(table.rank("e", "r</w>"), Some(2));
        assert_eq!(table.rank("o", "l"), None);
        assert_eq!(table.rank("x", "o"), None);

        assert_eq!(table.pair(1), Some(&MergePair::new("lo", "w")));
        assert_eq!(table.pair(3), None);

        assert_eq!(
            table.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
            vec!["l o", "lo w", "e r</w>"]
        );
    }

    #[test]
    fn test_lookup_merged() {
        let table = CodeTable::from_pairs([("a", "bc"), ("ab", "c"), ("l", "o")]);

        assert_eq!(table.lookup_merged("abc"), Some(&MergePair::new("a", "bc")));
        assert_eq!(table.lookup_merged("lo"), Some(&MergePair::new("l", "o")));
        assert_eq!(table.lookup_merged("low"), None);
    }

    #[test]
    fn test_merged_collision_keeps_lowest_rank() {
        let table = CodeTable::from_pairs([("ab", "c"), ("a", "bc")]);
        assert_eq!(table.rank("a", "bc"), Some(1));
        assert_eq!(table.lookup_merged("abc"), Some(&MergePair::new("ab", "c")));

        let table = CodeTable::from_pairs([("a", "bc"), ("ab", "c")]);
        assert_eq!(table.lookup_merged("abc"), Some(&MergePair::new("a", "bc")));
    }

    #[test]
    fn test_duplicate_pair() {
        let table = CodeTable::from_pairs([("l", "o"), ("o", "w"), ("l", "o"), ("lo", "w")]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.rank("l", "o"), Some(0));
        assert_eq!(table.rank("o", "w"), Some(1));
        assert_eq!(table.rank("lo", "w"), Some(2));
        assert_eq!(table.pair(2), Some(&MergePair::new("lo", "w")));

        let mut table = CodeTable::default();
        assert!(table.push_pair(MergePair::new("l", "o"), 1));
        assert!(!table.push_pair(MergePair::new("l", "o"), 2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_version() {
        let mut table = CodeTable::default();
        table.set_version("0.2");
        assert_eq!(table.version(), Some("0.2"));

        table.set_version("0.1");
        assert_eq!(table.version(), Some("0.1"));
    }
}
