//! # Glossary Isolation
//!
//! A [`WordIsolator`] runs before merging, splitting a word into
//! [`WordPiece`]s. Atomic pieces are emitted verbatim; mergeable pieces are
//! segmented with the merge codes.
//!
//! ```rust
//! use wordsnip::glossary::{Glossary, WordIsolator, WordPiece};
//!
//! let glossary = Glossary::new(["<url>", "USA"]).unwrap();
//! assert_eq!(
//!     glossary.isolate("fromUSA<url>"),
//!     vec![
//!         WordPiece::Mergeable("from"),
//!         WordPiece::Atomic("USA"),
//!         WordPiece::Atomic("<url>"),
//!     ]
//! );
//! ```

mod glossary_isolator;

#[doc(inline)]
pub use glossary_isolator::*;
