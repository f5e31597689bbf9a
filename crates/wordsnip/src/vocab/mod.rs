//! # Vocabularies
//!
//! A [`Vocabulary`] is a ``{ token -> count }`` map, usually produced by
//! counting an already-segmented corpus. Encoders may use one to re-split
//! merged subwords which are rare or missing; see [`VocabularySplitter`].

mod subword_filter;
mod vocab_io;
mod vocabulary;

#[doc(inline)]
pub use subword_filter::*;
#[doc(inline)]
pub use vocab_io::*;
#[doc(inline)]
pub use vocabulary::*;
