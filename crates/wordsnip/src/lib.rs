//! # `wordsnip` Subword Segmentation
//!
//! `wordsnip` applies a learned table of BPE merge operations ("codes")
//! to whitespace-tokenized text, splitting words into subword units and
//! marking internal splits with a continuation marker (`@@` by default).
//!
//! It reads the `subword-nmt` codes format (version 0.2 word-final
//! handling) and the `<token> <count>` vocabulary format.
//!
//! See:
//! * [`codes`] to load and index merge codes.
//! * [`vocab`] to load vocabularies and re-split out-of-vocabulary subwords.
//! * [`glossary`] to protect literal strings from being split.
//! * [`encoders`] to segment lines and words.
//!
//! ## Segmenting Text
//!
//! ```rust,no_run
//! use wordsnip::encoders::SubwordEncoder;
//!
//! fn example() -> wordsnip::WSResult<()> {
//!     let encoder = SubwordEncoder::from_paths("codes.bpe", "vocab.txt")?;
//!
//!     let line = encoder.process_line("  the lowest  ");
//!     println!("{line}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Dropout
//!
//! BPE-dropout randomly skips eligible merges. Dropout results are never
//! cached; pass a seeded [`rand::Rng`] for reproducible output.
//!
//! ```rust,no_run
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordsnip::encoders::{DropoutRate, SubwordEncoder};
//!
//! fn example(encoder: &SubwordEncoder) -> wordsnip::WSResult<String> {
//!     let mut rng = StdRng::seed_from_u64(7);
//!     let rate = DropoutRate::new(0.1)?;
//!     Ok(encoder.process_line_with_dropout("the lowest", rate, &mut rng))
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod codes;
pub mod encoders;
pub mod errors;
pub mod glossary;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use codes::{CodeTable, MergePair};
#[doc(inline)]
pub use encoders::{EncoderOptions, SubwordEncoder};
#[doc(inline)]
pub use errors::{WSResult, WordsnipError};
#[doc(inline)]
pub use vocab::Vocabulary;
