//! # Subword Encoders
//!
//! A [`SubwordEncoder`] turns whitespace-tokenized lines into subword
//! sequences:
//! * each token is split by the configured [`WordIsolator`](crate::glossary::WordIsolator);
//! * each mergeable piece is merged with [`greedy_merge()`];
//! * the result passes through the configured [`SubwordFilter`](crate::vocab::SubwordFilter);
//! * every subword but the last of a token gets the separator.
//!
//! ## Building an Encoder
//!
//! ```rust,no_run
//! use wordsnip::encoders::EncoderOptions;
//!
//! fn example() -> wordsnip::WSResult<()> {
//!     let encoder = EncoderOptions::default()
//!         .with_separator("@@")
//!         .with_glossaries(["<url>", "USA"])
//!         .load("codes.bpe", None)?;
//!
//!     assert_eq!(encoder.process_line(""), "");
//!     Ok(())
//! }
//! ```

mod encoder_options;
mod greedy_merge;
mod merge_mode;
mod segmentation_cache;
mod subword_encoder;

#[doc(inline)]
pub use encoder_options::*;
#[doc(inline)]
pub use greedy_merge::*;
#[doc(inline)]
pub use merge_mode::*;
#[doc(inline)]
pub use segmentation_cache::*;
#[doc(inline)]
pub use subword_encoder::*;
