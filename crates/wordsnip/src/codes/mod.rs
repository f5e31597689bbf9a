//! # Merge Codes
//!
//! A [`CodeTable`] is loaded once from a codes file and shared read-only
//! by every encoder built from it.
//!
//! ## Loading Codes
//!
//! ```rust,no_run
//! use wordsnip::codes::{CodeTable, load_codes_path};
//!
//! fn example() -> wordsnip::WSResult<CodeTable> {
//!     let table = load_codes_path("codes.bpe")?;
//!     assert_eq!(table.rank("l", "o"), Some(0));
//!     Ok(table)
//! }
//! ```

mod code_table;
mod codes_io;

#[doc(inline)]
pub use code_table::*;
#[doc(inline)]
pub use codes_io::*;
