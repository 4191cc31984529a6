//! Lossy word normalization with byte offsets into the original text.
//!
//! This crate is the first stage of the license coverage pipeline. It turns
//! raw bytes into a [`Document`]: the original text paired with an ordered
//! stream of normalized [`Word`]s, each recording where in the original buffer
//! it came from.
//!
//! # What normalization does
//!
//! - Runs of ASCII letters become words, folded to lowercase.
//! - Digits are dropped entirely; pure-numeric tokens never appear as words.
//! - Punctuation, whitespace, and non-ASCII bytes are separators.
//! - Each word records the byte offset of its source run.
//!
//! The rules are deliberately lossy. License texts differ from their templates
//! in copyright years, owner names, and punctuation; dropping numerals and
//! case means those differences either vanish or shrink to short gaps the
//! matcher can bridge.
//!
//! # Core guarantee
//!
//! > Same input bytes → identical `Document`, forever.
//!
//! Normalization is pure and total: no I/O, no configuration, no failure
//! modes. Malformed UTF-8 is processed byte-wise and cannot cause an error;
//! empty input yields an empty word stream. The same function is applied to
//! license templates at compile time and to inputs at cover time, which is the
//! property the matcher depends on.
//!
//! # Quick start
//!
//! ```rust
//! use normalize::normalize;
//!
//! let doc = normalize(b"Permission is hereby granted, free of charge");
//! assert_eq!(doc.words.len(), 7);
//! assert_eq!(doc.words[0].text, "permission");
//! assert_eq!(doc.words[0].start, 0);
//! ```

mod document;
mod scan;

pub use crate::document::{Document, Word};
pub use crate::scan::normalize;
