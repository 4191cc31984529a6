//! Document types for the normalization pass.
//!
//! A [`Document`] is the normalized view of a text: the original bytes plus a
//! parallel stream of [`Word`]s, each carrying the byte offset of the run it
//! was scanned from. All downstream matching happens in word space; the
//! offsets are what let results be projected back into byte space at the end.
//!
//! # Offsets
//!
//! Offsets are **byte positions into the original, untouched input**. This is
//! deliberate: normalization is lossy (case folded, numerals dropped), and the
//! only stable coordinate system shared with the caller is the raw buffer it
//! handed in. Do not rewrite the input before scanning it, or the offsets stop
//! meaning anything.
//!
//! ```text
//! Input: "Copyright (c) 2024 Alice"
//!         0         1         2
//!         0123456789012345678901234
//!
//! Words: "copyright"@0  "c"@11  "alice"@19     (the year is dropped)
//! ```

use serde::{Deserialize, Serialize};

/// A normalized word and the byte offset of its source run in the original
/// input.
///
/// The word text is ASCII-lowercased letters; because case folding is
/// length-preserving, `text.len()` is also the byte length of the source run,
/// so `[start, start + text.len())` delimits the run in the original buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    /// The normalized word text.
    pub text: String,
    /// Byte offset of the first byte of the source run in the original input.
    pub start: usize,
}

impl Word {
    /// Byte length of the word (equal to the length of its source run).
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the word is empty. The scanner never emits empty words; this
    /// exists for completeness.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the last byte of the source run.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// The normalized view of a text.
///
/// Produced by [`normalize`](crate::normalize); immutable afterwards.
///
/// # Invariants
///
/// - `words[i].start` is strictly increasing in `i`.
/// - Normalizing the bytes at `words[i].start` yields `words[i].text`.
/// - Every word is non-empty, lowercase ASCII letters only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Document {
    /// The original bytes, retained for URL scanning and byte projection.
    pub text: Vec<u8>,
    /// The normalized word stream with offsets into `text`.
    pub words: Vec<Word>,
}

impl Document {
    /// Map a byte offset to a word index: the smallest `i` such that
    /// `words[i].start >= byte_offset`, or `words.len()` if no word starts at
    /// or after the offset.
    ///
    /// The scan is linear; it is only used for the handful of URL matches a
    /// cover call produces. `words[i].start` is sorted, so a binary search
    /// would behave identically.
    pub fn word_offset(&self, byte_offset: usize) -> usize {
        self.words
            .iter()
            .position(|w| w.start >= byte_offset)
            .unwrap_or(self.words.len())
    }
}
