use crate::document::{Document, Word};

/// Normalize raw bytes into a [`Document`].
///
/// The scan walks the input once, left to right. Runs of ASCII letters become
/// words, folded to lowercase; every other byte (digits, punctuation,
/// whitespace, any non-ASCII byte) is a separator. Numerals are therefore
/// never emitted, which is what lets copyright years vary between a template
/// and an input without breaking a match.
///
/// Normalization never fails. Invalid UTF-8 is ordinary separator data, and
/// empty input yields an empty word stream.
///
/// # Examples
///
/// ```rust
/// use normalize::normalize;
///
/// let doc = normalize(b"Copyright (c) 2024 Alice");
/// let words: Vec<&str> = doc.words.iter().map(|w| w.text.as_str()).collect();
/// assert_eq!(words, ["copyright", "c", "alice"]);
/// assert_eq!(doc.words[2].start, 19);
/// ```
pub fn normalize(input: &[u8]) -> Document {
    let mut words = Vec::with_capacity(input.len() / 8 + 1);
    let mut run_start: Option<usize> = None;

    for (idx, &b) in input.iter().enumerate() {
        if b.is_ascii_alphabetic() {
            if run_start.is_none() {
                run_start = Some(idx);
            }
        } else if let Some(start) = run_start.take() {
            words.push(make_word(input, start, idx));
        }
    }

    // The last run needs to be finalized after the loop.
    if let Some(start) = run_start {
        words.push(make_word(input, start, input.len()));
    }

    Document {
        text: input.to_vec(),
        words,
    }
}

fn make_word(input: &[u8], start: usize, end: usize) -> Word {
    let text = input[start..end]
        .iter()
        .map(|b| b.to_ascii_lowercase() as char)
        .collect();
    Word { text, start }
}
