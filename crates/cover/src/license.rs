use std::collections::HashMap;

use normalize::{normalize, Document, Word};

use crate::types::{LicenseKind, Options};

/// A license template compiled for matching: its normalized document plus an
/// index from each word to the positions where it occurs in the template.
pub(crate) struct CompiledLicense {
    pub(crate) name: String,
    pub(crate) kind: LicenseKind,
    pub(crate) doc: Document,
    pub(crate) start_indexes: HashMap<String, Vec<usize>>,
}

/// A run (or slop-merged sequence of runs) of input words matching the
/// license. Offsets are word indices in the input, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Submatch {
    /// Index of the first matched word.
    pub(crate) start: usize,
    /// Index of the first following word.
    pub(crate) end: usize,
    /// Index within the license just past the last matched word.
    pub(crate) license_end: usize,
    /// Number of words between start and end that actually match. Because of
    /// slop, this can be less than `end - start`.
    pub(crate) matched: usize,
}

impl CompiledLicense {
    pub(crate) fn compile(name: &str, text: &str) -> CompiledLicense {
        let doc = normalize(text.as_bytes());
        CompiledLicense {
            name: name.to_string(),
            kind: LicenseKind::from_name(name),
            start_indexes: start_indexes(&doc.words),
            doc,
        }
    }

    /// Describe the runs of `words` that match this license. The algorithm is
    /// a heuristic and can be defeated, but works well in practice.
    ///
    /// At each input position, every occurrence of that word in the license is
    /// a candidate anchor; the longest forward extension wins (first
    /// encountered on ties). Runs longer than `min_length` are admitted, then
    /// merged onto the previous submatch when the input gap is within `slop`
    /// and the anchor does not jump backwards in the license, or started
    /// fresh otherwise. The license cursor is never advanced between runs, so
    /// a file that contains two copies of one license produces two
    /// submatches.
    pub(crate) fn submatches(&self, words: &[Word], opts: &Options) -> Vec<Submatch> {
        let mut out: Vec<Submatch> = Vec::new();
        if words.is_empty() || self.doc.words.is_empty() {
            return out;
        }
        let min_length = opts.min_length_or_default();
        let slop = opts.slop_or_default();

        let mut k = 0;
        while k < words.len() {
            // Find the longest match starting with the word at k.
            let mut match_length = 0;
            let mut match_index = 0;
            if let Some(indexes) = self.start_indexes.get(words[k].text.as_str()) {
                for &index in indexes {
                    let mut j = k;
                    for w in &self.doc.words[index..] {
                        if j == words.len() || w.text != words[j].text {
                            break;
                        }
                        j += 1;
                    }
                    if j - k > match_length {
                        match_length = j - k;
                        match_index = index;
                    }
                }
            }

            if match_length > min_length {
                let end = k + match_length;
                // Does this run fit onto the previous submatch? The slop
                // allows text like
                //	Copyright (c) 2009 Snarfboodle Inc. All rights reserved.
                // to match
                //	Copyright (c) <year> <company>. All rights reserved.
                // and be considered a single span. A run that would jump
                // backwards in the license starts a new submatch instead.
                match out.last_mut() {
                    Some(prev) if prev.end + slop >= k && match_index >= prev.license_end => {
                        prev.end = end;
                        prev.matched += match_length;
                        prev.license_end = match_index + match_length;
                    }
                    _ => out.push(Submatch {
                        start: k,
                        end,
                        license_end: match_index + match_length,
                        matched: match_length,
                    }),
                }
                // The last word of the run is not rescanned, but may anchor
                // the next probe.
                k = end - 1;
            }
            k += 1;
        }
        out
    }
}

/// Map each word of a license to the ascending list of positions where it
/// occurs, built in one left-to-right pass.
fn start_indexes(words: &[Word]) -> HashMap<String, Vec<usize>> {
    let mut m: HashMap<String, Vec<usize>> = HashMap::with_capacity(words.len());
    for (i, w) in words.iter().enumerate() {
        m.entry(w.text.clone()).or_default().push(i);
    }
    m
}
