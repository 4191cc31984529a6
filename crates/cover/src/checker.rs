use std::collections::HashMap;
use std::time::Instant;

use normalize::{normalize, Document};

use crate::error::SetError;
use crate::license::{CompiledLicense, Submatch};
use crate::metrics::metrics_recorder;
use crate::types::{Coverage, License, Match, Options};
use crate::urls;


/// A `Checker` matches input text against a fixed set of known licenses.
///
/// Construction compiles every template once; afterwards the checker is
/// immutable, so a single instance can be shared freely across threads and
/// every [`cover`](Checker::cover) call is independent.
pub struct Checker {
    licenses: Vec<CompiledLicense>,
    urls: HashMap<String, String>,
}

impl Checker {
    /// Compile a checker that recognizes the given licenses.
    ///
    /// A record with non-empty `text` becomes a matchable template; a record
    /// with non-empty `url` adds a URL-table entry (stored in canonical form,
    /// last write wins on duplicates). Records with neither are ignored. The
    /// order of the templates is kept: when two equal-quality matches overlap,
    /// the earlier license in this order survives arbitration.
    pub fn new(licenses: &[License]) -> Checker {
        let mut compiled = Vec::with_capacity(licenses.len());
        let mut urls = HashMap::new();
        for l in licenses {
            if !l.text.is_empty() {
                compiled.push(CompiledLicense::compile(&l.name, &l.text));
            }
            if !l.url.is_empty() {
                urls.insert(urls::canonical_url(&l.url), l.name.clone());
            }
        }
        Checker {
            licenses: compiled,
            urls,
        }
    }

    /// Compile a checker from a JSON array of license records.
    pub fn from_json(data: &[u8]) -> Result<Checker, SetError> {
        let licenses: Vec<License> = serde_json::from_slice(data)?;
        if licenses.is_empty() {
            return Err(SetError::EmptySet);
        }
        Ok(Checker::new(&licenses))
    }

    /// Number of compiled license templates.
    pub fn license_count(&self) -> usize {
        self.licenses.len()
    }

    /// Number of entries in the URL lookup table.
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    /// Compute how the input text is covered by the checker's license set.
    ///
    /// An input may match multiple licenses; the returned matches are
    /// disjoint, in input order, with at most one match retained for each
    /// section of the input. Returns `None` when no match of any kind was
    /// found.
    pub fn cover(&self, input: &[u8], opts: Options) -> Option<Coverage> {
        let started = Instant::now();
        let doc = normalize(input);

        // Match the input against all licenses. Each license may produce
        // several submatches, usually indicating several licenses in a file;
        // each becomes a separate candidate match.
        let mut matches: Vec<Match> = Vec::new();
        for license in &self.licenses {
            for s in license.submatches(&doc.words, &opts) {
                matches.push(make_match(license, &s));
            }
        }

        let coverage = if matches.is_empty() {
            // No text matched anything; the whole document is one gap for the
            // URL finder.
            let mut url_matches = urls::find_urls_between(&doc, &self.urls, &[]);
            if url_matches.is_empty() {
                None
            } else {
                let percent = coverage_percent(&doc, &url_matches);
                to_byte_offsets(&doc, &mut url_matches);
                Some(Coverage {
                    percent,
                    matches: url_matches,
                })
            }
        } else {
            // Sort into input order so coverage is sequential, then winnow
            // overlapping candidates down to the best disjoint set.
            sort_matches(&mut matches);
            arbitrate(&mut matches);

            // Look for URLs in the remaining gaps.
            let url_matches = urls::find_urls_between(&doc, &self.urls, &matches);
            if !url_matches.is_empty() {
                matches.extend(url_matches);
                sort_matches(&mut matches);
            }

            // Compute the overall percentage before overwriting offsets.
            let percent = coverage_percent(&doc, &matches);
            to_byte_offsets(&doc, &mut matches);
            Some(Coverage { percent, matches })
        };

        if let Some(recorder) = metrics_recorder() {
            let match_count = coverage.as_ref().map_or(0, |c| c.matches.len());
            recorder.record_cover(
                started.elapsed(),
                doc.words.len(),
                match_count,
                coverage.is_some(),
            );
        }
        coverage
    }
}

/// Renaming for licenses represented by multiple template texts.
fn canonical_name(name: &str) -> &str {
    match name {
        // Apache-2.0 has two forms.
        "Apache-2.0-User" => "Apache-2.0",
        _ => name,
    }
}

fn make_match(license: &CompiledLicense, s: &Submatch) -> Match {
    Match {
        name: canonical_name(&license.name).to_string(),
        kind: license.kind,
        percent: 100.0 * s.matched as f64 / license.doc.words.len() as f64,
        start: s.start,
        end: s.end,
        is_url: false,
    }
}

/// Stable sort by start offset. Stability makes tie order equal to license
/// order in the checker, which arbitration relies on.
fn sort_matches(matches: &mut [Match]) {
    matches.sort_by_key(|m| m.start);
}

/// Winnow overlapping matches down to a disjoint set: of each overlapping
/// pair, the match explaining fewer weighted words is discarded, with ties
/// killing the later entry. A killed match takes no further part.
fn arbitrate(matches: &mut Vec<Match>) {
    let mut killed = vec![false; matches.len()];
    for i in 0..matches.len() {
        if killed[i] {
            continue;
        }
        for j in i + 1..matches.len() {
            if killed[j] || !matches[i].overlaps(&matches[j]) {
                continue;
            }
            if matches[i].weighted_words() < matches[j].weighted_words() {
                killed[i] = true;
                break;
            }
            killed[j] = true;
        }
    }
    let mut idx = 0;
    matches.retain(|_| {
        let keep = !killed[idx];
        idx += 1;
        keep
    });
}

/// Total percentage of input words explained by `matches`, which are still in
/// word units at this point.
fn coverage_percent(doc: &Document, matches: &[Match]) -> f64 {
    if doc.words.is_empty() {
        return 0.0;
    }
    let mut match_length = 0;
    for (i, m) in matches.iter().enumerate() {
        if m.is_url {
            match_length += end_pos(doc, matches, i) - start_pos(matches, i);
        } else {
            match_length += m.end - m.start;
        }
    }
    100.0 * match_length as f64 / doc.words.len() as f64
}

/// Starting position of match `i` for coverage purposes. A URL match's own
/// offsets bracket just the URL, so it is credited with the surrounding gap:
/// back to the previous match, or to the midpoint when the previous match is
/// also a URL, or to the start of the input.
fn start_pos(matches: &[Match], i: usize) -> usize {
    let m = &matches[i];
    if !m.is_url {
        return m.start;
    }
    if i == 0 {
        return 0;
    }
    let prev = &matches[i - 1];
    if !prev.is_url {
        return prev.end;
    }
    (m.start + prev.end) / 2
}

/// The complement of [`start_pos`].
fn end_pos(doc: &Document, matches: &[Match], i: usize) -> usize {
    let m = &matches[i];
    if !m.is_url {
        return m.end;
    }
    if i == matches.len() - 1 {
        return doc.words.len();
    }
    let next = &matches[i + 1];
    if !next.is_url {
        return next.start;
    }
    (m.end + next.start) / 2
}

/// Convert the matches' word offsets into byte offsets in the original input.
/// Applies uniformly: URL matches carry word offsets bracketing the URL, so
/// the projection yields the URL's byte span.
fn to_byte_offsets(doc: &Document, matches: &mut [Match]) {
    for m in matches.iter_mut() {
        let last = &doc.words[m.end - 1];
        m.start = doc.words[m.start].start;
        m.end = last.end();
    }
}
