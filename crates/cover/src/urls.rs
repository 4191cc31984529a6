//! URL-based license detection.
//!
//! Some files identify a license by link rather than by reproducing its text,
//! most commonly Creative Commons. The finder scans the gaps between already
//! retained text matches (the whole document when there are none) for URLs,
//! canonicalizes each candidate, and looks it up in the checker's URL table.

use std::collections::HashMap;

use normalize::Document;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::types::{LicenseKind, Match};

// A simplified finder of URLs. Licenses have fairly simple URLs in practice,
// so the pattern only admits dot-separated labels under .org or com followed
// by slash-separated path segments. Matching is case-insensitive, and the
// scan runs over raw bytes so malformed UTF-8 elsewhere in the input is
// harmless.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    const PATH: &str = "[-a-z0-9_.#?=]+"; // Paths plus queries.
    const DOMAIN: &str = "[-a-z0-9_.]+";
    Regex::new(&format!(r"(?i)https?://({DOMAIN})+(\.org|com)(/{PATH})+/?"))
        .expect("URL pattern must compile")
});

/// Canonical form of a license URL: one leading scheme stripped, then a
/// trailing `/`, then a trailing `/legalcode` (common for Creative Commons),
/// then lowercased. Applied both when the table is built and when a candidate
/// is looked up.
pub(crate) fn canonical_url(url: &str) -> String {
    let url = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    let url = url.strip_suffix('/').unwrap_or(url);
    let url = url.strip_suffix("/legalcode").unwrap_or(url);
    url.to_ascii_lowercase()
}

/// Scan the gaps around `matches` for known license URLs and return them as
/// URL-flagged matches in word units, ready to be merged into the match list.
///
/// `matches` must be disjoint and sorted by start; the gaps walked are before
/// the first match, between consecutive matches, and after the last. A gap
/// spanning fewer than three words is too short to contain a plausible URL
/// and is skipped.
pub(crate) fn find_urls_between(
    doc: &Document,
    urls: &HashMap<String, String>,
    matches: &[Match],
) -> Vec<Match> {
    let mut out = Vec::new();
    if urls.is_empty() {
        return out;
    }

    let mut gap_start = 0;
    for i in 0..=matches.len() {
        let gap_end = match matches.get(i) {
            Some(m) => m.start,
            None => doc.words.len(),
        };
        let next_gap_start = matches.get(i).map(|m| m.end);

        if gap_end >= gap_start + 3 {
            // The words exclude numerals, so the last word might not be the
            // last text in the gap. Run to end of input when the gap is
            // final; otherwise a trailing URL could be cut off mid-path.
            let start = doc.words[gap_start].start;
            let end = if gap_end < doc.words.len() {
                doc.words[gap_end - 1].end()
            } else {
                doc.text.len()
            };

            for found in URL_RE.find_iter(&doc.text[start..end]) {
                let (u0, u1) = (start + found.start(), start + found.end());
                let Ok(candidate) = std::str::from_utf8(&doc.text[u0..u1]) else {
                    continue;
                };
                if let Some(name) = urls.get(&canonical_url(candidate)) {
                    out.push(Match {
                        name: name.clone(),
                        kind: LicenseKind::from_name(name),
                        percent: 100.0, // 100% of start..end is a license URL.
                        start: doc.word_offset(u0),
                        end: doc.word_offset(u1),
                        is_url: true,
                    });
                }
            }
        }

        match next_gap_start {
            Some(s) => gap_start = s,
            None => break,
        }
    }
    out
}
