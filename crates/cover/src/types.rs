use serde::{Deserialize, Serialize};

use std::fmt;

/// Coarse grouping of licenses into families.
///
/// A license's kind is derived from its name: the first kind (in declaration
/// order) whose string form is a prefix of the name wins, so `GPL-3.0` and
/// `GPLv2-Classpath` are both [`LicenseKind::Gpl`]. Names that start with no
/// known family string fall back to [`LicenseKind::Other`]. The declaration
/// order is load-bearing: `AGPL` must be tested before `GPL`, or every AGPL
/// name would land in the wrong family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum LicenseKind {
    #[serde(rename = "AGPL")]
    Agpl,
    #[serde(rename = "Apache")]
    Apache,
    #[serde(rename = "BSD")]
    Bsd,
    #[serde(rename = "CC")]
    Cc,
    #[serde(rename = "GPL")]
    Gpl,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Unlicense")]
    Unlicense,
    #[serde(rename = "Zlib")]
    Zlib,
    #[serde(rename = "Other")]
    #[default]
    Other,
}

impl LicenseKind {
    /// The named families, in match order. `Other` is the fallback and is
    /// never matched by prefix.
    const NAMED: [LicenseKind; 9] = [
        LicenseKind::Agpl,
        LicenseKind::Apache,
        LicenseKind::Bsd,
        LicenseKind::Cc,
        LicenseKind::Gpl,
        LicenseKind::Json,
        LicenseKind::Mit,
        LicenseKind::Unlicense,
        LicenseKind::Zlib,
    ];

    /// The canonical string form, used both for display and prefix matching.
    pub fn as_str(self) -> &'static str {
        match self {
            LicenseKind::Agpl => "AGPL",
            LicenseKind::Apache => "Apache",
            LicenseKind::Bsd => "BSD",
            LicenseKind::Cc => "CC",
            LicenseKind::Gpl => "GPL",
            LicenseKind::Json => "JSON",
            LicenseKind::Mit => "MIT",
            LicenseKind::Unlicense => "Unlicense",
            LicenseKind::Zlib => "Zlib",
            LicenseKind::Other => "Other",
        }
    }

    /// Resolve the kind for a license name, first prefix match wins.
    pub fn from_name(name: &str) -> LicenseKind {
        Self::NAMED
            .iter()
            .copied()
            .find(|kind| name.starts_with(kind.as_str()))
            .unwrap_or(LicenseKind::Other)
    }
}

impl fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single license that can be recognized.
///
/// At least one of `text` or `url` should be set: a record with non-empty
/// `text` is compiled into a matchable template, a record with non-empty `url`
/// adds an entry to the URL lookup table (stored canonicalized; duplicate
/// canonical URLs are last-write-wins). Both may be set on one record. A
/// record with neither contributes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct License {
    /// Name of the license, e.g. `MIT` or `Apache-2.0`. Also determines the
    /// [`LicenseKind`] by prefix.
    pub name: String,
    /// Full template text, or empty for URL-only entries.
    #[serde(default)]
    pub text: String,
    /// A URL that identifies the license by reference, or empty.
    #[serde(default)]
    pub url: String,
}

/// Tuning knobs for the matching algorithm.
///
/// Zero values of `min_length` and `slop` fall back to the defaults at the
/// point of use. `threshold` is carried for callers that filter results by
/// quality; the engine itself reports raw coverage and never consults it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Options {
    /// Minimum length of a run, in words, to count as a matching substring.
    #[serde(default = "Options::default_min_length")]
    pub min_length: usize,
    /// Percentage threshold for callers that filter matches; preserved but not
    /// applied by the engine.
    #[serde(default = "Options::default_threshold")]
    pub threshold: usize,
    /// Maximum allowable gap, in input words, in a near-contiguous match.
    #[serde(default = "Options::default_slop")]
    pub slop: usize,
}

impl Options {
    pub(crate) fn default_min_length() -> usize {
        20
    }

    pub(crate) fn default_threshold() -> usize {
        40
    }

    pub(crate) fn default_slop() -> usize {
        8
    }

    pub(crate) fn min_length_or_default(&self) -> usize {
        if self.min_length == 0 {
            Self::default_min_length()
        } else {
            self.min_length
        }
    }

    pub(crate) fn slop_or_default(&self) -> usize {
        if self.slop == 0 {
            Self::default_slop()
        } else {
            self.slop
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_length: Self::default_min_length(),
            threshold: Self::default_threshold(),
            slop: Self::default_slop(),
        }
    }
}

/// How a section of the input matches one license.
///
/// While a cover call is in flight, `start` and `end` are word offsets; they
/// are converted to byte offsets into the original input before being handed
/// back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    /// Name of the matched license, after renaming (licenses with multiple
    /// template forms report one shared name).
    pub name: String,
    /// Family of the matched license.
    pub kind: LicenseKind,
    /// For text matches, the percentage of the license template's words found
    /// in this section. For URL matches, always `100.0`.
    pub percent: f64,
    /// Byte offset of the first matched word in the input.
    pub start: usize,
    /// Byte offset just past the last matched word in the input.
    pub end: usize,
    /// True when the match is a recognized license URL rather than license
    /// text. `start` and `end` then bracket the URL itself.
    pub is_url: bool,
}

impl Match {
    /// Whether two matches cover at least part of the same text.
    pub(crate) fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Words this match explains, weighted by its quality. Used to pick a
    /// survivor when two matches overlap.
    pub(crate) fn weighted_words(&self) -> f64 {
        self.percent * (self.end - self.start) as f64
    }
}

/// How the input text matches the license set, as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Coverage {
    /// Fraction of the input, in normalized words, explained by the retained
    /// matches, expressed as a percentage.
    pub percent: f64,
    /// The matches, disjoint and ordered by start offset. Typically one entry;
    /// a concatenation of licenses yields one entry per element.
    pub matches: Vec<Match>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_prefix_resolution() {
        assert_eq!(LicenseKind::from_name("MIT"), LicenseKind::Mit);
        assert_eq!(LicenseKind::from_name("GPL-3.0"), LicenseKind::Gpl);
        assert_eq!(LicenseKind::from_name("GPLv2-Classpath"), LicenseKind::Gpl);
        assert_eq!(LicenseKind::from_name("AGPL-3.0"), LicenseKind::Agpl);
        assert_eq!(LicenseKind::from_name("Apache-2.0-User"), LicenseKind::Apache);
        assert_eq!(LicenseKind::from_name("CC-BY-4.0"), LicenseKind::Cc);
        assert_eq!(LicenseKind::from_name("CommonsClause"), LicenseKind::Other);
        assert_eq!(LicenseKind::from_name(""), LicenseKind::Other);
    }

    #[test]
    fn agpl_resolves_before_gpl() {
        // Declaration order is observable: AGPL-1.0 must not land in Gpl.
        assert_ne!(LicenseKind::from_name("AGPL-1.0"), LicenseKind::Gpl);
    }

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.min_length, 20);
        assert_eq!(opts.threshold, 40);
        assert_eq!(opts.slop, 8);
    }

    #[test]
    fn zero_options_fall_back_to_defaults() {
        let opts = Options {
            min_length: 0,
            threshold: 0,
            slop: 0,
        };
        assert_eq!(opts.min_length_or_default(), 20);
        assert_eq!(opts.slop_or_default(), 8);
        // threshold has no fallback accessor: it is carried, never consulted.
        assert_eq!(opts.threshold, 0);
    }

    #[test]
    fn options_serde_round_trip() {
        let opts = Options {
            min_length: 10,
            threshold: 75,
            slop: 4,
        };
        let json = serde_json::to_string(&opts).expect("serialize options");
        let back: Options = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(opts, back);

        // Missing fields deserialize to the defaults.
        let sparse: Options = serde_json::from_str("{}").expect("deserialize empty");
        assert_eq!(sparse, Options::default());
    }

    #[test]
    fn license_serde_defaults_empty_fields() {
        let l: License =
            serde_json::from_str(r#"{"name":"CC-BY-4.0","url":"creativecommons.org/licenses/by/4.0"}"#)
                .expect("deserialize license");
        assert_eq!(l.name, "CC-BY-4.0");
        assert!(l.text.is_empty());
        assert!(!l.url.is_empty());
    }

    #[test]
    fn overlap_is_half_open() {
        let m = |start, end| Match {
            name: "MIT".into(),
            kind: LicenseKind::Mit,
            percent: 100.0,
            start,
            end,
            is_url: false,
        };
        assert!(m(0, 10).overlaps(&m(9, 20)));
        assert!(!m(0, 10).overlaps(&m(10, 20)));
        assert!(!m(10, 20).overlaps(&m(0, 10)));
        assert!(m(0, 20).overlaps(&m(5, 6)));
    }
}
