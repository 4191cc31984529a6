//! Workspace umbrella crate for the license coverage engine.
//!
//! The `licensecover` crate re-exports the normalization and matching layers
//! so applications can drive the whole pipeline through a single dependency,
//! and provides the package-level [`cover`] entry point backed by the
//! built-in license corpus.
//!
//! ## Quick start
//!
//! ```rust
//! use licensecover::{cover, Options};
//!
//! let text = b"See https://opensource.org/licenses/MIT for terms.";
//! if let Some(coverage) = cover(text, Options::default()) {
//!     println!("{:.1}% covered", coverage.percent);
//!     for m in &coverage.matches {
//!         println!("{} at bytes {}..{}", m.name, m.start, m.end);
//!     }
//! }
//! ```
//!
//! An input may match several licenses; the reported matches are disjoint and
//! in input order, so a `LICENSE` file that concatenates two licenses yields
//! one match per element. Callers with their own license sets compile a
//! [`Checker`] from `License` records (or JSON via [`Checker::from_json`])
//! and call [`Checker::cover`] directly; the checker is immutable after
//! construction and safe to share across threads.
//!
//! ## Observability
//!
//! Structured per-call metrics can be captured by installing a
//! [`CoverMetrics`] recorder via [`set_cover_metrics`]. The hook receives the
//! call latency, the normalized input size, and the result counts, and is
//! typically registered once during startup.

pub use cover::{
    builtin, builtin_licenses, set_cover_metrics, Checker, CoverMetrics, Coverage, License,
    LicenseKind, Match, Options, SetError,
};
pub use normalize::{normalize, Document, Word};

/// Compute the coverage of the text according to the built-in license set.
///
/// Equivalent to `builtin().cover(input, opts)`. Returns `None` when no
/// match of any kind was found.
pub fn cover(input: &[u8], opts: Options) -> Option<Coverage> {
    builtin().cover(input, opts)
}
