//! # License coverage engine (`cover`)
//!
//! ## Purpose
//!
//! `cover` sits on top of the normalization layer (`normalize`) and decides
//! which known open-source licenses appear in an input text, where, and how
//! confidently. It compiles a set of license templates into an indexed form,
//! finds near-contiguous runs of input words that agree with each template,
//! arbitrates between overlapping candidates, resolves license URLs in the
//! remaining gaps, and reports the disjoint matches together with the overall
//! fraction of the input they explain.
//!
//! The matcher is noise-tolerant by construction: normalization drops
//! numerals and case, and short gaps between matching runs (copyright years,
//! owner names) are bridged rather than breaking a match.
//!
//! ## Core Types
//!
//! - [`License`]: a `(name, text, url)` record, the raw form of a template.
//! - [`Checker`]: a compiled license set; immutable, shareable, and the owner
//!   of [`Checker::cover`].
//! - [`Options`]: tuning knobs (`min_length`, `threshold`, `slop`).
//! - [`Match`] / [`Coverage`]: one finding, and the set of findings with the
//!   overall percentage.
//! - [`LicenseKind`]: coarse license family, derived from the name.
//!
//! ## Example Usage
//!
//! ```rust
//! use cover::{builtin, Options};
//!
//! let input = b"See https://opensource.org/licenses/MIT for terms.";
//! match builtin().cover(input, Options::default()) {
//!     Some(coverage) => {
//!         for m in &coverage.matches {
//!             println!("{} ({}) {:.1}% at {}..{}", m.name, m.kind, m.percent, m.start, m.end);
//!         }
//!     }
//!     None => println!("no known license found"),
//! }
//! ```
//!
//! ## Observability
//!
//! Install a [`CoverMetrics`] implementation via [`set_cover_metrics`] to
//! record per-call latency and result counts. This is typically done once
//! during startup so all [`Checker`] instances share the same metrics
//! backend.

mod builtin;
mod checker;
mod error;
mod license;
pub mod metrics;
mod types;
mod urls;

pub use crate::builtin::{builtin, builtin_licenses};
pub use crate::checker::Checker;
pub use crate::error::SetError;
pub use crate::metrics::{set_cover_metrics, CoverMetrics};
pub use crate::types::{Coverage, License, LicenseKind, Match, Options};
