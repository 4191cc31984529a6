// Metrics hooks for the `cover` crate.
//
// Callers install a global `CoverMetrics` implementation via
// [`set_cover_metrics`], then every `Checker` reports per-call latency and
// result counts for each call to `Checker::cover`. This keeps instrumentation
// decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for cover operations.
pub trait CoverMetrics: Send + Sync {
    /// Record the outcome of a cover call.
    ///
    /// `latency` is the wall-clock duration of the call, `input_words` the
    /// size of the normalized input, `match_count` the number of matches
    /// returned after arbitration, and `found` whether any match of any kind
    /// was reported.
    fn record_cover(
        &self,
        latency: Duration,
        input_words: usize,
        match_count: usize,
        found: bool,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CoverMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CoverMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CoverMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global cover metrics recorder.
///
/// This is typically called once during service startup so all `Checker`
/// instances share the same metrics backend.
pub fn set_cover_metrics(recorder: Option<Arc<dyn CoverMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("cover metrics lock poisoned");
    *guard = recorder;
}
