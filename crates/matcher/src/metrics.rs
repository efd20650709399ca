// Metrics hooks for the `matcher` crate.
//
// Callers install a global `CompareMetrics` implementation via
// [`set_compare_metrics`]; every `Matcher::compare` then reports its latency
// and window counts. Keeps instrumentation decoupled from any backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for comparisons.
pub trait CompareMetrics: Send + Sync {
    /// Record one finished comparison.
    ///
    /// `latency` covers both passes. Window counts are the number of
    /// fingerprints produced for each side; `match_count` is the number of
    /// candidate windows that tested present.
    fn record_compare(
        &self,
        latency: Duration,
        reference_windows: usize,
        candidate_windows: usize,
        match_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CompareMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CompareMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CompareMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global comparison metrics recorder.
pub fn set_compare_metrics(recorder: Option<Arc<dyn CompareMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
