// Metrics hooks for the match engine.
//
// Callers install a global `MatchMetrics` implementation via
// [`set_match_metrics`]; every `SkillMatcher::rank` call then reports its
// latency, pool size, and result count. This keeps instrumentation decoupled
// from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for ranking operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one ranking pass.
    ///
    /// `requester_id` is the caller-supplied identity of the requester,
    /// `latency` the wall-clock duration of the whole pass, `pool_size` the
    /// number of candidates offered, and `result_count` the number of matches
    /// returned after filtering and truncation.
    fn record_rank(
        &self,
        requester_id: &str,
        latency: Duration,
        pool_size: usize,
        result_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Typically called once during service startup so every `SkillMatcher`
/// shares the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}
