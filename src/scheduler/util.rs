use super::AssignOptions;
use crate::model::Worker;
use chrono::{Duration, NaiveDateTime};

/// A worker may start at `at` if their latest commitment plus the rest
/// period falls strictly before it.
pub(super) fn rested_before(worker: &Worker, at: NaiveDateTime, opts: AssignOptions) -> bool {
    let rest = Duration::hours(i64::from(opts.rest_hours));
    worker.last_shift().map_or(true, |last| last + rest < at)
}

/// Stable sort, least recently worked first; never-assigned workers lead.
///
/// Ascending, not most-recent-first: the longest-idle worker is offered the
/// next place.
pub(super) fn sort_by_recency(pool: &mut [usize], workers: &[Worker]) {
    pool.sort_by_key(|&idx| workers[idx].last_shift());
}

/// Workers not on leave, in recency order.
pub(super) fn eligible_pool(workers: &[Worker]) -> Vec<usize> {
    let mut pool: Vec<usize> = workers
        .iter()
        .enumerate()
        .filter(|(_, w)| !w.on_leave)
        .map(|(idx, _)| idx)
        .collect();
    sort_by_recency(&mut pool, workers);
    pool
}
