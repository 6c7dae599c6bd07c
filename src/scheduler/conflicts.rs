use super::{AssignOptions, Conflict, ConflictKind, Scheduler};
use crate::model::{LocationId, WorkerId};
use chrono::{Duration, NaiveDateTime};
use std::collections::{BTreeSet, HashSet};

type Placement = (NaiveDateTime, LocationId, WorkerId);

pub(super) fn verify(scheduler: &Scheduler, opts: AssignOptions) -> Vec<Conflict> {
    let roster = &scheduler.roster;
    let mut out = Vec::new();

    for slot in &roster.slots {
        let at = slot.start();
        let mut seen = HashSet::new();
        for (location, workers) in &slot.schedule {
            for worker in workers {
                if !seen.insert(worker) {
                    out.push(Conflict {
                        kind: ConflictKind::DoubleBooking,
                        at,
                        worker: Some(worker.clone()),
                        location: Some(location.clone()),
                    });
                }
            }
        }
    }

    for location in &roster.locations {
        for (at, workers) in &location.schedule {
            if workers.len() > location.max_workers as usize {
                out.push(Conflict {
                    kind: ConflictKind::OverCapacity,
                    at: *at,
                    worker: None,
                    location: Some(location.id.clone()),
                });
            }
        }
    }

    let rest = Duration::hours(i64::from(opts.rest_hours));
    for worker in &roster.workers {
        let starts: Vec<NaiveDateTime> = worker.schedule.keys().copied().collect();
        for pair in starts.windows(2) {
            if let [a, b] = pair {
                if *b < *a + rest {
                    out.push(Conflict {
                        kind: ConflictKind::RestViolation,
                        at: *b,
                        worker: Some(worker.id.clone()),
                        location: worker.schedule.get(b).cloned(),
                    });
                }
            }
        }
    }

    let by_worker: BTreeSet<Placement> = roster
        .workers
        .iter()
        .flat_map(|w| {
            w.schedule
                .iter()
                .map(|(at, loc)| (*at, loc.clone(), w.id.clone()))
        })
        .collect();
    let by_location: BTreeSet<Placement> = roster
        .locations
        .iter()
        .flat_map(|l| {
            l.schedule.iter().flat_map(move |(at, ws)| {
                ws.iter().map(move |w| (*at, l.id.clone(), w.clone()))
            })
        })
        .collect();
    let by_slot: BTreeSet<Placement> = roster
        .slots
        .iter()
        .flat_map(|s| {
            let at = s.start();
            s.schedule.iter().flat_map(move |(loc, ws)| {
                ws.iter().map(move |w| (at, loc.clone(), w.clone()))
            })
        })
        .collect();

    let mismatched: BTreeSet<&Placement> = by_worker
        .symmetric_difference(&by_location)
        .chain(by_worker.symmetric_difference(&by_slot))
        .collect();
    for (at, location, worker) in mismatched {
        out.push(Conflict {
            kind: ConflictKind::LedgerMismatch,
            at: *at,
            worker: Some(worker.clone()),
            location: Some(location.clone()),
        });
    }

    out
}
