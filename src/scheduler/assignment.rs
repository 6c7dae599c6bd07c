use super::{recorder, util, AssignOptions, CapacityWarning, Leftovers, Scheduler, Unfilled};
use crate::model::{Location, Roster, ScheduleSlot, ShiftNumber, Worker, WorkerId};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// Staffing level a sweep fills each location up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Minimum,
    Maximum,
}

impl Target {
    fn of(self, location: &Location) -> usize {
        let n = match self {
            Target::Minimum => location.min_workers,
            Target::Maximum => location.max_workers,
        };
        n as usize
    }
}

/// Pass 1: every slot, every location up to its minimum.
///
/// The pool is rebuilt (and recency sorted) whenever the date changes, so a
/// worker takes at most one shift per date in this pass. Whoever is still in
/// the pool after the third shift of a date is handed to the maximum pass.
pub(super) fn fill_minimum(scheduler: &mut Scheduler, opts: AssignOptions) -> (Leftovers, usize) {
    let Roster {
        workers,
        locations,
        slots,
    } = &mut scheduler.roster;

    let mut leftovers = Leftovers::default();
    let mut pool: Vec<usize> = Vec::new();
    let mut current: Option<NaiveDate> = None;
    let mut placed = 0usize;

    for slot in slots.iter_mut() {
        if current != Some(slot.date) {
            pool = util::eligible_pool(workers);
            current = Some(slot.date);
        }

        placed += fill_slot(slot, workers, locations, &mut pool, Target::Minimum, opts);

        if slot.shift == ShiftNumber::Third && !pool.is_empty() {
            debug!(date = %slot.date, count = pool.len(), "workers left for maximum pass");
            for &idx in &pool {
                leftovers.push(slot.date, workers[idx].id.clone());
            }
        }
    }

    info!(placed, leftover = leftovers.total(), "minimum pass done");
    (leftovers, placed)
}

/// Pass 2: same slot order, each location topped up to its maximum from the
/// workers the minimum pass left over on that date.
pub(super) fn fill_maximum(
    scheduler: &mut Scheduler,
    leftovers: Leftovers,
    opts: AssignOptions,
) -> usize {
    let Roster {
        workers,
        locations,
        slots,
    } = &mut scheduler.roster;

    let index: HashMap<WorkerId, usize> = workers
        .iter()
        .enumerate()
        .map(|(idx, w)| (w.id.clone(), idx))
        .collect();
    let mut buckets: BTreeMap<NaiveDate, Vec<usize>> = leftovers
        .by_date
        .into_iter()
        .map(|(date, ids)| {
            let pool = ids
                .iter()
                .filter_map(|id| {
                    let found = index.get(id).copied();
                    if found.is_none() {
                        debug!(worker = %id, %date, "leftover not in roster, skipped");
                    }
                    found
                })
                .collect();
            (date, pool)
        })
        .collect();
    let mut placed = 0usize;

    for slot in slots.iter_mut() {
        let Some(pool) = buckets.get_mut(&slot.date) else {
            continue;
        };
        if pool.is_empty() {
            continue;
        }
        util::sort_by_recency(pool, workers);
        placed += fill_slot(slot, workers, locations, pool, Target::Maximum, opts);
    }

    info!(placed, "maximum pass done");
    placed
}

/// Sweeps the locations round-robin, one worker per location per sweep,
/// until the pool is empty, every location reached `target`, or a sweep
/// changed neither count.
fn fill_slot(
    slot: &mut ScheduleSlot,
    workers: &mut [Worker],
    locations: &mut [Location],
    pool: &mut Vec<usize>,
    target: Target,
    opts: AssignOptions,
) -> usize {
    let at = slot.start();
    let mut live: Vec<usize> = (0..locations.len()).collect();
    let mut previous: Option<(usize, usize)> = None;
    let mut placed = 0usize;

    while !live.is_empty() && !pool.is_empty() {
        let progress = (live.len(), pool.len());
        if previous == Some(progress) {
            break;
        }
        previous = Some(progress);

        let mut cursor = 0usize;
        while cursor < live.len() {
            let location = &mut locations[live[cursor]];
            if location.assigned_at(at) >= target.of(location) {
                live.remove(cursor);
                continue;
            }
            if let Some(pos) = claim(slot, workers, location, pool, opts) {
                pool.remove(pos);
                placed += 1;
            }
            cursor += 1;
        }
    }

    placed
}

/// Places the first pool member the recorder accepts; returns its position.
fn claim(
    slot: &mut ScheduleSlot,
    workers: &mut [Worker],
    location: &mut Location,
    pool: &[usize],
    opts: AssignOptions,
) -> Option<usize> {
    let at = slot.start();
    for (pos, &idx) in pool.iter().enumerate() {
        let worker = &mut workers[idx];
        if !util::rested_before(worker, at, opts) {
            continue;
        }
        match recorder::record(slot, worker, location, opts) {
            Ok(()) => return Some(pos),
            Err(rejection) => debug!(%rejection, "candidate skipped"),
        }
    }
    None
}

pub(super) fn capacity_warnings(roster: &Roster) -> Vec<CapacityWarning> {
    let shifts = ShiftNumber::ALL.len() as u64;
    let available = roster.workers.iter().filter(|w| !w.on_leave).count();
    let required: u64 = roster
        .locations
        .iter()
        .map(|l| u64::from(l.min_workers) * shifts)
        .sum();
    let capacity: u64 = roster
        .locations
        .iter()
        .map(|l| u64::from(l.max_workers) * shifts)
        .sum();

    let mut out = Vec::new();
    if required > available as u64 {
        warn!(
            required,
            available,
            missing = required - available as u64,
            "not enough workers to meet every minimum over three shifts"
        );
        out.push(CapacityWarning::Shortfall {
            required,
            available,
        });
    }
    if capacity < available as u64 {
        warn!(
            capacity,
            available,
            surplus = available as u64 - capacity,
            "more workers than places; some will stay unassigned"
        );
        out.push(CapacityWarning::Oversupply {
            capacity,
            available,
        });
    }
    out
}

pub(super) fn unfilled(roster: &Roster) -> Vec<Unfilled> {
    let mut out = Vec::new();
    for slot in &roster.slots {
        let at = slot.start();
        for location in &roster.locations {
            let assigned = location.assigned_at(at);
            if assigned < location.min_workers as usize {
                out.push(Unfilled {
                    date: slot.date,
                    shift: slot.shift,
                    location: location.id.clone(),
                    required: location.min_workers,
                    assigned,
                });
            }
        }
    }
    out
}
