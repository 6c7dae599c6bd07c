use super::{util, AssignOptions, Rejection};
use crate::model::{Location, ScheduleSlot, Worker};
use tracing::debug;

/// Records `worker` at `location` for `slot` in all three ledgers.
///
/// Either every ledger is written or none is: a worker already committed at
/// the slot's start, or one still inside their rest period, is rejected
/// before anything changes.
pub fn record(
    slot: &mut ScheduleSlot,
    worker: &mut Worker,
    location: &mut Location,
    opts: AssignOptions,
) -> Result<(), Rejection> {
    let at = slot.start();

    if worker.schedule.contains_key(&at) {
        return Err(Rejection::DoubleBooked {
            worker: worker.id.clone(),
            at,
        });
    }
    if !util::rested_before(worker, at, opts) {
        return Err(Rejection::RestPeriod {
            worker: worker.id.clone(),
            at,
            rest_hours: opts.rest_hours,
        });
    }

    worker.schedule.insert(at, location.id.clone());
    slot.schedule
        .entry(location.id.clone())
        .or_default()
        .push(worker.id.clone());
    location
        .schedule
        .entry(at)
        .or_default()
        .push(worker.id.clone());

    debug!(
        worker = %worker.id,
        location = %location.id,
        date = %slot.date,
        shift = slot.shift.number(),
        "assigned"
    );
    Ok(())
}
