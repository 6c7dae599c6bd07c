mod assignment;
mod conflicts;
mod recorder;
mod types;
mod util;

pub use recorder::record;
pub use types::{
    AssignOptions, CapacityWarning, Conflict, ConflictKind, Leftovers, Rejection, RunReport,
    SchedError, Unfilled,
};

use crate::calendar;
use crate::model::{Location, LocationId, Roster, ScheduleConfig, ShiftNumber, Worker, WorkerId};
use chrono::NaiveDate;
use tracing::warn;

/// Scheduler : owns the roster being filled
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
        }
    }

    pub fn from_roster(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    pub fn add_workers(&mut self, workers: Vec<Worker>) {
        self.roster.workers.extend(workers);
    }

    pub fn add_locations(&mut self, locations: Vec<Location>) {
        self.roster.locations.extend(locations);
    }

    /// Replaces the slots with the expansion of `config`.
    pub fn expand_calendar(&mut self, config: &ScheduleConfig) -> usize {
        self.roster.slots = calendar::expand(config);
        self.roster.slots.len()
    }

    /// Capacity check, minimum pass, then maximum pass.
    pub fn run(&mut self, opts: AssignOptions) -> RunReport {
        let warnings = self.capacity_warnings();
        let (leftovers, minimum_assignments) = assignment::fill_minimum(self, opts);
        let maximum_assignments = assignment::fill_maximum(self, leftovers, opts);

        let unfilled = self.unfilled();
        for gap in &unfilled {
            warn!(
                date = %gap.date,
                shift = gap.shift.number(),
                location = %gap.location,
                required = gap.required,
                assigned = gap.assigned,
                "slot left under minimum"
            );
        }

        RunReport {
            warnings,
            minimum_assignments,
            maximum_assignments,
            unfilled,
        }
    }

    pub fn capacity_warnings(&self) -> Vec<CapacityWarning> {
        assignment::capacity_warnings(&self.roster)
    }

    /// Minimum pass only; returns the per-date leftovers and the number of
    /// placements made.
    pub fn fill_minimum(&mut self, opts: AssignOptions) -> (Leftovers, usize) {
        assignment::fill_minimum(self, opts)
    }

    /// Maximum pass over leftovers produced by [`Scheduler::fill_minimum`]
    /// on this same roster.
    pub fn fill_maximum(&mut self, leftovers: Leftovers, opts: AssignOptions) -> usize {
        assignment::fill_maximum(self, leftovers, opts)
    }

    /// Every (slot, location) currently below its minimum.
    pub fn unfilled(&self) -> Vec<Unfilled> {
        assignment::unfilled(&self.roster)
    }

    pub fn verify(&self, opts: AssignOptions) -> Vec<Conflict> {
        conflicts::verify(self, opts)
    }

    /// Places one worker by hand, through the same recorder the engine uses.
    pub fn assign(
        &mut self,
        date: NaiveDate,
        shift: ShiftNumber,
        worker: &WorkerId,
        location: &LocationId,
        opts: AssignOptions,
    ) -> Result<(), SchedError> {
        let Roster {
            workers,
            locations,
            slots,
        } = &mut self.roster;

        let slot = slots
            .iter_mut()
            .find(|s| s.date == date && s.shift == shift)
            .ok_or(SchedError::UnknownSlot { date, shift })?;
        let worker = workers
            .iter_mut()
            .find(|w| &w.id == worker)
            .ok_or_else(|| SchedError::UnknownWorker(worker.as_str().to_string()))?;
        let location = locations
            .iter_mut()
            .find(|l| &l.id == location)
            .ok_or_else(|| SchedError::UnknownLocation(location.as_str().to_string()))?;

        record(slot, worker, location, opts)?;
        Ok(())
    }
}
