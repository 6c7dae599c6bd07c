use crate::model::{LocationId, ShiftNumber, WorkerId};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use thiserror::Error;

/// Assignment options
#[derive(Debug, Clone, Copy)]
pub struct AssignOptions {
    /// Minimum gap between two consecutive shift starts of one worker.
    pub rest_hours: u32,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self { rest_hours: 19 }
    }
}

/// Aggregate capacity mismatch detected before the minimum pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityWarning {
    /// Sum of per-shift minimums over three shifts exceeds available workers.
    Shortfall { required: u64, available: usize },
    /// Sum of per-shift maximums over three shifts is below available workers.
    Oversupply { capacity: u64, available: usize },
}

/// A location left under its minimum for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unfilled {
    pub date: NaiveDate,
    pub shift: ShiftNumber,
    pub location: LocationId,
    pub required: u32,
    pub assigned: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub warnings: Vec<CapacityWarning>,
    pub minimum_assignments: usize,
    pub maximum_assignments: usize,
    pub unfilled: Vec<Unfilled>,
}

impl RunReport {
    pub fn total_assignments(&self) -> usize {
        self.minimum_assignments + self.maximum_assignments
    }

    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }
}

/// Workers still unplaced after the last shift of each date in the minimum
/// pass, in pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leftovers {
    pub(super) by_date: BTreeMap<NaiveDate, Vec<WorkerId>>,
}

impl Leftovers {
    /// Offers `worker` to the maximum pass on `date`.
    pub fn push(&mut self, date: NaiveDate, worker: WorkerId) {
        self.by_date.entry(date).or_default().push(worker);
    }

    pub fn workers_on(&self, date: NaiveDate) -> &[WorkerId] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn for_date(&self, date: NaiveDate) -> usize {
        self.by_date.get(&date).map_or(0, Vec::len)
    }

    pub fn total(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    DoubleBooking,
    RestViolation,
    OverCapacity,
    LedgerMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub at: NaiveDateTime,
    pub worker: Option<WorkerId>,
    pub location: Option<LocationId>,
}

/// Why the recorder refused a placement. Never fatal: the engine moves on to
/// the next candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("worker {worker} is already committed at {at}")]
    DoubleBooked { worker: WorkerId, at: NaiveDateTime },
    #[error("worker {worker} has not rested {rest_hours}h before {at}")]
    RestPeriod {
        worker: WorkerId,
        at: NaiveDateTime,
        rest_hours: u32,
    },
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("unknown worker: {0}")]
    UnknownWorker(String),
    #[error("unknown location: {0}")]
    UnknownLocation(String),
    #[error("no slot for {date} shift {shift}")]
    UnknownSlot { date: NaiveDate, shift: ShiftNumber },
    #[error(transparent)]
    Rejected(#[from] Rejection),
}
