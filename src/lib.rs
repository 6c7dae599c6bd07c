#![forbid(unsafe_code)]
//! Shiftfill — greedy three-shift roster builder.
//!
//! - Calendar expansion: every retained date gives shifts at 06:00, 14:00, 22:00.
//! - Minimum pass, then maximum pass with the workers left over per date.
//! - 19 h rest between a worker's consecutive shift starts.
//! - Worker, location and slot ledgers written together by one recorder.
//! - Loading records and printing the result happen outside the engine.

pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod settings;
#[cfg(feature = "serde")]
pub mod storage;

pub use calendar::{expand, expand_range};
pub use model::{
    Location, LocationId, Roster, ScheduleConfig, ScheduleSlot, ShiftNumber, Worker, WorkerId,
    DEFAULT_MAX_WORKERS, DEFAULT_MIN_WORKERS,
};
pub use render::{ScheduleRenderer, TextRenderer, View};
pub use scheduler::{
    record, AssignOptions, CapacityWarning, Conflict, ConflictKind, Leftovers, Rejection,
    RunReport, SchedError, Scheduler, Unfilled,
};
#[cfg(feature = "serde")]
pub use settings::Settings;
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
