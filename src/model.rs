use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Minimum staffing used when a location record carries no usable value.
pub const DEFAULT_MIN_WORKERS: u32 = 1;
/// Maximum staffing used when a location record carries no usable value.
pub const DEFAULT_MAX_WORKERS: u32 = 900;

/// Strong identifier for a Worker
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strong identifier for a Location
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationId(String);

impl LocationId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person who can be placed on shifts.
///
/// `schedule` maps each shift-start timestamp the worker is committed to
/// onto the single location of that commitment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub address: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_leave: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub schedule: BTreeMap<NaiveDateTime, LocationId>,
}

impl Worker {
    pub fn new<N: Into<String>, A: Into<String>>(id: WorkerId, name: N, address: A) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            on_leave: false,
            schedule: BTreeMap::new(),
        }
    }

    /// Latest committed shift start, if any.
    pub fn last_shift(&self) -> Option<NaiveDateTime> {
        self.schedule.keys().next_back().copied()
    }

    pub fn location_at(&self, at: NaiveDateTime) -> Option<&LocationId> {
        self.schedule.get(&at)
    }
}

/// A place that must be staffed on every shift.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub min_workers: u32,
    pub max_workers: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub schedule: BTreeMap<NaiveDateTime, Vec<WorkerId>>,
}

impl Location {
    /// Creates a location, validating `min_workers <= max_workers`.
    pub fn new<N: Into<String>, A: Into<String>>(
        id: LocationId,
        name: N,
        address: A,
        min_workers: u32,
        max_workers: u32,
    ) -> Result<Self, String> {
        if min_workers > max_workers {
            return Err(format!(
                "minimum staffing {min_workers} exceeds maximum {max_workers}"
            ));
        }
        Ok(Self {
            id,
            name: name.into(),
            address: address.into(),
            min_workers,
            max_workers,
            schedule: BTreeMap::new(),
        })
    }

    /// Builds a location from untyped record fields.
    ///
    /// Capacity fields that are missing, negative or not numeric fall back to
    /// [`DEFAULT_MIN_WORKERS`] / [`DEFAULT_MAX_WORKERS`]. A minimum above the
    /// maximum raises the maximum instead of failing.
    pub fn from_raw<N: Into<String>, A: Into<String>>(
        id: LocationId,
        name: N,
        address: A,
        min_raw: &str,
        max_raw: &str,
    ) -> Self {
        let min_workers = coerce_count(min_raw).unwrap_or(DEFAULT_MIN_WORKERS);
        let max_workers = coerce_count(max_raw)
            .unwrap_or(DEFAULT_MAX_WORKERS)
            .max(min_workers);
        Self {
            id,
            name: name.into(),
            address: address.into(),
            min_workers,
            max_workers,
            schedule: BTreeMap::new(),
        }
    }

    pub fn workers_at(&self, at: NaiveDateTime) -> &[WorkerId] {
        self.schedule.get(&at).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn assigned_at(&self, at: NaiveDateTime) -> usize {
        self.workers_at(at).len()
    }
}

fn coerce_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// The fixed three-shift day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftNumber {
    First,
    Second,
    Third,
}

impl ShiftNumber {
    pub const ALL: [ShiftNumber; 3] = [ShiftNumber::First, ShiftNumber::Second, ShiftNumber::Third];

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Clock time at which the shift starts, as an offset from midnight.
    pub fn offset(self) -> Duration {
        match self {
            Self::First => Duration::hours(6),
            Self::Second => Duration::hours(14),
            Self::Third => Duration::hours(22),
        }
    }

    pub fn start_on(self, date: NaiveDate) -> NaiveDateTime {
        NaiveDateTime::new(date, NaiveTime::MIN) + self.offset()
    }
}

impl fmt::Display for ShiftNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One (date, shift) unit of coverage and who covers it, per location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleSlot {
    pub date: NaiveDate,
    pub shift: ShiftNumber,
    #[cfg_attr(feature = "serde", serde(default))]
    pub schedule: BTreeMap<LocationId, Vec<WorkerId>>,
}

impl ScheduleSlot {
    pub fn new(date: NaiveDate, shift: ShiftNumber) -> Self {
        Self {
            date,
            shift,
            schedule: BTreeMap::new(),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.shift.start_on(self.date)
    }

    pub fn workers_at(&self, location: &LocationId) -> &[WorkerId] {
        self.schedule
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.values().all(Vec::is_empty)
    }
}

/// Inclusive date range plus weekend policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub include_saturday: bool,
    pub include_sunday: bool,
}

/// Workers, locations and the expanded slots of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    pub workers: Vec<Worker>,
    pub locations: Vec<Location>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: Vec<ScheduleSlot>,
}

impl Roster {
    pub fn find_worker<'a>(&'a self, id: &WorkerId) -> Option<&'a Worker> {
        self.workers.iter().find(|w| &w.id == id)
    }
    pub fn find_location<'a>(&'a self, id: &LocationId) -> Option<&'a Location> {
        self.locations.iter().find(|l| &l.id == id)
    }
    pub fn find_slot<'a>(&'a self, date: NaiveDate, shift: ShiftNumber) -> Option<&'a ScheduleSlot> {
        self.slots
            .iter()
            .find(|s| s.date == date && s.shift == shift)
    }

    /// Total number of (worker, slot) placements.
    pub fn assignment_count(&self) -> usize {
        self.workers.iter().map(|w| w.schedule.len()).sum()
    }
}
