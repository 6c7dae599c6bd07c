use crate::model::{LocationId, Roster, WorkerId};
use std::fmt::Write;

/// Which ledger to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    Slots,
    Workers,
    Locations,
}

/// Lets callers swap the plain-text layout for another format.
pub trait ScheduleRenderer {
    fn render(&self, roster: &Roster, view: View) -> String;
}

/// Line-oriented text, one block per slot, worker or location.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ScheduleRenderer for TextRenderer {
    fn render(&self, roster: &Roster, view: View) -> String {
        match view {
            View::Slots => by_slot(roster),
            View::Workers => by_worker(roster),
            View::Locations => by_location(roster),
        }
    }
}

fn by_slot(roster: &Roster) -> String {
    let mut out = String::new();
    if roster.slots.is_empty() {
        out.push_str("No shifts planned yet.\n");
        return out;
    }
    for slot in &roster.slots {
        if slot.is_empty() {
            let _ = writeln!(
                out,
                "No shifts planned yet for {}, shift {}.",
                slot.date, slot.shift
            );
            continue;
        }
        let _ = writeln!(
            out,
            "Shifts planned for {} shift {} ({}):",
            slot.date,
            slot.shift,
            slot.start().format("%H:%M")
        );
        for location in &roster.locations {
            let workers = slot.workers_at(&location.id);
            if workers.is_empty() {
                continue;
            }
            let _ = writeln!(
                out,
                "  {} [{}]: {}",
                location.name,
                location.id,
                worker_names(roster, workers)
            );
        }
    }
    out
}

fn by_worker(roster: &Roster) -> String {
    let mut out = String::new();
    for worker in &roster.workers {
        let _ = writeln!(out, "Worker {}, {}.", worker.id, worker.name);
        if worker.schedule.is_empty() {
            out.push_str("  Has nothing scheduled at the moment.\n");
            continue;
        }
        for (at, location) in &worker.schedule {
            let _ = writeln!(
                out,
                "  {} at {}",
                at.format("%Y-%m-%d %H:%M"),
                location_label(roster, location)
            );
        }
    }
    out
}

fn by_location(roster: &Roster) -> String {
    let mut out = String::new();
    for location in &roster.locations {
        let _ = writeln!(out, "Location {}, {}.", location.id, location.name);
        if location.schedule.is_empty() {
            out.push_str("  Has no workers scheduled at the moment.\n");
            continue;
        }
        for (at, workers) in &location.schedule {
            let _ = writeln!(
                out,
                "  {}: {}",
                at.format("%Y-%m-%d %H:%M"),
                worker_names(roster, workers)
            );
        }
    }
    out
}

fn worker_names(roster: &Roster, ids: &[WorkerId]) -> String {
    ids.iter()
        .map(|id| {
            roster
                .find_worker(id)
                .map_or_else(|| id.as_str().to_string(), |w| w.name.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn location_label(roster: &Roster, id: &LocationId) -> String {
    match roster.find_location(id) {
        Some(l) if l.address.is_empty() => l.name.clone(),
        Some(l) => format!("{}, {}", l.name, l.address),
        None => id.as_str().to_string(),
    }
}
