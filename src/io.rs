use crate::model::{Location, LocationId, Roster, Worker, WorkerId};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashSet;
use std::path::Path;

/// Workers from CSV: header `id,name,address[,on_leave]`. An empty id gets a
/// random one.
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Worker>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid worker row (empty name)");
        }
        let address = rec.get(2).unwrap_or("").trim();
        let id = if id.is_empty() {
            WorkerId::random()
        } else {
            WorkerId::new(id)
        };
        if !seen.insert(id.clone()) {
            bail!("duplicate worker id {id}");
        }
        let mut worker = Worker::new(id, name, address);
        if let Some(flag) = rec.get(3) {
            let flag = flag.trim();
            if !flag.is_empty() {
                worker.on_leave = parse_bool(flag)
                    .with_context(|| format!("invalid on_leave value for worker {name}"))?;
            }
        }
        out.push(worker);
    }
    Ok(out)
}

/// Locations from CSV: header `id,name,address,min,max`. Capacity cells are
/// coerced, never rejected.
pub fn import_locations_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Location>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if id.is_empty() || name.is_empty() {
            bail!("invalid location row (empty)");
        }
        if !seen.insert(id.to_string()) {
            bail!("duplicate location id {id}");
        }
        let address = rec.get(2).unwrap_or("").trim();
        let min = rec.get(3).unwrap_or("");
        let max = rec.get(4).unwrap_or("");
        out.push(Location::from_raw(LocationId::new(id), name, address, min, max));
    }
    Ok(out)
}

pub(crate) fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "t" => Ok(true),
        "false" | "0" | "no" | "n" | "f" => Ok(false),
        _ => bail!("expected boolean, got {s:?}"),
    }
}

/// Assignments as CSV: header `date,shift,start,location_id,worker_id`, in
/// slot order.
pub fn export_assignments_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "shift", "start", "location_id", "worker_id"])?;
    for slot in &roster.slots {
        let date = slot.date.to_string();
        let shift = slot.shift.number().to_string();
        let start = slot.start().format("%Y-%m-%dT%H:%M").to_string();
        for location in &roster.locations {
            for worker in slot.workers_at(&location.id) {
                w.write_record([
                    date.as_str(),
                    shift.as_str(),
                    start.as_str(),
                    location.id.as_str(),
                    worker.as_str(),
                ])?;
            }
        }
    }
    w.flush()?;
    Ok(())
}
