#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shiftfill::{
    io,
    render::{ScheduleRenderer, TextRenderer, View},
    scheduler::{AssignOptions, CapacityWarning, ConflictKind, Scheduler},
    settings::Settings,
    storage::{JsonStorage, Storage},
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Three-shift roster builder
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Enable logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a roster from worker and location records
    Run {
        /// JSON settings file; the flags below override its values
        #[arg(long)]
        settings: Option<PathBuf>,
        #[arg(long)]
        workers: Option<PathBuf>,
        #[arg(long)]
        locations: Option<PathBuf>,
        /// YYYY-MM-DD
        #[arg(long)]
        start: Option<NaiveDate>,
        /// YYYY-MM-DD, inclusive
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Schedule Saturdays (`true`/`false`)
        #[arg(long)]
        saturdays: Option<bool>,
        /// Schedule Sundays (`true`/`false`)
        #[arg(long)]
        sundays: Option<bool>,
        #[arg(long)]
        rest_hours: Option<u32>,
        #[arg(long)]
        out_json: Option<PathBuf>,
        #[arg(long)]
        out_csv: Option<PathBuf>,
        /// Print the result
        #[arg(long, value_enum)]
        view: Option<View>,
    },

    /// Check a saved roster for conflicts
    Check {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long, default_value_t = 19)]
        rest_hours: u32,
        /// CSV report of the conflicts (optional)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print a saved roster
    Show {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long, value_enum, default_value = "slots")]
        view: View,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Run {
            settings,
            workers,
            locations,
            start,
            end,
            saturdays,
            sundays,
            rest_hours,
            out_json,
            out_csv,
            view,
        } => {
            let mut settings = match settings {
                Some(path) => Settings::load(path)?,
                None => Settings {
                    workers_csv: workers.clone().context("--workers or --settings required")?,
                    locations_csv: locations
                        .clone()
                        .context("--locations or --settings required")?,
                    start: start.context("--start or --settings required")?,
                    end: end.context("--end or --settings required")?,
                    working_saturdays: false,
                    working_sundays: false,
                    rest_hours: None,
                },
            };
            if let Some(p) = workers {
                settings.workers_csv = p;
            }
            if let Some(p) = locations {
                settings.locations_csv = p;
            }
            if let Some(d) = start {
                settings.start = d;
            }
            if let Some(d) = end {
                settings.end = d;
            }
            if let Some(flag) = saturdays {
                settings.working_saturdays = flag;
            }
            if let Some(flag) = sundays {
                settings.working_sundays = flag;
            }
            if rest_hours.is_some() {
                settings.rest_hours = rest_hours;
            }
            settings.validate()?;

            let mut scheduler = Scheduler::new();
            scheduler.add_workers(io::import_workers_csv(&settings.workers_csv)?);
            scheduler.add_locations(io::import_locations_csv(&settings.locations_csv)?);
            if scheduler.roster().workers.is_empty() {
                bail!("no workers loaded from {}", settings.workers_csv.display());
            }
            scheduler.expand_calendar(&settings.schedule_config());

            let report = scheduler.run(settings.assign_options());
            for warning in &report.warnings {
                match warning {
                    CapacityWarning::Shortfall {
                        required,
                        available,
                    } => eprintln!(
                        "Warning: {available} workers for {required} minimum places over three shifts"
                    ),
                    CapacityWarning::Oversupply {
                        capacity,
                        available,
                    } => eprintln!(
                        "Warning: {available} workers for {capacity} places; some stay unassigned"
                    ),
                }
            }

            if let Some(path) = out_json {
                JsonStorage::open(path).save(scheduler.roster())?;
            }
            if let Some(path) = out_csv {
                io::export_assignments_csv(path, scheduler.roster())?;
            }
            if let Some(view) = view {
                print!("{}", TextRenderer.render(scheduler.roster(), view));
            }

            println!(
                "Assigned {} (minimum pass {}, maximum pass {}), {} slot(s) under minimum",
                report.total_assignments(),
                report.minimum_assignments,
                report.maximum_assignments,
                report.unfilled.len()
            );
            // 2 = WARNING/INCOMPLETE
            if report.is_complete() {
                0
            } else {
                2
            }
        }
        Commands::Check {
            roster,
            rest_hours,
            report,
        } => {
            let roster = JsonStorage::open(roster).load()?;
            let scheduler = Scheduler::from_roster(roster);
            let conflicts = scheduler.verify(AssignOptions { rest_hours });
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["at", "worker_id", "location_id", "kind"])?;
                    for c in &conflicts {
                        let at = c.at.format("%Y-%m-%dT%H:%M").to_string();
                        w.write_record([
                            at.as_str(),
                            c.worker.as_ref().map_or("", |id| id.as_str()),
                            c.location.as_ref().map_or("", |id| id.as_str()),
                            match c.kind {
                                ConflictKind::DoubleBooking => "double",
                                ConflictKind::RestViolation => "rest",
                                ConflictKind::OverCapacity => "capacity",
                                ConflictKind::LedgerMismatch => "ledger",
                            },
                        ])?;
                    }
                    w.flush()?;
                }
                2
            }
        }
        Commands::Show { roster, view } => {
            let roster = JsonStorage::open(roster).load()?;
            print!("{}", TextRenderer.render(&roster, view));
            0
        }
    };

    std::process::exit(code);
}
