//! Run settings: where the worker and location records live, the date range
//! and the weekend policy.

use crate::io::parse_bool;
use crate::model::ScheduleConfig;
use crate::scheduler::AssignOptions;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub workers_csv: PathBuf,
    pub locations_csv: PathBuf,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default, deserialize_with = "flag")]
    pub working_saturdays: bool,
    #[serde(default, deserialize_with = "flag")]
    pub working_sundays: bool,
    #[serde(default)]
    pub rest_hours: Option<u32>,
}

impl Settings {
    /// Reads a JSON settings file. Relative CSV paths are taken relative to
    /// the settings file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let mut settings: Settings = serde_json::from_slice(&data)
            .with_context(|| format!("parsing settings {}", path.display()))?;
        if let Some(base) = path.parent() {
            settings.workers_csv = resolve(base, &settings.workers_csv);
            settings.locations_csv = resolve(base, &settings.locations_csv);
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            warn!(
                start = %self.start,
                end = %self.end,
                "end date before start date, nothing to schedule"
            );
        }
        if self.rest_hours == Some(0) {
            bail!("rest_hours must be > 0");
        }
        Ok(())
    }

    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig {
            start: self.start,
            end: self.end,
            include_saturday: self.working_saturdays,
            include_sunday: self.working_sundays,
        }
    }

    pub fn assign_options(&self) -> AssignOptions {
        let mut opts = AssignOptions::default();
        if let Some(hours) = self.rest_hours {
            opts.rest_hours = hours;
        }
        opts
    }
}

fn resolve(base: &Path, p: &Path) -> PathBuf {
    if p.is_relative() {
        base.join(p)
    } else {
        p.to_path_buf()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

/// Accepts a JSON boolean or one of the usual truthy/falsy words.
fn flag<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<bool, D::Error> {
    match Flag::deserialize(d)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => parse_bool(&s).map_err(serde::de::Error::custom),
    }
}
