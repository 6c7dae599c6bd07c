use crate::model::{ScheduleConfig, ScheduleSlot, ShiftNumber};
use chrono::{Datelike, NaiveDate, Weekday};

/// Expands a date range into the ordered slots that must be covered.
///
/// Every retained date yields shifts 1, 2 and 3 in that order. An end date
/// before the start yields no slots.
pub fn expand(config: &ScheduleConfig) -> Vec<ScheduleSlot> {
    expand_range(
        config.start,
        config.end,
        config.include_saturday,
        config.include_sunday,
    )
}

pub fn expand_range(
    start: NaiveDate,
    end: NaiveDate,
    include_saturday: bool,
    include_sunday: bool,
) -> Vec<ScheduleSlot> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| day_matches(*day, include_saturday, include_sunday))
        .flat_map(|day| ShiftNumber::ALL.map(|shift| ScheduleSlot::new(day, shift)))
        .collect()
}

fn day_matches(day: NaiveDate, include_saturday: bool, include_sunday: bool) -> bool {
    match day.weekday() {
        Weekday::Sat => include_saturday,
        Weekday::Sun => include_sunday,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_filter() {
        let sat = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
        let sun = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        let mon = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
        assert!(!day_matches(sat, false, true));
        assert!(day_matches(sat, true, false));
        assert!(!day_matches(sun, true, false));
        assert!(day_matches(mon, false, false));
    }
}
