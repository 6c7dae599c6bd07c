#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use shiftfill::{expand, expand_range, ScheduleConfig, ShiftNumber};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekdays_only_three_slots_each_in_order() {
    // Monday 2025-10-06 .. Sunday 2025-10-19
    let slots = expand_range(date(2025, 10, 6), date(2025, 10, 19), false, false);
    assert_eq!(slots.len(), 10 * 3);
    assert!(slots
        .iter()
        .all(|s| !matches!(s.date.weekday(), Weekday::Sat | Weekday::Sun)));

    for chunk in slots.chunks(3) {
        let shifts: Vec<u8> = chunk.iter().map(|s| s.shift.number()).collect();
        assert_eq!(shifts, [1, 2, 3]);
        assert!(chunk.iter().all(|s| s.date == chunk[0].date));
    }
    for pair in slots.windows(2) {
        assert!((pair[0].date, pair[0].shift) < (pair[1].date, pair[1].shift));
        assert!(pair[0].start() < pair[1].start());
    }
    assert!(slots.iter().all(|s| s.is_empty()));
}

#[test]
fn weekend_days_follow_their_own_flag() {
    let sat = date(2025, 10, 4);
    let sun = date(2025, 10, 5);

    let only_sat = expand_range(sat, sun, true, false);
    assert_eq!(only_sat.len(), 3);
    assert!(only_sat.iter().all(|s| s.date == sat));

    let only_sun = expand(&ScheduleConfig {
        start: sat,
        end: sun,
        include_saturday: false,
        include_sunday: true,
    });
    assert_eq!(only_sun.len(), 3);
    assert!(only_sun.iter().all(|s| s.date == sun));

    assert_eq!(expand_range(sat, sun, true, true).len(), 6);
}

#[test]
fn reversed_range_is_empty() {
    assert!(expand_range(date(2025, 10, 10), date(2025, 10, 9), true, true).is_empty());
}

#[test]
fn shift_starts_use_fixed_offsets() {
    let slots = expand_range(date(2025, 10, 1), date(2025, 10, 1), false, false);
    let hours: Vec<String> = slots
        .iter()
        .map(|s| s.start().format("%H:%M").to_string())
        .collect();
    assert_eq!(hours, ["06:00", "14:00", "22:00"]);
    assert_eq!(ShiftNumber::from_number(2), Some(ShiftNumber::Second));
    assert_eq!(ShiftNumber::from_number(4), None);
}
