#![forbid(unsafe_code)]
use chrono::NaiveDate;
use shiftfill::{
    AssignOptions, Location, LocationId, Roster, ScheduleConfig, ScheduleRenderer, Scheduler,
    TextRenderer, View, Worker, WorkerId,
};

fn small_run() -> Roster {
    let mut s = Scheduler::new();
    s.add_workers(vec![
        Worker::new(WorkerId::new("w1"), "Alice", "Elm 3"),
        Worker::new(WorkerId::new("w2"), "Bob", ""),
        Worker::new(WorkerId::new("w3"), "Carol", ""),
    ]);
    s.add_locations(vec![
        Location::new(LocationId::new("l1"), "Depot", "1 Main St", 1, 1).unwrap(),
        Location::new(LocationId::new("l2"), "Annex", "", 0, 1).unwrap(),
    ]);
    let day = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
    s.expand_calendar(&ScheduleConfig {
        start: day,
        end: day,
        include_saturday: false,
        include_sunday: false,
    });
    s.roster_mut().workers[2].on_leave = true;
    s.run(AssignOptions::default());
    s.into_roster()
}

#[test]
fn slot_view() {
    let out = TextRenderer.render(&small_run(), View::Slots);
    insta::assert_snapshot!(out, @r"
    Shifts planned for 2025-10-01 shift 1 (06:00):
      Depot [l1]: Alice
    Shifts planned for 2025-10-01 shift 2 (14:00):
      Depot [l1]: Bob
    No shifts planned yet for 2025-10-01, shift 3.
    ");
}

#[test]
fn worker_view() {
    let out = TextRenderer.render(&small_run(), View::Workers);
    insta::assert_snapshot!(out, @r"
    Worker w1, Alice.
      2025-10-01 06:00 at Depot, 1 Main St
    Worker w2, Bob.
      2025-10-01 14:00 at Depot, 1 Main St
    Worker w3, Carol.
      Has nothing scheduled at the moment.
    ");
}

#[test]
fn location_view() {
    let out = TextRenderer.render(&small_run(), View::Locations);
    insta::assert_snapshot!(out, @r"
    Location l1, Depot.
      2025-10-01 06:00: Alice
      2025-10-01 14:00: Bob
    Location l2, Annex.
      Has no workers scheduled at the moment.
    ");
}

#[test]
fn empty_roster() {
    let out = TextRenderer.render(&Roster::default(), View::Slots);
    assert_eq!(out, "No shifts planned yet.\n");
}
