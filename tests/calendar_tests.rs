use chrono::{NaiveDate, Weekday};
use workload_chart::calendar::{CalendarException, ResourceCalendar, WorkingDay};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn standard_calendar_has_no_weekend_capacity() {
    let cal = ResourceCalendar::standard(8);
    // 2024-01-06 is a Saturday, 2024-01-07 is a Sunday
    assert_eq!(cal.workable_hours(d(2024, 1, 6)), 0);
    assert_eq!(cal.workable_hours(d(2024, 1, 7)), 0);
    assert_eq!(cal.workable_hours(d(2024, 1, 8)), 8);
    assert!(!cal.is_available(d(2024, 1, 6)));
}

#[test]
fn exceptions_override_weekday_hours() {
    let mut cal = ResourceCalendar::default();
    cal.add_holiday(d(2024, 1, 1));
    cal.add_exception(d(2024, 1, 2), 4);
    cal.add_exception(d(2024, 1, 6), 5);

    assert_eq!(cal.workable_hours(d(2024, 1, 1)), 0);
    assert_eq!(cal.workable_hours(d(2024, 1, 2)), 4);
    assert_eq!(cal.workable_hours(d(2024, 1, 6)), 5);
}

#[test]
fn recurring_holiday_blocks_every_year() {
    let mut cal = ResourceCalendar::standard(8);
    cal.add_recurring_holiday(12, 24, 2024, 2026);
    // 2024-12-24 Tuesday, 2025-12-24 Wednesday, 2026-12-24 Thursday
    assert_eq!(cal.workable_hours(d(2024, 12, 24)), 0);
    assert_eq!(cal.workable_hours(d(2025, 12, 24)), 0);
    assert_eq!(cal.workable_hours(d(2026, 12, 24)), 0);
}

#[test]
fn total_workable_hours_over_a_week() {
    let mut cal = ResourceCalendar::standard(8);
    cal.set_weekday_hours(Weekday::Sat, 4);
    // Mon 2024-01-08 .. Sun 2024-01-14
    assert_eq!(cal.total_workable_hours(d(2024, 1, 8), d(2024, 1, 14)), 44);
}

#[test]
fn config_round_trips_through_json() {
    let cal = ResourceCalendar::custom(
        [
            WorkingDay { weekday: Weekday::Mon, hours: 6 },
            WorkingDay { weekday: Weekday::Thu, hours: 7 },
        ],
        [CalendarException { day: d(2024, 1, 4), hours: 0 }],
    );
    let json = serde_json::to_string(&cal).unwrap();
    let back: ResourceCalendar = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cal);
    assert_eq!(back.workable_hours(d(2024, 1, 1)), 6);
    assert_eq!(back.workable_hours(d(2024, 1, 4)), 0);
    assert_eq!(back.to_config().working_days().len(), 2);
}

#[test]
fn later_duplicate_weekday_wins_in_config() {
    let cal = ResourceCalendar::custom(
        [
            WorkingDay { weekday: Weekday::Tue, hours: 6 },
            WorkingDay { weekday: Weekday::Tue, hours: 9 },
        ],
        [],
    );
    assert_eq!(cal.workable_hours(d(2024, 1, 2)), 9);
}
