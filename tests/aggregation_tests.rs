use chrono::NaiveDate;
use workload_chart::{
    AssignedHours, CalendarCapacity, DayAssignment, HoursMode, Resource, ResourceCalendar,
    ResourceDirectory, aggregate, aggregate_by_mode,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn resources() -> Vec<Resource> {
    vec![
        Resource::new("alice").with_calendar(ResourceCalendar::standard(8)),
        Resource::new("bob").with_calendar(ResourceCalendar::standard(6)),
        Resource::new("crane"),
    ]
}

#[test]
fn empty_input_gives_empty_series() {
    let series = aggregate(&[], &AssignedHours);
    assert!(series.is_empty());
    assert_eq!(series.max_hours(), 0);
}

#[test]
fn same_day_assignments_are_summed() {
    let assignments = vec![
        DayAssignment::new(1, "alice", d(2024, 1, 2), 3),
        DayAssignment::new(1, "bob", d(2024, 1, 2), 4),
        DayAssignment::new(1, "alice", d(2024, 1, 3), 5),
    ];
    let series = aggregate(&assignments, &AssignedHours);

    assert_eq!(series.len(), 2);
    assert_eq!(series.get(d(2024, 1, 2)), Some(7));
    assert_eq!(series.get(d(2024, 1, 3)), Some(5));
    assert_eq!(series.total_hours(), 12);
}

#[test]
fn output_is_ascending_for_any_input_order() {
    let assignments = vec![
        DayAssignment::new(1, "alice", d(2024, 1, 9), 1),
        DayAssignment::new(1, "alice", d(2024, 1, 2), 2),
        DayAssignment::new(1, "bob", d(2024, 1, 5), 3),
        DayAssignment::new(1, "bob", d(2024, 1, 2), 4),
    ];
    let series = aggregate(&assignments, &AssignedHours);

    let days: Vec<NaiveDate> = series.iter().map(|(day, _)| day).collect();
    assert_eq!(days, vec![d(2024, 1, 2), d(2024, 1, 5), d(2024, 1, 9)]);
    assert!(days.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn days_without_assignments_are_absent() {
    let assignments = vec![
        DayAssignment::new(1, "alice", d(2024, 1, 2), 2),
        DayAssignment::new(1, "alice", d(2024, 1, 4), 2),
    ];
    let series = aggregate(&assignments, &AssignedHours);
    assert_eq!(series.get(d(2024, 1, 3)), None);
}

#[test]
fn calendar_capacity_uses_workable_hours_not_assigned_hours() {
    let resources = resources();
    let directory = ResourceDirectory::new(&resources);
    // 2024-01-02 is a Tuesday.
    let assignments = vec![
        DayAssignment::new(1, "alice", d(2024, 1, 2), 1),
        DayAssignment::new(1, "bob", d(2024, 1, 2), 1),
    ];
    let series = aggregate(&assignments, &CalendarCapacity::new(&directory));
    assert_eq!(series.get(d(2024, 1, 2)), Some(14));
}

#[test]
fn calendar_capacity_follows_weekends_and_holidays() {
    let mut calendar = ResourceCalendar::standard(8);
    calendar.add_holiday(d(2024, 1, 1));
    let resources = vec![Resource::new("alice").with_calendar(calendar)];
    let directory = ResourceDirectory::new(&resources);

    let assignments = vec![
        DayAssignment::new(1, "alice", d(2024, 1, 1), 4), // holiday
        DayAssignment::new(1, "alice", d(2024, 1, 6), 4), // Saturday
        DayAssignment::new(1, "alice", d(2024, 1, 8), 4), // Monday
    ];
    let series = aggregate_by_mode(&assignments, HoursMode::CalendarCapacity, &directory);

    assert_eq!(series.get(d(2024, 1, 1)), Some(0));
    assert_eq!(series.get(d(2024, 1, 6)), Some(0));
    assert_eq!(series.get(d(2024, 1, 8)), Some(8));
}

#[test]
fn resource_without_calendar_contributes_zero() {
    let resources = resources();
    let directory = ResourceDirectory::new(&resources);
    let assignments = vec![
        DayAssignment::new(1, "crane", d(2024, 1, 2), 7),
        DayAssignment::new(1, "ghost", d(2024, 1, 3), 7),
    ];
    let series = aggregate_by_mode(&assignments, HoursMode::CalendarCapacity, &directory);

    assert_eq!(series.get(d(2024, 1, 2)), Some(0));
    assert_eq!(series.get(d(2024, 1, 3)), Some(0));
    assert_eq!(series.max_hours(), 0);
}

#[test]
fn assigned_mode_ignores_calendars() {
    let resources = resources();
    let directory = ResourceDirectory::new(&resources);
    let assignments = vec![DayAssignment::new(1, "crane", d(2024, 1, 6), 7)];
    let series = aggregate_by_mode(&assignments, HoursMode::AssignedHours, &directory);
    assert_eq!(series.get(d(2024, 1, 6)), Some(7));
}
