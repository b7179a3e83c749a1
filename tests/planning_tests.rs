use chrono::NaiveDate;
use std::collections::BTreeSet;
use workload_chart::{
    ChartPoint, DayAssignment, Order, PlanningError, PlanningSnapshot, ReportingInterval, Resource,
    ResourceCalendar, TaskRecord,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build_sample_snapshot() -> PlanningSnapshot {
    let mut hull = Order::new(1, "Hull refit");
    hull.tasks = vec![
        TaskRecord::new(10, "Hull"),
        TaskRecord::new(11, "Cutting").child_of(10),
        TaskRecord::new(12, "Welding").child_of(10),
        TaskRecord::new(13, "Seam check").child_of(12),
        TaskRecord::new(20, "Sea trial"),
    ];
    let mut deck = Order::new(2, "Deck");
    deck.tasks = vec![TaskRecord::new(30, "Planking")];
    let empty = Order::new(3, "Unscheduled");

    PlanningSnapshot {
        orders: vec![hull, deck, empty],
        resources: vec![
            Resource::new("alice").with_calendar(ResourceCalendar::standard(8)),
            Resource::new("bob").with_calendar(ResourceCalendar::standard(6)),
            Resource::new("carol"),
        ],
        assignments: vec![
            // 2024-01-10 Wednesday, 2024-01-11 Thursday
            DayAssignment::new(1, "alice", d(2024, 1, 10), 4),
            DayAssignment::new(1, "bob", d(2024, 1, 10), 2),
            DayAssignment::new(1, "alice", d(2024, 1, 11), 3),
            DayAssignment::new(2, "alice", d(2024, 1, 11), 5),
            DayAssignment::new(2, "carol", d(2024, 1, 12), 8),
        ],
    }
}

#[test]
fn unknown_order_is_reported() {
    let snapshot = build_sample_snapshot();
    assert_eq!(snapshot.order(99).unwrap_err(), PlanningError::OrderNotFound(99));
    assert_eq!(
        snapshot.planning_state(99).unwrap_err(),
        PlanningError::OrderNotFound(99)
    );
}

#[test]
fn order_without_tasks_must_be_scheduled() {
    let snapshot = build_sample_snapshot();
    let err = snapshot.planning_state(3).unwrap_err();
    assert_eq!(err, PlanningError::OrderNotScheduled(3));
    assert_eq!(err.to_string(), "the order 3 must be scheduled");
}

#[test]
fn planning_state_holds_top_level_trees_and_all_resources() {
    let snapshot = build_sample_snapshot();
    let state = snapshot.planning_state(1).unwrap();

    let top: Vec<i32> = state.top_level.iter().map(|t| t.id).collect();
    assert_eq!(top, vec![10, 20]);
    assert_eq!(state.top_level[0].children[1].children[0].id, 13);
    assert_eq!(state.resources.len(), 3);
}

#[test]
fn order_resources_are_distinct() {
    let snapshot = build_sample_snapshot();
    let resources = snapshot.order_resources(1).unwrap();
    assert_eq!(
        resources,
        BTreeSet::from(["alice".to_string(), "bob".to_string()])
    );
}

#[test]
fn resource_assignments_cross_orders() {
    let snapshot = build_sample_snapshot();
    let ids = BTreeSet::from(["alice".to_string()]);
    let assignments = snapshot.resource_assignments(&ids);
    assert_eq!(assignments.len(), 3);
    assert!(assignments.iter().any(|a| a.order_id == 2));
}

#[test]
fn chart_for_order_builds_three_series() {
    let snapshot = build_sample_snapshot();
    let interval = ReportingInterval::new(d(2024, 1, 8), d(2024, 1, 14)).unwrap();
    let chart = snapshot.chart_for_order(1, &interval).unwrap();

    assert_eq!(
        chart.order,
        vec![
            ChartPoint::zero(d(2024, 1, 8)),
            ChartPoint::zero(d(2024, 1, 9)),
            ChartPoint::new(d(2024, 1, 10), 6),
            ChartPoint::new(d(2024, 1, 11), 3),
            ChartPoint::zero(d(2024, 1, 12)),
            ChartPoint::zero(d(2024, 1, 14)),
        ]
    );
    // alice and bob across both orders; carol is not on order 1.
    assert!(chart.resources.contains(&ChartPoint::new(d(2024, 1, 11), 8)));
    assert!(!chart.resources.iter().any(|p| p.hours == 16));
    // capacity: alice 8 + bob 6 on the 10th, alice 8 on the 11th.
    assert!(chart.capacity.contains(&ChartPoint::new(d(2024, 1, 10), 14)));
    assert!(chart.capacity.contains(&ChartPoint::new(d(2024, 1, 11), 8)));
    assert_eq!(chart.max_hours, 14);
}

#[test]
fn chart_requires_scheduled_order() {
    let mut snapshot = build_sample_snapshot();
    snapshot
        .assignments
        .push(DayAssignment::new(3, "alice", d(2024, 1, 10), 2));
    let interval = ReportingInterval::new(d(2024, 1, 8), d(2024, 1, 14)).unwrap();

    assert_eq!(
        snapshot.chart_for_order(3, &interval).unwrap_err(),
        PlanningError::OrderNotScheduled(3)
    );
    assert_eq!(
        snapshot.chart_for_order(99, &interval).unwrap_err(),
        PlanningError::OrderNotFound(99)
    );
}

#[test]
fn validate_rejects_dangling_assignment() {
    let mut snapshot = build_sample_snapshot();
    snapshot
        .assignments
        .push(DayAssignment::new(1, "ghost", d(2024, 1, 10), 1));
    let err = snapshot.validate().unwrap_err();
    assert!(err.to_string().contains("unknown resource 'ghost'"));
}

#[test]
fn validate_rejects_duplicate_orders() {
    let mut snapshot = build_sample_snapshot();
    snapshot.orders.push(Order::new(1, "Duplicate"));
    assert!(matches!(
        snapshot.validate().unwrap_err(),
        PlanningError::InvalidSnapshot(_)
    ));
}

#[test]
fn sample_snapshot_is_valid() {
    build_sample_snapshot().validate().unwrap();
}
