//! Day-bucketed workload aggregation.
//!
//! Assignments are summed per calendar day. What an assignment contributes
//! depends on the [`HoursSource`]: the hours actually booked
//! ([`AssignedHours`]) or the hours the resource's calendar makes available
//! on that day ([`CalendarCapacity`]).

use crate::assignment::DayAssignment;
use crate::series::DaySeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Answers "how many hours can this resource work on this day".
///
/// `None` means the resource has no capacity calendar.
pub trait CapacityLookup {
    fn workable_hours(&self, resource_id: &str, day: NaiveDate) -> Option<u32>;
}

impl<L: CapacityLookup + ?Sized> CapacityLookup for &L {
    fn workable_hours(&self, resource_id: &str, day: NaiveDate) -> Option<u32> {
        (**self).workable_hours(resource_id, day)
    }
}

/// Produces the hours an assignment contributes to its day.
pub trait HoursSource {
    fn hours_for(&self, assignment: &DayAssignment) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssignedHours;

impl HoursSource for AssignedHours {
    fn hours_for(&self, assignment: &DayAssignment) -> u32 {
        assignment.hours
    }
}

/// Workable hours of the assignment's resource on the assignment's day.
/// Resources without a calendar contribute 0.
#[derive(Debug, Clone, Copy)]
pub struct CalendarCapacity<'a, L: ?Sized> {
    lookup: &'a L,
}

impl<'a, L: CapacityLookup + ?Sized> CalendarCapacity<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }
}

impl<L: CapacityLookup + ?Sized> HoursSource for CalendarCapacity<'_, L> {
    fn hours_for(&self, assignment: &DayAssignment) -> u32 {
        match self
            .lookup
            .workable_hours(&assignment.resource_id, assignment.day)
        {
            Some(hours) => hours,
            None => {
                trace!(
                    resource = %assignment.resource_id,
                    day = %assignment.day,
                    "resource has no capacity calendar, contributing 0 hours"
                );
                0
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursMode {
    AssignedHours,
    CalendarCapacity,
}

/// Sum the contribution of every assignment into its day.
///
/// Days without assignments are absent from the result.
pub fn aggregate<S>(assignments: &[DayAssignment], source: &S) -> DaySeries
where
    S: HoursSource + ?Sized,
{
    let mut series = DaySeries::new();
    for assignment in assignments {
        series.add_hours(assignment.day, source.hours_for(assignment));
    }
    series
}

pub fn aggregate_by_mode<L>(assignments: &[DayAssignment], mode: HoursMode, lookup: &L) -> DaySeries
where
    L: CapacityLookup + ?Sized,
{
    match mode {
        HoursMode::AssignedHours => aggregate(assignments, &AssignedHours),
        HoursMode::CalendarCapacity => aggregate(assignments, &CalendarCapacity::new(lookup)),
    }
}
