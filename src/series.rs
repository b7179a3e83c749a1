use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total hours per calendar day, ascending by day, one entry per day.
///
/// Daily totals are `u32` and saturate at `u32::MAX`; a day's value equals the
/// sum of its contributions as long as that sum fits. Use [`total_hours`]
/// (`u64`) for sums across days.
///
/// [`total_hours`]: DaySeries::total_hours
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySeries {
    hours_by_day: BTreeMap<NaiveDate, u32>,
}

impl DaySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_hours(&mut self, day: NaiveDate, hours: u32) {
        let total = self.hours_by_day.entry(day).or_insert(0);
        *total = total.saturating_add(hours);
    }

    pub fn is_empty(&self) -> bool {
        self.hours_by_day.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hours_by_day.len()
    }

    pub fn get(&self, day: NaiveDate) -> Option<u32> {
        self.hours_by_day.get(&day).copied()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.hours_by_day.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.hours_by_day.keys().next_back().copied()
    }

    /// Largest daily total, 0 for an empty series.
    pub fn max_hours(&self) -> u32 {
        self.hours_by_day.values().copied().max().unwrap_or(0)
    }

    pub fn total_hours(&self) -> u64 {
        self.hours_by_day.values().map(|h| u64::from(*h)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.hours_by_day.iter().map(|(day, hours)| (*day, *hours))
    }
}

/// Collecting sums entries that share a day.
impl FromIterator<(NaiveDate, u32)> for DaySeries {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, u32)>>(iter: T) -> Self {
        let mut series = DaySeries::new();
        for (day, hours) in iter {
            series.add_hours(day, hours);
        }
        series
    }
}
