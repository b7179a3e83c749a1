use crate::series::DaySeries;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("reporting interval start {start} is after its finish {finish}")]
    Inverted { start: NaiveDate, finish: NaiveDate },
}

/// Inclusive `[start, finish]` range of days a chart reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportingInterval {
    start: NaiveDate,
    finish: NaiveDate,
}

impl ReportingInterval {
    pub fn new(start: NaiveDate, finish: NaiveDate) -> Result<Self, IntervalError> {
        if start > finish {
            return Err(IntervalError::Inverted { start, finish });
        }
        Ok(Self { start, finish })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn finish(&self) -> NaiveDate {
        self.finish
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.finish
    }

    pub fn days(&self) -> i64 {
        (self.finish - self.start).num_days() + 1
    }
}

/// One plotted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub day: NaiveDate,
    pub hours: u32,
}

impl ChartPoint {
    pub fn new(day: NaiveDate, hours: u32) -> Self {
        Self { day, hours }
    }

    pub fn zero(day: NaiveDate) -> Self {
        Self { day, hours: 0 }
    }
}

/// Surround `series` with zero points so the plot starts at the interval
/// start and ends at the interval finish, dropping vertically to zero next
/// to the first and last real day.
///
/// An empty series yields a single zero point at the interval start and
/// nothing at the finish. Points outside the interval are kept as they are.
pub fn pad(series: &DaySeries, interval: &ReportingInterval) -> Vec<ChartPoint> {
    let (Some(first), Some(last)) = (series.first_day(), series.last_day()) else {
        return vec![ChartPoint::zero(interval.start())];
    };

    let mut points = Vec::with_capacity(series.len() + 4);

    if interval.start() < first {
        points.push(ChartPoint::zero(interval.start()));
        let day_before = first - Duration::days(1);
        if day_before > interval.start() {
            points.push(ChartPoint::zero(day_before));
        }
    }

    points.extend(series.iter().map(|(day, hours)| ChartPoint::new(day, hours)));

    if last < interval.finish() {
        let day_after = last + Duration::days(1);
        points.push(ChartPoint::zero(day_after));
        if day_after < interval.finish() {
            points.push(ChartPoint::zero(interval.finish()));
        }
    }

    points
}
