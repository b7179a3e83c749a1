use crate::aggregation::{AssignedHours, CalendarCapacity, CapacityLookup, aggregate};
use crate::assignment::DayAssignment;
use crate::padding::{ChartPoint, ReportingInterval, pad};
use crate::series::DaySeries;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Hours booked on the order itself.
    Order,
    /// Hours booked on the order's resources, across all orders.
    Resources,
    /// Calendar capacity of the resources working on the order.
    Capacity,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Order, SeriesKind::Resources, SeriesKind::Capacity];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKind::Order => "order",
            SeriesKind::Resources => "resources",
            SeriesKind::Capacity => "capacity",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "order" => Ok(SeriesKind::Order),
            "resources" => Ok(SeriesKind::Resources),
            "capacity" => Ok(SeriesKind::Capacity),
            other => Err(format!("unknown series '{other}'")),
        }
    }
}

/// Largest daily value seen so far in one chart build. Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningMaximum(u32);

impl RunningMaximum {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn observe(&mut self, series: &DaySeries) {
        self.0 = self.0.max(series.max_hours());
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Vertical axis shared by all series of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub interval: ReportingInterval,
    pub order: Vec<ChartPoint>,
    pub resources: Vec<ChartPoint>,
    pub capacity: Vec<ChartPoint>,
    pub max_hours: u32,
}

impl ChartData {
    pub fn series(&self, kind: SeriesKind) -> &[ChartPoint] {
        match kind {
            SeriesKind::Order => &self.order,
            SeriesKind::Resources => &self.resources,
            SeriesKind::Capacity => &self.capacity,
        }
    }

    pub fn value_axis(&self) -> ValueAxis {
        ValueAxis {
            min: 0,
            max: self.max_hours,
        }
    }
}

/// Builds the three load series of an order chart.
///
/// The builder holds no per-build state, so one instance can serve any
/// number of builds.
pub struct ChartSeriesBuilder<'a, L: ?Sized> {
    capacity: &'a L,
}

impl<'a, L: CapacityLookup + ?Sized> ChartSeriesBuilder<'a, L> {
    pub fn new(capacity: &'a L) -> Self {
        Self { capacity }
    }

    pub fn build(
        &self,
        order_assignments: &[DayAssignment],
        resource_assignments: &[DayAssignment],
        capacity_assignments: &[DayAssignment],
        interval: &ReportingInterval,
    ) -> ChartData {
        let mut maximum = RunningMaximum::new();

        let order = aggregate(order_assignments, &AssignedHours);
        let order = Self::finish_series(SeriesKind::Order, &order, &mut maximum, interval);

        let resources = aggregate(resource_assignments, &AssignedHours);
        let resources =
            Self::finish_series(SeriesKind::Resources, &resources, &mut maximum, interval);

        let capacity = aggregate(capacity_assignments, &CalendarCapacity::new(self.capacity));
        let capacity = Self::finish_series(SeriesKind::Capacity, &capacity, &mut maximum, interval);

        ChartData {
            interval: *interval,
            order,
            resources,
            capacity,
            max_hours: maximum.value(),
        }
    }

    fn finish_series(
        kind: SeriesKind,
        series: &DaySeries,
        maximum: &mut RunningMaximum,
        interval: &ReportingInterval,
    ) -> Vec<ChartPoint> {
        maximum.observe(series);
        debug!(
            series = kind.as_str(),
            days = series.len(),
            max_hours = series.max_hours(),
            "aggregated chart series"
        );
        pad(series, interval)
    }
}
