pub mod aggregation;
pub mod assignment;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod graph;
pub mod hierarchy;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod padding;
pub mod persistence;
pub mod planning;
pub mod plot;
pub mod resource;
pub mod series;

pub use aggregation::{
    AssignedHours, CalendarCapacity, CapacityLookup, HoursMode, HoursSource, aggregate,
    aggregate_by_mode,
};
pub use assignment::DayAssignment;
pub use calendar::{CalendarException, ResourceCalendar, ResourceCalendarConfig, WorkingDay};
pub use chart::{ChartData, ChartSeriesBuilder, RunningMaximum, SeriesKind, ValueAxis};
pub use graph::{TaskForest, TaskRecord};
pub use hierarchy::{TaskNode, descendant_ids, retain_top_level};
pub use padding::{ChartPoint, IntervalError, ReportingInterval, pad};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteSnapshotStore;
pub use persistence::{
    PersistenceError, SnapshotStore, export_chart_to_csv, load_snapshot_from_json,
    save_snapshot_to_json, validate_snapshot,
};
pub use planning::{Order, PlanningError, PlanningSnapshot, PlanningState};
pub use plot::{PlotDataError, parse_plot_data, plot_data_string, write_plot_data};
pub use resource::{Resource, ResourceDirectory};
pub use series::DaySeries;
