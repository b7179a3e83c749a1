use super::PersistenceResult;
use crate::PlanningSnapshot;
use crate::chart::{ChartData, SeriesKind};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

pub fn save_snapshot_to_json<P: AsRef<Path>>(
    snapshot: &PlanningSnapshot,
    path: P,
) -> PersistenceResult<()> {
    super::validate_snapshot(snapshot)?;
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, snapshot)?;
    info!(path = %path.as_ref().display(), orders = snapshot.orders.len(), "saved planning snapshot");
    Ok(())
}

pub fn load_snapshot_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<PlanningSnapshot> {
    let file = File::open(path.as_ref())?;
    let snapshot: PlanningSnapshot = serde_json::from_reader(BufReader::new(file))?;
    super::validate_snapshot(&snapshot)?;
    info!(
        path = %path.as_ref().display(),
        orders = snapshot.orders.len(),
        resources = snapshot.resources.len(),
        assignments = snapshot.assignments.len(),
        "loaded planning snapshot"
    );
    Ok(snapshot)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartCsvRecord {
    pub series: SeriesKind,
    pub day: String,
    pub hours: u32,
}

/// One row per plotted point: `series,day,hours`.
pub fn export_chart_to_csv<P: AsRef<Path>>(chart: &ChartData, path: P) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for kind in SeriesKind::ALL {
        for point in chart.series(kind) {
            writer.serialize(ChartCsvRecord {
                series: kind,
                day: point.day.format("%Y-%m-%d").to_string(),
                hours: point.hours,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
