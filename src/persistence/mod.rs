use crate::PlanningSnapshot;
use crate::planning::PlanningError;
use serde_json::Error as SerdeJsonError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl From<PlanningError> for PersistenceError {
    fn from(value: PlanningError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub trait SnapshotStore {
    fn save_snapshot(&self, snapshot: &PlanningSnapshot) -> PersistenceResult<()>;
    fn load_snapshot(&self) -> PersistenceResult<Option<PlanningSnapshot>>;
}

pub fn validate_snapshot(snapshot: &PlanningSnapshot) -> PersistenceResult<()> {
    snapshot.validate()?;
    Ok(())
}

#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod file;

pub use file::{export_chart_to_csv, load_snapshot_from_json, save_snapshot_to_json};
