use super::{PersistenceError, PersistenceResult, SnapshotStore};
use crate::assignment::DayAssignment;
use crate::planning::Order;
use crate::resource::Resource;
use crate::PlanningSnapshot;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;
use tracing::info;

pub struct SqliteSnapshotStore {
    connection: Mutex<Connection>,
}

impl SqliteSnapshotStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    pub fn in_memory() -> PersistenceResult<Self> {
        let connection = Connection::open_in_memory()?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS snapshot_info (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                order_count INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS orders (
                seq INTEGER PRIMARY KEY,
                id INTEGER NOT NULL UNIQUE,
                order_json TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS resources (
                seq INTEGER PRIMARY KEY,
                id TEXT NOT NULL UNIQUE,
                resource_json TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS assignments (
                seq INTEGER PRIMARY KEY,
                assignment_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }

    fn save_orders(tx: &rusqlite::Transaction, orders: &[Order]) -> PersistenceResult<()> {
        tx.execute("DELETE FROM orders", [])?;
        let mut stmt =
            tx.prepare("INSERT INTO orders (seq, id, order_json) VALUES (?1, ?2, ?3)")?;
        for (seq, order) in orders.iter().enumerate() {
            let json = serde_json::to_string(order)?;
            stmt.execute(params![seq as i64, order.id, json])?;
        }
        Ok(())
    }

    fn save_resources(tx: &rusqlite::Transaction, resources: &[Resource]) -> PersistenceResult<()> {
        tx.execute("DELETE FROM resources", [])?;
        let mut stmt =
            tx.prepare("INSERT INTO resources (seq, id, resource_json) VALUES (?1, ?2, ?3)")?;
        for (seq, resource) in resources.iter().enumerate() {
            let json = serde_json::to_string(resource)?;
            stmt.execute(params![seq as i64, resource.id, json])?;
        }
        Ok(())
    }

    fn save_assignments(
        tx: &rusqlite::Transaction,
        assignments: &[DayAssignment],
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM assignments", [])?;
        let mut stmt =
            tx.prepare("INSERT INTO assignments (seq, assignment_json) VALUES (?1, ?2)")?;
        for (seq, assignment) in assignments.iter().enumerate() {
            let json = serde_json::to_string(assignment)?;
            stmt.execute(params![seq as i64, json])?;
        }
        Ok(())
    }

    fn load_json_rows<T: serde::de::DeserializeOwned>(
        conn: &Connection,
        sql: &str,
    ) -> PersistenceResult<Vec<T>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut items = Vec::new();
        for json in rows {
            items.push(serde_json::from_str(&json?)?);
        }
        Ok(items)
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn save_snapshot(&self, snapshot: &PlanningSnapshot) -> PersistenceResult<()> {
        super::validate_snapshot(snapshot)?;
        let mut conn = self
            .connection
            .lock()
            .map_err(|_| PersistenceError::LockPoisoned)?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM snapshot_info", [])?;
        tx.execute(
            "INSERT INTO snapshot_info (id, order_count) VALUES (1, ?1)",
            params![snapshot.orders.len() as i64],
        )?;
        Self::save_orders(&tx, &snapshot.orders)?;
        Self::save_resources(&tx, &snapshot.resources)?;
        Self::save_assignments(&tx, &snapshot.assignments)?;
        tx.commit()?;
        info!(orders = snapshot.orders.len(), "saved planning snapshot to sqlite");
        Ok(())
    }

    fn load_snapshot(&self) -> PersistenceResult<Option<PlanningSnapshot>> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersistenceError::LockPoisoned)?;

        let mut stmt = conn.prepare("SELECT order_count FROM snapshot_info WHERE id = 1")?;
        let stored: Option<i64> = stmt.query_row([], |row| row.get(0)).optional()?;
        if stored.is_none() {
            return Ok(None);
        }

        let snapshot = PlanningSnapshot {
            orders: Self::load_json_rows(&conn, "SELECT order_json FROM orders ORDER BY seq ASC")?,
            resources: Self::load_json_rows(
                &conn,
                "SELECT resource_json FROM resources ORDER BY seq ASC",
            )?,
            assignments: Self::load_json_rows(
                &conn,
                "SELECT assignment_json FROM assignments ORDER BY seq ASC",
            )?,
        };
        super::validate_snapshot(&snapshot)?;
        Ok(Some(snapshot))
    }
}
