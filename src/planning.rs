use crate::assignment::DayAssignment;
use crate::chart::{ChartData, ChartSeriesBuilder};
use crate::graph::{TaskForest, TaskRecord};
use crate::hierarchy::{TaskNode, retain_top_level};
use crate::padding::ReportingInterval;
use crate::resource::{Resource, ResourceDirectory};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    #[error("order {0} not found")]
    OrderNotFound(i32),
    #[error("the order {0} must be scheduled")]
    OrderNotScheduled(i32),
    #[error("duplicate task id {0}")]
    DuplicateTask(i32),
    #[error("task {task} references unknown parent {parent}")]
    UnknownParent { task: i32, parent: i32 },
    #[error("task hierarchy contains a cycle through task {0}")]
    TaskCycle(i32),
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl Order {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn is_some_task_scheduled(&self) -> bool {
        !self.tasks.is_empty()
    }
}

/// What the planner shows for one order: its top-level task trees and every
/// resource that can be allocated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanningState {
    pub order_id: i32,
    pub top_level: Vec<TaskNode>,
    pub resources: Vec<Resource>,
}

/// In-memory copy of the planning domain, already loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningSnapshot {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub assignments: Vec<DayAssignment>,
}

impl PlanningSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self, order_id: i32) -> Result<&Order, PlanningError> {
        self.orders
            .iter()
            .find(|order| order.id == order_id)
            .ok_or(PlanningError::OrderNotFound(order_id))
    }

    pub fn resource_directory(&self) -> ResourceDirectory<'_> {
        ResourceDirectory::new(&self.resources)
    }

    pub fn planning_state(&self, order_id: i32) -> Result<PlanningState, PlanningError> {
        let order = self.order(order_id)?;
        if !order.is_some_task_scheduled() {
            return Err(PlanningError::OrderNotScheduled(order_id));
        }
        let forest = TaskForest::build(&order.tasks)?;
        let top_level: Vec<TaskNode> = retain_top_level(forest.nodes())
            .into_iter()
            .cloned()
            .collect();
        debug!(
            order = order_id,
            tasks = order.tasks.len(),
            top_level = top_level.len(),
            "built planning state"
        );
        Ok(PlanningState {
            order_id,
            top_level,
            resources: self.resources.clone(),
        })
    }

    pub fn order_assignments(&self, order_id: i32) -> Result<Vec<DayAssignment>, PlanningError> {
        self.order(order_id)?;
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.order_id == order_id)
            .cloned()
            .collect())
    }

    /// Distinct resources with at least one assignment on the order.
    pub fn order_resources(&self, order_id: i32) -> Result<BTreeSet<String>, PlanningError> {
        self.order(order_id)?;
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.order_id == order_id)
            .map(|a| a.resource_id.clone())
            .collect())
    }

    /// Every assignment of the given resources, whatever order it belongs to.
    pub fn resource_assignments(&self, resource_ids: &BTreeSet<String>) -> Vec<DayAssignment> {
        self.assignments
            .iter()
            .filter(|a| resource_ids.contains(&a.resource_id))
            .cloned()
            .collect()
    }

    pub fn chart_for_order(
        &self,
        order_id: i32,
        interval: &ReportingInterval,
    ) -> Result<ChartData, PlanningError> {
        if !self.order(order_id)?.is_some_task_scheduled() {
            return Err(PlanningError::OrderNotScheduled(order_id));
        }
        let order_assignments = self.order_assignments(order_id)?;
        let resources = self.order_resources(order_id)?;
        let resource_assignments = self.resource_assignments(&resources);

        let directory = self.resource_directory();
        let builder = ChartSeriesBuilder::new(&directory);
        Ok(builder.build(
            &order_assignments,
            &resource_assignments,
            &order_assignments,
            interval,
        ))
    }

    pub fn validate(&self) -> Result<(), PlanningError> {
        let mut order_ids = HashSet::with_capacity(self.orders.len());
        for order in &self.orders {
            if !order_ids.insert(order.id) {
                return Err(PlanningError::InvalidSnapshot(format!(
                    "duplicate order id {}",
                    order.id
                )));
            }
            TaskForest::build(&order.tasks)?;
        }

        let mut resource_ids = HashSet::with_capacity(self.resources.len());
        for resource in &self.resources {
            if resource.id.trim().is_empty() {
                return Err(PlanningError::InvalidSnapshot(
                    "resource with empty id".to_string(),
                ));
            }
            if !resource_ids.insert(resource.id.as_str()) {
                return Err(PlanningError::InvalidSnapshot(format!(
                    "duplicate resource id '{}'",
                    resource.id
                )));
            }
        }

        for (idx, assignment) in self.assignments.iter().enumerate() {
            if !order_ids.contains(&assignment.order_id) {
                return Err(PlanningError::InvalidSnapshot(format!(
                    "assignment #{idx} references unknown order {}",
                    assignment.order_id
                )));
            }
            if !resource_ids.contains(assignment.resource_id.as_str()) {
                return Err(PlanningError::InvalidSnapshot(format!(
                    "assignment #{idx} references unknown resource '{}'",
                    assignment.resource_id
                )));
            }
        }
        Ok(())
    }
}
