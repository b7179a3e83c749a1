use crate::hierarchy::TaskNode;
use crate::planning::PlanningError;
use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat task row as stored with an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub milestone: bool,
}

impl TaskRecord {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
            milestone: false,
        }
    }

    pub fn child_of(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Nested task trees built from flat records.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForest {
    roots: Vec<TaskNode>,
}

impl TaskForest {
    pub fn build(records: &[TaskRecord]) -> Result<Self, PlanningError> {
        // Node weight is the record position, so children keep record order.
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let mut id_to_index: HashMap<i32, NodeIndex> = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if id_to_index.contains_key(&record.id) {
                return Err(PlanningError::DuplicateTask(record.id));
            }
            id_to_index.insert(record.id, graph.add_node(position));
        }

        // Edges: parent -> child
        for record in records {
            if let Some(parent_id) = record.parent_id {
                let parent_ix = id_to_index.get(&parent_id).copied().ok_or(
                    PlanningError::UnknownParent {
                        task: record.id,
                        parent: parent_id,
                    },
                )?;
                graph.add_edge(parent_ix, id_to_index[&record.id], ());
            }
        }

        toposort(&graph, None)
            .map_err(|cycle| PlanningError::TaskCycle(records[graph[cycle.node_id()]].id))?;

        let roots = records
            .iter()
            .filter(|record| record.parent_id.is_none())
            .map(|record| Self::materialize(&graph, id_to_index[&record.id], records))
            .collect();
        Ok(Self { roots })
    }

    fn materialize(graph: &DiGraph<usize, ()>, ix: NodeIndex, records: &[TaskRecord]) -> TaskNode {
        let mut children: Vec<NodeIndex> = graph
            .neighbors_directed(ix, Direction::Outgoing)
            .collect();
        children.sort_by_key(|child| graph[*child]);

        let record = &records[graph[ix]];
        TaskNode {
            id: record.id,
            name: record.name.clone(),
            milestone: record.milestone,
            children: children
                .into_iter()
                .map(|child| Self::materialize(graph, child, records))
                .collect(),
        }
    }

    pub fn roots(&self) -> &[TaskNode] {
        &self.roots
    }

    /// Every node of every tree, depth first.
    pub fn nodes(&self) -> Vec<&TaskNode> {
        self.roots.iter().flat_map(TaskNode::flatten).collect()
    }
}
