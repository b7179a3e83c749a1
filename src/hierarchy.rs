use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node in a tree of planning tasks. A node without children is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub milestone: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaskNode>,
}

impl TaskNode {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            milestone: false,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TaskNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// This node followed by all of its descendants, depth first.
    pub fn flatten(&self) -> Vec<&TaskNode> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.flatten());
        }
        nodes
    }
}

/// Ids of every node below `node` (children, grandchildren, ...).
pub fn descendant_ids(node: &TaskNode) -> HashSet<i32> {
    if node.is_leaf() {
        return HashSet::new();
    }
    let mut ids = HashSet::new();
    for child in &node.children {
        ids.insert(child.id);
        ids.extend(descendant_ids(child));
    }
    ids
}

/// Keep only the tasks that are not a descendant of another task in the
/// same input. Input order is preserved in the result.
///
/// The hierarchy must be acyclic.
pub fn retain_top_level<'a, I>(tasks: I) -> Vec<&'a TaskNode>
where
    I: IntoIterator<Item = &'a TaskNode>,
{
    let tasks: Vec<&TaskNode> = tasks.into_iter().collect();
    let descendants: HashSet<i32> = tasks
        .iter()
        .flat_map(|task| descendant_ids(task))
        .collect();
    tasks
        .into_iter()
        .filter(|task| !descendants.contains(&task.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TaskNode {
        // A -> [B, C], B -> [D]
        TaskNode::new(1, "A").with_children(vec![
            TaskNode::new(2, "B").with_children(vec![TaskNode::new(4, "D")]),
            TaskNode::new(3, "C"),
        ])
    }

    #[test]
    fn descendant_ids_reach_grandchildren() {
        let tree = sample_tree();
        assert_eq!(descendant_ids(&tree), HashSet::from([2, 3, 4]));
        assert!(descendant_ids(&tree.children[1]).is_empty());
    }

    #[test]
    fn flatten_is_depth_first() {
        let tree = sample_tree();
        let ids: Vec<i32> = tree.flatten().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 3]);
    }
}
