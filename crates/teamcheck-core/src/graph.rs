//! Reports-to graph and cycle detection.
//!
//! Each role points at most at one supervisor, so the relation is stored as
//! a plain `role id → supervisor id` map over identifiers rather than links
//! between role objects. Insertion order is kept so that traversal, and hence
//! the reported cycle, follows document order.

use std::collections::{HashMap, HashSet};

/// Directed `role → supervisor` relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportingGraph {
    order: Vec<String>,
    supervisors: HashMap<String, String>,
}

impl ReportingGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `role` reports to `supervisor`. Re-inserting a role
    /// replaces its supervisor but keeps its original position.
    pub fn insert(&mut self, role: impl Into<String>, supervisor: impl Into<String>) {
        let role = role.into();
        if !self.supervisors.contains_key(&role) {
            self.order.push(role.clone());
        }
        self.supervisors.insert(role, supervisor.into());
    }

    pub fn supervisor_of(&self, role: &str) -> Option<&str> {
        self.supervisors.get(role).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether any chain of supervisors loops back on itself.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Return the first cycle found as a closed path, e.g. `[a, b, a]`.
    ///
    /// Iterative DFS: a node seen again while still on the current walk
    /// closes a cycle; finished nodes stay visited and are never re-walked.
    /// Out-degree is at most one, so the whole scan is O(V + E).
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut visited: HashSet<&str> = HashSet::new();

        for start in &self.order {
            if visited.contains(start.as_str()) {
                continue;
            }

            let mut stack: Vec<&str> = Vec::new();
            let mut on_stack: HashSet<&str> = HashSet::new();
            let mut next = Some(start.as_str());

            while let Some(node) = next {
                if on_stack.contains(node) {
                    if let Some(pos) = stack.iter().position(|n| *n == node) {
                        let mut cycle: Vec<String> =
                            stack[pos..].iter().map(|n| n.to_string()).collect();
                        cycle.push(node.to_string());
                        return Some(cycle);
                    }
                }
                if !visited.insert(node) {
                    break;
                }
                stack.push(node);
                on_stack.insert(node);
                next = self.supervisor_of(node);
            }
        }

        None
    }
}

impl<R: Into<String>, S: Into<String>> FromIterator<(R, S)> for ReportingGraph {
    fn from_iter<I: IntoIterator<Item = (R, S)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (role, supervisor) in iter {
            graph.insert(role, supervisor);
        }
        graph
    }
}
