//! Trace events for the visualization timeline.
//!
//! An algorithm run produces a [`Trace`]: a finite, ordered, immutable
//! sequence of [`Step`]s computed eagerly before playback starts. Replaying
//! a trace any number of times requires no recomputation, and applying its
//! steps in order is the only way visual state changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use waypoint_graph::{Color, Edge, NodeId};

/// One discrete visualization event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Step {
    /// A node entered the frontier or tree for the first time
    Visited { node: NodeId },

    /// A node became the algorithm's focus; the previous focus falls back
    /// to visited
    Current { node: NodeId },

    /// The final reconstructed route, start to end inclusive; at most one
    /// per trace, only on success
    Path { nodes: Vec<NodeId> },

    /// A vertex-coloring assignment
    NodeColor { node: NodeId, color: Color },

    /// An edge accepted into the spanning tree, orientation as stored
    EdgeAccepted { from: NodeId, to: NodeId },

    /// The final accepted edge set; at most one per trace, always last
    MstComplete { edges: Vec<Edge> },

    /// Revert all transient visual state to default
    Reset,
}

/// The complete, precomputed output of one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Wrap a finished step sequence.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// All steps, in emission order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The step at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The reconstructed route, if this run found one. Absence is the
    /// "no route" signal; there is no distinguished error event.
    pub fn found_path(&self) -> Option<&[NodeId]> {
        self.steps.iter().find_map(|step| match step {
            Step::Path { nodes } => Some(nodes.as_slice()),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Walk the parent chain back from `last` and return the route in
/// start-to-end order. A node absent from `parent` is the root.
pub(crate) fn reconstruct_path(parent: &HashMap<NodeId, NodeId>, last: NodeId) -> Vec<NodeId> {
    let mut path = vec![last];
    let mut current = last;
    while let Some(&prev) = parent.get(&current) {
        current = prev;
        path.push(current);
    }
    path.reverse();
    path
}
