//! Prim minimum spanning tree.
//!
//! Grows a tree from a root by scanning the full edge list each iteration
//! for the minimum-weight edge with exactly one endpoint inside the tree.
//! The strict `<` comparison means the first minimal edge in edge-list
//! order wins ties; a priority-queue rewrite would have to select the same
//! edge each iteration to keep traces identical. O(E) per accepted edge is
//! fine at visualization scale.

use std::collections::HashSet;

use waypoint_graph::{Edge, Graph, NodeId};

use crate::trace::{Step, Trace};

/// Run Prim's algorithm from `root`.
///
/// Per accepted edge, emits `Visited` + `Current` for the newly attached
/// node and `EdgeAccepted` with the edge's stored orientation. On a
/// disconnected graph the scan finds no crossing edge and the run stops
/// early with whatever subtree was built. The trace always ends with one
/// `MstComplete` carrying the accepted edges in acceptance order. A missing
/// `root` yields an empty trace.
pub fn prim(graph: &Graph, root: NodeId) -> Trace {
    if !graph.contains(root) {
        return Trace::default();
    }

    let mut steps = Vec::new();
    let mut in_tree: HashSet<NodeId> = HashSet::from([root]);
    let mut accepted: Vec<Edge> = Vec::new();

    steps.push(Step::Visited { node: root });
    steps.push(Step::Current { node: root });

    while in_tree.len() < graph.node_count() {
        let mut best: Option<&Edge> = None;
        let mut best_weight = f64::INFINITY;

        for edge in graph.edges() {
            let from_in = in_tree.contains(&edge.from);
            let to_in = in_tree.contains(&edge.to);
            if from_in != to_in {
                let weight = edge.weight_or_default();
                if weight < best_weight {
                    best_weight = weight;
                    best = Some(edge);
                }
            }
        }

        // No crossing edge left: the rest of the graph is unreachable
        let Some(edge) = best else {
            break;
        };

        let attached = if in_tree.contains(&edge.from) {
            edge.to
        } else {
            edge.from
        };
        in_tree.insert(attached);
        accepted.push(edge.clone());

        steps.push(Step::Visited { node: attached });
        steps.push(Step::Current { node: attached });
        steps.push(Step::EdgeAccepted {
            from: edge.from,
            to: edge.to,
        });
    }

    steps.push(Step::MstComplete { edges: accepted });
    Trace::new(steps)
}
