//! Dijkstra shortest path.
//!
//! The frontier is a plain `Vec` re-sorted by tentative distance on every
//! iteration. The sort is stable, so nodes with equal distance keep their
//! insertion order; swapping in a binary heap would have to preserve that
//! tie-break to keep traces identical. Unvisited distance is `+infinity`.
//! Requires non-negative weights; behavior on negative weights is
//! unspecified and not guarded.

use std::collections::{HashMap, HashSet};

use waypoint_graph::{Graph, NodeId};

use crate::trace::{reconstruct_path, Step, Trace};

/// Run Dijkstra's algorithm from `start` toward `end`.
///
/// Emits `Current` each time a node is extracted as the new minimum and
/// `Visited` when a relaxation first places a node in the frontier. On
/// extracting `end`, emits `Path` and stops. A finalized node is never
/// re-processed. A missing `start` or `end` yields an empty trace.
pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> Trace {
    if !graph.contains(start) || !graph.contains(end) {
        return Trace::default();
    }

    let mut steps = Vec::new();
    let mut frontier = vec![start];
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();

    let mut distance: HashMap<NodeId, f64> = graph
        .nodes()
        .iter()
        .map(|n| (n.id, if n.id == start { 0.0 } else { f64::INFINITY }))
        .collect();

    steps.push(Step::Visited { node: start });
    steps.push(Step::Current { node: start });

    while !frontier.is_empty() {
        // Stable sort keeps insertion order on ties
        frontier.sort_by(|a, b| distance[a].total_cmp(&distance[b]));
        let current = frontier.remove(0);

        if !visited.insert(current) {
            continue;
        }

        steps.push(Step::Current { node: current });

        if current == end {
            steps.push(Step::Path {
                nodes: reconstruct_path(&parent, current),
            });
            break;
        }

        for neighbor in graph.neighbors(current) {
            if visited.contains(&neighbor) {
                continue;
            }

            // Edges pointing outside the node set relax nothing
            let Some(&best) = distance.get(&neighbor) else {
                continue;
            };

            let next = distance[&current] + graph.edge_weight(current, neighbor);
            if next < best {
                distance.insert(neighbor, next);
                parent.insert(neighbor, current);

                if !frontier.contains(&neighbor) {
                    frontier.push(neighbor);
                    steps.push(Step::Visited { node: neighbor });
                }
            }
        }
    }

    Trace::new(steps)
}
