//! A* heuristic search.
//!
//! Dijkstra's relaxation ordered by `f = g + h`, where `g` is accumulated
//! edge weight from the start and `h` is the straight-line distance from a
//! node's position to the end's position. The heuristic is admissible only
//! when edge weights are at least the straight-line distance between their
//! endpoints; the engine does not enforce that, so optimality is not
//! guaranteed for arbitrary weight/geometry combinations.

use std::collections::HashMap;

use waypoint_graph::{Graph, NodeId};

use crate::trace::{reconstruct_path, Step, Trace};

/// Run A* from `start` toward `end`.
///
/// Same `Visited`/`Current`/`Path` event pattern as Dijkstra. A node gets
/// its `Visited` event when it first enters the open set, even if the
/// relaxation that found it is then rejected. A missing `start` or `end`
/// yields an empty trace.
pub fn astar(graph: &Graph, start: NodeId, end: NodeId) -> Trace {
    let (Some(_), Some(end_node)) = (graph.node(start), graph.node(end)) else {
        return Trace::default();
    };
    let end_node = end_node.clone();

    let heuristic = |id: NodeId| -> f64 {
        graph
            .node(id)
            .map(|n| n.distance_to(&end_node))
            .unwrap_or(f64::INFINITY)
    };

    let mut steps = Vec::new();
    let mut open = vec![start];
    let mut closed: Vec<NodeId> = Vec::new();
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();

    let mut g_score: HashMap<NodeId, f64> = graph
        .nodes()
        .iter()
        .map(|n| (n.id, if n.id == start { 0.0 } else { f64::INFINITY }))
        .collect();
    let mut f_score: HashMap<NodeId, f64> =
        graph.nodes().iter().map(|n| (n.id, f64::INFINITY)).collect();
    f_score.insert(start, heuristic(start));

    steps.push(Step::Visited { node: start });
    steps.push(Step::Current { node: start });

    while !open.is_empty() {
        // Stable sort keeps insertion order on equal f
        open.sort_by(|a, b| f_score[a].total_cmp(&f_score[b]));
        let current = open.remove(0);

        steps.push(Step::Current { node: current });

        if current == end {
            steps.push(Step::Path {
                nodes: reconstruct_path(&parent, current),
            });
            break;
        }

        closed.push(current);

        for neighbor in graph.neighbors(current) {
            if closed.contains(&neighbor) {
                continue;
            }

            // Edges pointing outside the node set relax nothing
            let Some(&g_neighbor) = g_score.get(&neighbor) else {
                continue;
            };

            let tentative = g_score[&current] + graph.edge_weight(current, neighbor);

            if !open.contains(&neighbor) {
                open.push(neighbor);
                steps.push(Step::Visited { node: neighbor });
            }

            if tentative >= g_neighbor {
                continue;
            }

            parent.insert(neighbor, current);
            g_score.insert(neighbor, tentative);
            f_score.insert(neighbor, tentative + heuristic(neighbor));
        }
    }

    Trace::new(steps)
}
