//! Depth-first traversal.
//!
//! An explicit stack machine: each frame holds a node and how far through
//! its neighbor list it has advanced. The live frame stack doubles as the
//! root-to-node route, so success emits the route without any parent map.
//! A visited set (not path-local exclusion) gives cycle safety: a node is
//! never entered twice, even from a different branch.

use std::collections::HashSet;

use waypoint_graph::{Graph, NodeId};

use crate::trace::{Step, Trace};

/// Run depth-first search from `start` toward `end`.
///
/// Emits `Visited` + `Current` together when a node is entered, explores
/// neighbors in edge-list order, and on reaching `end` emits `Path` with the
/// current stack and stops; later siblings and ancestors are never
/// explored. Backtracking emits nothing. A missing `start` or `end` yields
/// an empty trace.
pub fn dfs(graph: &Graph, start: NodeId, end: NodeId) -> Trace {
    if !graph.contains(start) || !graph.contains(end) {
        return Trace::default();
    }

    let mut steps = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut path = vec![start];
    // (node, neighbors, next neighbor index)
    let mut stack = vec![(start, graph.neighbors(start), 0usize)];

    steps.push(Step::Visited { node: start });
    steps.push(Step::Current { node: start });

    if start == end {
        steps.push(Step::Path { nodes: path });
        return Trace::new(steps);
    }

    while let Some((_, neighbors, index)) = stack.last_mut() {
        let Some(&next) = neighbors.get(*index) else {
            // Neighbor list exhausted: backtrack
            stack.pop();
            path.pop();
            continue;
        };
        *index += 1;

        if !visited.insert(next) {
            continue;
        }

        path.push(next);
        steps.push(Step::Visited { node: next });
        steps.push(Step::Current { node: next });

        if next == end {
            steps.push(Step::Path { nodes: path });
            break;
        }

        stack.push((next, graph.neighbors(next), 0));
    }

    Trace::new(steps)
}
