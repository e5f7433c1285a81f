//! Breadth-first traversal.
//!
//! FIFO frontier over an unweighted view of the graph. Parent pointers
//! record the first discoverer only, so the reconstructed route has the
//! minimum hop count.

use std::collections::{HashMap, HashSet, VecDeque};

use waypoint_graph::{Graph, NodeId};

use crate::trace::{reconstruct_path, Step, Trace};

/// Run breadth-first search from `start` toward `end`.
///
/// Emits `Visited` when a node is enqueued, `Current` when it is dequeued,
/// and a single `Path` on dequeuing `end`. If the frontier drains without
/// reaching `end` the trace simply ends. A missing `start` or `end` yields
/// an empty trace.
pub fn bfs(graph: &Graph, start: NodeId, end: NodeId) -> Trace {
    if !graph.contains(start) || !graph.contains(end) {
        return Trace::default();
    }

    let mut steps = Vec::new();
    let mut queue = VecDeque::from([start]);
    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();

    steps.push(Step::Visited { node: start });
    steps.push(Step::Current { node: start });

    while let Some(current) = queue.pop_front() {
        steps.push(Step::Current { node: current });

        if current == end {
            steps.push(Step::Path {
                nodes: reconstruct_path(&parent, current),
            });
            break;
        }

        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                parent.insert(neighbor, current);
                queue.push_back(neighbor);
                steps.push(Step::Visited { node: neighbor });
            }
        }
    }

    Trace::new(steps)
}
