//! Greedy vertex coloring.
//!
//! First-fit over the graph's node order: each node takes the smallest
//! color index not used by an already-colored neighbor. Produces a valid
//! proper coloring, not the chromatic number. Adjacency is viewed
//! undirected here (every edge constrains both endpoints), which is why
//! this module builds its own view instead of using `Graph::neighbors`.

use std::collections::{HashMap, HashSet};

use waypoint_graph::{Color, Graph, NodeId};

use crate::trace::{Step, Trace};

/// Display palette for coloring, cycled by color index.
///
/// Color indices beyond the palette wrap around, so two logically distinct
/// indices can share a display color; the index, not the hex value, is what
/// the coloring guarantees distinct across neighbors.
pub const PALETTE: [Color; 5] = [
    Color::from_static("#4ade80"),
    Color::from_static("#60a5fa"),
    Color::from_static("#f97316"),
    Color::from_static("#a855f7"),
    Color::from_static("#ec4899"),
];

/// The display color for a logical color index.
pub fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()].clone()
}

/// Run greedy first-fit coloring over the whole graph.
///
/// Emits `Current` then `NodeColor` per node, in node-list order. Start and
/// end ids play no role here.
pub fn greedy_coloring(graph: &Graph) -> Trace {
    let mut steps = Vec::new();
    let mut assigned: HashMap<NodeId, usize> = HashMap::new();

    // Undirected adjacency: each edge contributes both directions
    let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for edge in graph.edges() {
        adjacency.entry(edge.from).or_default().push(edge.to);
        adjacency.entry(edge.to).or_default().push(edge.from);
    }

    for node in graph.nodes() {
        let mut used: HashSet<usize> = HashSet::new();
        if let Some(neighbors) = adjacency.get(&node.id) {
            for neighbor in neighbors {
                if let Some(&color) = assigned.get(neighbor) {
                    used.insert(color);
                }
            }
        }

        let mut index = 0;
        while used.contains(&index) {
            index += 1;
        }
        assigned.insert(node.id, index);

        steps.push(Step::Current { node: node.id });
        steps.push(Step::NodeColor {
            node: node.id,
            color: color_for(index),
        });
    }

    Trace::new(steps)
}
