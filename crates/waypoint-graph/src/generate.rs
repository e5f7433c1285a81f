//! Deterministic demo-graph generation.
//!
//! Two layouts: a square grid with 4-way connectivity (optionally thinned,
//! weighted, or cross-linked diagonally) and a ring with optional cross
//! links and chords. All randomness flows from the config's seed, so a
//! given config always produces the same graph.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph, Node, NodeId};

/// Random integer edge weights are drawn from this range.
const WEIGHT_RANGE: std::ops::RangeInclusive<u32> = 1..=9;

/// Configuration for [`grid`].
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Nodes per row and per column.
    pub size: usize,
    /// Distance between adjacent nodes.
    pub spacing: f64,
    /// Position of the top-left node.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Insert the reciprocal of every edge.
    pub bidirectional: bool,
    /// Assign random integer weights instead of leaving edges unweighted.
    pub weighted: bool,
    /// Probability of a down-right diagonal link per interior cell.
    pub diagonal_rate: f64,
    /// Fraction of edges removed after construction.
    pub remove_rate: f64,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 5,
            spacing: 80.0,
            offset_x: 100.0,
            offset_y: 100.0,
            bidirectional: false,
            weighted: false,
            diagonal_rate: 0.0,
            remove_rate: 0.0,
            seed: 42,
        }
    }
}

/// Configuration for [`ring`].
#[derive(Debug, Clone)]
pub struct RingConfig {
    /// Number of nodes on the circle.
    pub count: usize,
    /// Circle center.
    pub center_x: f64,
    pub center_y: f64,
    /// Circle radius.
    pub radius: f64,
    /// Probability of a link to the diametrically opposite node (first half
    /// of an even-count ring only, so each pair links once).
    pub cross_rate: f64,
    /// Probability of a skip-two chord per node.
    pub chord_rate: f64,
    /// Assign random integer weights instead of leaving edges unweighted.
    pub weighted: bool,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            count: 10,
            center_x: 250.0,
            center_y: 250.0,
            radius: 200.0,
            cross_rate: 1.0,
            chord_rate: 0.3,
            weighted: true,
            seed: 42,
        }
    }
}

/// Generate a `size × size` grid graph.
pub fn grid(config: &GridConfig) -> Graph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let size = config.size;

    let mut nodes = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let id = NodeId((row * size + col) as u32);
            nodes.push(Node::new(
                id,
                config.offset_x + col as f64 * config.spacing,
                config.offset_y + row as f64 * config.spacing,
            ));
        }
    }

    let mut edges = Vec::new();
    let link = |edges: &mut Vec<Edge>, rng: &mut StdRng, from: u32, to: u32| {
        let weight = config
            .weighted
            .then(|| rng.gen_range(WEIGHT_RANGE) as f64);
        edges.push(Edge {
            from: NodeId(from),
            to: NodeId(to),
            weight,
        });
        if config.bidirectional {
            edges.push(Edge {
                from: NodeId(to),
                to: NodeId(from),
                weight,
            });
        }
    };

    for row in 0..size {
        for col in 0..size {
            let id = (row * size + col) as u32;
            if col < size - 1 {
                link(&mut edges, &mut rng, id, id + 1);
            }
            if row < size - 1 {
                link(&mut edges, &mut rng, id, id + size as u32);
            }
            if row < size - 1 && col < size - 1 && rng.gen_bool(config.diagonal_rate) {
                link(&mut edges, &mut rng, id, id + size as u32 + 1);
            }
        }
    }

    // Thin the grid by dropping random edges, one at a time
    let to_remove = (edges.len() as f64 * config.remove_rate) as usize;
    for _ in 0..to_remove {
        if edges.is_empty() {
            break;
        }
        let index = rng.gen_range(0..edges.len());
        edges.remove(index);
    }

    Graph::new(nodes, edges)
}

/// Generate a ring graph with `count` nodes on a circle.
pub fn ring(config: &RingConfig) -> Graph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let count = config.count;

    let mut nodes = Vec::with_capacity(count);
    for i in 0..count {
        let angle = (i as f64 / count as f64) * std::f64::consts::TAU;
        nodes.push(Node::new(
            NodeId(i as u32),
            config.center_x + angle.cos() * config.radius,
            config.center_y + angle.sin() * config.radius,
        ));
    }

    let weight = |rng: &mut StdRng| {
        config
            .weighted
            .then(|| rng.gen_range(WEIGHT_RANGE) as f64)
    };

    let mut edges = Vec::new();
    for i in 0..count {
        let id = i as u32;
        let next = ((i + 1) % count) as u32;
        let w = weight(&mut rng);
        edges.push(Edge {
            from: NodeId(id),
            to: NodeId(next),
            weight: w,
        });

        if count % 2 == 0 && i < count / 2 && rng.gen_bool(config.cross_rate) {
            let across = ((i + count / 2) % count) as u32;
            let w = weight(&mut rng);
            edges.push(Edge {
                from: NodeId(id),
                to: NodeId(across),
                weight: w,
            });
        }

        if rng.gen_bool(config.chord_rate) {
            let chord = ((i + 2) % count) as u32;
            let w = weight(&mut rng);
            edges.push(Edge {
                from: NodeId(id),
                to: NodeId(chord),
                weight: w,
            });
        }
    }

    Graph::new(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_node_layout() {
        let graph = grid(&GridConfig::default());
        assert_eq!(graph.node_count(), 25);

        // Row-major ids, spaced positions
        let node = graph.node(NodeId(7)).unwrap(); // row 1, col 2
        assert_eq!(node.x, 100.0 + 2.0 * 80.0);
        assert_eq!(node.y, 100.0 + 1.0 * 80.0);
    }

    #[test]
    fn grid_has_four_way_edges() {
        let config = GridConfig {
            size: 3,
            ..GridConfig::default()
        };
        let graph = grid(&config);
        // 3x3 grid: 6 right + 6 down edges
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.neighbors(NodeId(0)), vec![NodeId(1), NodeId(3)]);
        // Bottom-right corner has no outgoing edges
        assert!(graph.neighbors(NodeId(8)).is_empty());
    }

    #[test]
    fn bidirectional_grid_doubles_edges() {
        let config = GridConfig {
            size: 3,
            bidirectional: true,
            ..GridConfig::default()
        };
        let graph = grid(&config);
        assert_eq!(graph.edge_count(), 24);
        assert!(graph.neighbors(NodeId(8)).contains(&NodeId(7)));
    }

    #[test]
    fn same_seed_same_graph() {
        let config = GridConfig {
            weighted: true,
            diagonal_rate: 0.5,
            remove_rate: 0.2,
            seed: 7,
            ..GridConfig::default()
        };
        assert_eq!(grid(&config), grid(&config));
    }

    #[test]
    fn different_seed_different_weights() {
        let a = grid(&GridConfig {
            weighted: true,
            seed: 1,
            ..GridConfig::default()
        });
        let b = grid(&GridConfig {
            weighted: true,
            seed: 2,
            ..GridConfig::default()
        });
        assert_ne!(a, b);
    }

    #[test]
    fn weights_stay_in_range() {
        let graph = grid(&GridConfig {
            weighted: true,
            ..GridConfig::default()
        });
        for edge in graph.edges() {
            let w = edge.weight.unwrap();
            assert!((1.0..=9.0).contains(&w), "weight out of range: {}", w);
        }
    }

    #[test]
    fn remove_rate_thins_edges() {
        let full = grid(&GridConfig::default());
        let thinned = grid(&GridConfig {
            remove_rate: 0.2,
            ..GridConfig::default()
        });
        let expected = full.edge_count() - (full.edge_count() as f64 * 0.2) as usize;
        assert_eq!(thinned.edge_count(), expected);
    }

    #[test]
    fn ring_node_positions_on_circle() {
        let config = RingConfig::default();
        let graph = ring(&config);
        assert_eq!(graph.node_count(), 10);

        for node in graph.nodes() {
            let dx = node.x - config.center_x;
            let dy = node.y - config.center_y;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - config.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn ring_is_connected_around() {
        let config = RingConfig {
            cross_rate: 0.0,
            chord_rate: 0.0,
            weighted: false,
            ..RingConfig::default()
        };
        let graph = ring(&config);
        assert_eq!(graph.edge_count(), 10);
        for i in 0..10u32 {
            assert_eq!(graph.neighbors(NodeId(i)), vec![NodeId((i + 1) % 10)]);
        }
    }

    #[test]
    fn ring_cross_links_pair_once() {
        let config = RingConfig {
            cross_rate: 1.0,
            chord_rate: 0.0,
            weighted: false,
            ..RingConfig::default()
        };
        let graph = ring(&config);
        // 10 ring edges + 5 cross links
        assert_eq!(graph.edge_count(), 15);
        assert!(graph.neighbors(NodeId(0)).contains(&NodeId(5)));
        assert!(!graph.neighbors(NodeId(5)).contains(&NodeId(0)));
    }

    #[test]
    fn ring_deterministic() {
        let config = RingConfig::default();
        assert_eq!(ring(&config), ring(&config));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_seed_yields_a_well_formed_grid(seed in any::<u64>(), size in 2usize..7) {
                let config = GridConfig {
                    size,
                    weighted: true,
                    diagonal_rate: 0.3,
                    remove_rate: 0.1,
                    seed,
                    ..GridConfig::default()
                };
                let graph = grid(&config);

                prop_assert_eq!(graph.node_count(), size * size);
                prop_assert_eq!(grid(&config), graph.clone());
                for edge in graph.edges() {
                    prop_assert!(graph.contains(edge.from));
                    prop_assert!(graph.contains(edge.to));
                    let w = edge.weight.unwrap();
                    prop_assert!((1.0..=9.0).contains(&w));
                }
            }

            #[test]
            fn any_seed_yields_a_well_formed_ring(seed in any::<u64>(), count in 3usize..12) {
                let config = RingConfig {
                    count,
                    seed,
                    ..RingConfig::default()
                };
                let graph = ring(&config);

                prop_assert_eq!(graph.node_count(), count);
                prop_assert_eq!(ring(&config), graph.clone());
                for edge in graph.edges() {
                    prop_assert!(graph.contains(edge.from));
                    prop_assert!(graph.contains(edge.to));
                }
            }
        }
    }
}
