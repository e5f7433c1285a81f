//! Waypoint Visualization Server
//!
//! Run an algorithm over a demo graph and serve the playback frontend.

use std::env;

use waypoint_engine::Algorithm;
use waypoint_graph::{grid, ring, Edge, Graph, GridConfig, Node, NodeId, RingConfig};
use waypoint_vis::VisServer;

#[tokio::main]
async fn main() -> waypoint_vis::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let algorithm: Algorithm = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(Algorithm::Bfs);

    let port: u16 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let (graph, start, end) = demo_graph(algorithm);
    let trace = algorithm.run(&graph, start, end);

    println!("Waypoint Visualizer");
    println!("===================");
    println!();
    println!("Algorithm: {}", algorithm);
    println!("Graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());
    println!("Trace: {} steps", trace.len());
    println!();
    println!("Starting visualization server on http://localhost:{}", port);
    println!("Transport controls: POST /api/playback/{{play,pause,reset,speed,step}}");
    println!();

    let server = VisServer::new();
    server
        .playback()
        .write()
        .await
        .bind(&graph, trace, start, end);
    server.serve(port).await
}

/// The demo graph each algorithm is shown on, with its start/end ids.
fn demo_graph(algorithm: Algorithm) -> (Graph, NodeId, NodeId) {
    match algorithm {
        Algorithm::Bfs => {
            let graph = grid(&GridConfig {
                remove_rate: 0.2,
                ..GridConfig::default()
            });
            (graph, NodeId(0), NodeId(24))
        }
        Algorithm::AStar => {
            let graph = grid(&GridConfig {
                bidirectional: true,
                diagonal_rate: 0.3,
                ..GridConfig::default()
            });
            (graph, NodeId(0), NodeId(24))
        }
        Algorithm::Prim => {
            let graph = grid(&GridConfig {
                size: 4,
                spacing: 100.0,
                weighted: true,
                diagonal_rate: 0.5,
                ..GridConfig::default()
            });
            (graph, NodeId(0), NodeId(0))
        }
        Algorithm::Dijkstra => {
            let graph = ring(&RingConfig::default());
            (graph, NodeId(0), NodeId(5))
        }
        Algorithm::Coloring => {
            let graph = ring(&RingConfig {
                count: 12,
                weighted: false,
                cross_rate: 0.4,
                chord_rate: 0.25,
                ..RingConfig::default()
            });
            (graph, NodeId(0), NodeId(0))
        }
        Algorithm::Dfs => demo_tree(),
    }
}

/// A small fixed tree: three branches under the root, two levels deep.
fn demo_tree() -> (Graph, NodeId, NodeId) {
    let mut nodes = vec![Node::new(NodeId(0), 300.0, 100.0)];
    for i in 1..15u32 {
        let angle = (i as f64 / 14.0) * std::f64::consts::TAU;
        let level = (i / 5 + 1) as f64;
        nodes.push(Node::new(
            NodeId(i),
            300.0 + angle.cos() * 100.0 * level,
            100.0 + angle.sin() * 100.0 * level + 100.0 * level,
        ));
    }

    let pairs = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 4),
        (1, 5),
        (2, 6),
        (2, 7),
        (3, 8),
        (3, 9),
        (4, 10),
        (5, 11),
        (7, 12),
        (8, 13),
        (9, 14),
    ];
    let edges = pairs
        .into_iter()
        .map(|(a, b)| Edge::new(NodeId(a), NodeId(b)))
        .collect();

    (Graph::new(nodes, edges), NodeId(0), NodeId(12))
}
