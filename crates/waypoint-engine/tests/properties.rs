//! Property tests over randomly generated small graphs.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use waypoint_engine::{astar, bfs, dfs, dijkstra, greedy_coloring, prim, Step, Trace};
use waypoint_graph::{Edge, Graph, Node, NodeId};

/// Small graphs: 2..8 nodes, up to 20 directed edges with optional integer
/// weights. Positions are spread out so the A* heuristic has something to
/// work with.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (2usize..8).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, proptest::option::of(1u32..=9)), 0..20).prop_map(
            move |raw| {
                let nodes = (0..n)
                    .map(|i| {
                        Node::new(
                            NodeId(i as u32),
                            (i % 3) as f64 * 50.0,
                            (i / 3) as f64 * 50.0,
                        )
                    })
                    .collect();
                let edges = raw
                    .into_iter()
                    .map(|(from, to, weight)| Edge {
                        from: NodeId(from as u32),
                        to: NodeId(to as u32),
                        weight: weight.map(f64::from),
                    })
                    .collect();
                Graph::new(nodes, edges)
            },
        )
    })
}

/// Graphs sparse enough that greedy coloring never needs a sixth color:
/// forcing color index k takes at least 1 + 2 + ... + k edges, so below 15
/// edges no index wraps the 5-entry palette and display colors are faithful
/// to logical indices.
fn arb_sparse_graph() -> impl Strategy<Value = Graph> {
    arb_graph().prop_map(|graph| {
        let edges = graph.edges().iter().take(14).cloned().collect();
        Graph::new(graph.nodes().to_vec(), edges)
    })
}

fn visited_nodes(trace: &Trace) -> Vec<NodeId> {
    trace
        .iter()
        .filter_map(|s| match s {
            Step::Visited { node } => Some(*node),
            _ => None,
        })
        .collect()
}

fn assert_path_valid(graph: &Graph, trace: &Trace, start: NodeId, end: NodeId) {
    if let Some(path) = trace.found_path() {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for pair in path.windows(2) {
            assert!(
                graph.neighbors(pair[0]).contains(&pair[1]),
                "no edge {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }
}

/// Exhaustive minimum simple-path weight, for cross-checking Dijkstra.
fn brute_force_shortest(graph: &Graph, from: NodeId, to: NodeId) -> Option<f64> {
    fn go(
        graph: &Graph,
        at: NodeId,
        to: NodeId,
        seen: &mut Vec<NodeId>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if at == to {
            *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
            return;
        }
        for next in graph.neighbors(at) {
            if !seen.contains(&next) {
                seen.push(next);
                go(graph, next, to, seen, cost + graph.edge_weight(at, next), best);
                seen.pop();
            }
        }
    }
    let mut best = None;
    go(graph, from, to, &mut vec![from], 0.0, &mut best);
    best
}

/// Nodes reachable from `root` treating edges as undirected, the way Prim
/// crosses them.
fn undirected_component(graph: &Graph, root: NodeId) -> HashSet<NodeId> {
    let mut component = HashSet::from([root]);
    let mut frontier = vec![root];
    while let Some(at) = frontier.pop() {
        for edge in graph.edges() {
            let other = if edge.from == at {
                edge.to
            } else if edge.to == at {
                edge.from
            } else {
                continue;
            };
            if component.insert(other) {
                frontier.push(other);
            }
        }
    }
    component
}

proptest! {
    #[test]
    fn traces_are_deterministic(graph in arb_graph()) {
        let start = NodeId(0);
        let end = NodeId(graph.node_count() as u32 - 1);
        prop_assert_eq!(bfs(&graph, start, end), bfs(&graph, start, end));
        prop_assert_eq!(dfs(&graph, start, end), dfs(&graph, start, end));
        prop_assert_eq!(dijkstra(&graph, start, end), dijkstra(&graph, start, end));
        prop_assert_eq!(astar(&graph, start, end), astar(&graph, start, end));
        prop_assert_eq!(prim(&graph, start), prim(&graph, start));
        prop_assert_eq!(greedy_coloring(&graph), greedy_coloring(&graph));
    }

    #[test]
    fn discovery_is_monotonic(graph in arb_graph()) {
        let start = NodeId(0);
        let end = NodeId(graph.node_count() as u32 - 1);
        for trace in [
            bfs(&graph, start, end),
            dfs(&graph, start, end),
            dijkstra(&graph, start, end),
            astar(&graph, start, end),
        ] {
            let visited = visited_nodes(&trace);
            let unique: HashSet<_> = visited.iter().collect();
            prop_assert_eq!(unique.len(), visited.len(), "a node was visited twice");
        }
    }

    #[test]
    fn paths_are_valid_routes(graph in arb_graph()) {
        let start = NodeId(0);
        let end = NodeId(graph.node_count() as u32 - 1);
        assert_path_valid(&graph, &bfs(&graph, start, end), start, end);
        assert_path_valid(&graph, &dfs(&graph, start, end), start, end);
        assert_path_valid(&graph, &dijkstra(&graph, start, end), start, end);
        assert_path_valid(&graph, &astar(&graph, start, end), start, end);
    }

    #[test]
    fn dijkstra_is_optimal(graph in arb_graph()) {
        let start = NodeId(0);
        let end = NodeId(graph.node_count() as u32 - 1);
        let trace = dijkstra(&graph, start, end);
        let best = brute_force_shortest(&graph, start, end);

        match (trace.found_path(), best) {
            (Some(path), Some(best)) => {
                let weight: f64 = path
                    .windows(2)
                    .map(|w| graph.edge_weight(w[0], w[1]))
                    .sum();
                prop_assert!((weight - best).abs() < 1e-9,
                    "dijkstra found {}, brute force found {}", weight, best);
            }
            (None, None) => {}
            (found, expected) => prop_assert!(
                false,
                "reachability mismatch: dijkstra {:?}, brute force {:?}",
                found.map(|p| p.len()),
                expected
            ),
        }
    }

    #[test]
    fn prim_spans_the_undirected_component(graph in arb_graph()) {
        let root = NodeId(0);
        let trace = prim(&graph, root);
        let last = trace.steps().last();
        prop_assert!(matches!(last, Some(Step::MstComplete { .. })), "missing MstComplete");
        let Some(Step::MstComplete { edges }) = last else {
            unreachable!()
        };

        // Each accepted edge attaches exactly one new node: acyclic by construction
        let mut tree = HashSet::from([root]);
        for edge in edges {
            prop_assert!(tree.contains(&edge.from) != tree.contains(&edge.to));
            tree.insert(edge.from);
            tree.insert(edge.to);
        }

        // And the tree covers exactly the undirected component of the root
        prop_assert_eq!(tree, undirected_component(&graph, root));
    }

    #[test]
    fn coloring_is_proper(graph in arb_sparse_graph()) {
        let trace = greedy_coloring(&graph);
        let colors: HashMap<_, _> = trace
            .iter()
            .filter_map(|s| match s {
                Step::NodeColor { node, color } => Some((*node, color.clone())),
                _ => None,
            })
            .collect();

        // Every node got exactly one color
        prop_assert_eq!(colors.len(), graph.node_count());

        for edge in graph.edges() {
            if edge.from != edge.to {
                prop_assert_ne!(&colors[&edge.from], &colors[&edge.to]);
            }
        }
    }
}
