//! Algorithm selection and the uniform run entry point.

use serde::{Deserialize, Serialize};
use waypoint_graph::{Graph, NodeId};

use crate::{astar, bfs, coloring, dfs, dijkstra, prim, Trace};

/// The six supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    #[serde(rename = "astar")]
    AStar,
    Prim,
    Coloring,
}

impl Algorithm {
    /// Run the selected algorithm.
    ///
    /// `start` and `end` are interpreted per algorithm: the traversal and
    /// shortest-path variants search from `start` toward `end`, Prim grows
    /// its tree from `start`, and coloring ignores both.
    pub fn run(&self, graph: &Graph, start: NodeId, end: NodeId) -> Trace {
        match self {
            Algorithm::Bfs => bfs::bfs(graph, start, end),
            Algorithm::Dfs => dfs::dfs(graph, start, end),
            Algorithm::Dijkstra => dijkstra::dijkstra(graph, start, end),
            Algorithm::AStar => astar::astar(graph, start, end),
            Algorithm::Prim => prim::prim(graph, start),
            Algorithm::Coloring => coloring::greedy_coloring(graph),
        }
    }

    /// The wire/CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Prim => "prim",
            Algorithm::Coloring => "coloring",
        }
    }

    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Prim,
        Algorithm::Coloring,
    ];
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::AStar),
            "prim" => Ok(Algorithm::Prim),
            "coloring" => Ok(Algorithm::Coloring),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}
