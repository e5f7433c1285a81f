//! Waypoint Algorithm Engine
//!
//! Six graph algorithms, each a pure function from a read-only graph
//! snapshot to a [`Trace`] of discrete visualization events:
//!
//! - **bfs** / **dfs**: unweighted traversal toward a target
//! - **dijkstra** / **astar**: weighted shortest path, with and without a
//!   Euclidean heuristic
//! - **prim**: minimum spanning tree from a root
//! - **greedy_coloring**: first-fit proper vertex coloring
//!
//! Traces are computed eagerly and fully before playback starts, are
//! deterministic for a given graph and endpoints, and are replayable
//! without recomputation. Degenerate input (missing start/end id, empty
//! node set) degrades to an empty trace; an unreachable target ends the
//! trace without a `Path` step. Neither is an error.

mod algorithm;
mod astar;
mod bfs;
mod coloring;
mod dfs;
mod dijkstra;
mod prim;
mod trace;

pub use algorithm::Algorithm;
pub use astar::astar;
pub use bfs::bfs;
pub use coloring::{color_for, greedy_coloring, PALETTE};
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use prim::prim;
pub use trace::{Step, Trace};
