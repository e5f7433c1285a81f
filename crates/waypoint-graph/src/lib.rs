//! Waypoint Graph Model
//!
//! Passive data consumed by the algorithm engine and mutated (on its own
//! snapshot) by the playback engine:
//!
//! - **Nodes** carry an id, a layout position, a visual state, and an
//!   optional override color.
//! - **Edges** are directed with optional positive weights; undirected
//!   connectivity is two reciprocal edges.
//! - **Generation** builds seeded, reproducible demo graphs (grid and ring
//!   layouts) whose output satisfies the model invariants.
//!
//! The `serde` feature (off by default) derives `Serialize`/`Deserialize`
//! on every model type for the transport surface.

mod generate;
mod graph;

pub use generate::{grid, ring, GridConfig, RingConfig};
pub use graph::{Color, Edge, Graph, Node, NodeId, VisualState, DEFAULT_EDGE_WEIGHT};
