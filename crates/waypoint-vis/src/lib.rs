//! Waypoint Visualization
//!
//! Deterministic playback of algorithm traces with transport controls.
//!
//! # Architecture
//!
//! - **Playback**: state machine applying one trace step per tick to a live
//!   per-node visual snapshot
//! - **Scheduler**: single cooperative timer loop; tick period is a
//!   decreasing function of the speed setting
//! - **Server**: REST + WebSocket surface for the frontend's transport
//!   controls and read-only snapshot polling
//!
//! # Usage
//!
//! ```ignore
//! let graph = waypoint_graph::grid(&GridConfig::default());
//! let trace = Algorithm::Bfs.run(&graph, NodeId(0), NodeId(24));
//!
//! let server = VisServer::new();
//! server.playback().write().await.bind(&graph, trace, NodeId(0), NodeId(24));
//! server.serve(3000).await?;
//! ```

mod error;
mod playback;
mod scheduler;
mod server;

pub use error::{Error, Result};
pub use playback::{
    AcceptedEdge, Playback, PlaybackSnapshot, PlaybackState, PlaybackStatus, MAX_SPEED, MIN_SPEED,
};
pub use scheduler::{tick_interval, PlaybackDriver};
pub use server::VisServer;
