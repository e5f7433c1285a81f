//! Error types for waypoint-vis.
//!
//! The engine's degraded-output policy means algorithm runs never fail, and
//! playback misuse is a documented no-op, so typed errors only arise at the
//! transport boundary.

use thiserror::Error;

/// Result type for waypoint-vis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving the visualization.
#[derive(Debug, Error)]
pub enum Error {
    /// The server transport failed to bind or serve.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
