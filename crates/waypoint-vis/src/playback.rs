//! Deterministic trace playback.
//!
//! A single state machine owns the live per-node visual snapshot, a cursor
//! into the bound trace, and the transport flags. Each tick applies exactly
//! one step and advances the cursor; the cursor, never the snapshot
//! contents, is the source of truth for what has been applied, so a trace
//! can be replayed any number of times and a reset always lands on the
//! exact initial snapshot.

use serde::{Deserialize, Serialize};

use waypoint_engine::{Step, Trace};
use waypoint_graph::{Graph, Node, NodeId, VisualState};

/// Lifecycle of the playback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No trace bound
    Idle,
    /// Trace bound, cursor at zero, not advancing
    Ready,
    /// Cursor advancing on timer ticks
    Running,
    /// Advancing suspended mid-trace
    Paused,
    /// Cursor reached the end of the trace
    Finished,
}

/// Smallest accepted speed.
pub const MIN_SPEED: u8 = 1;
/// Largest accepted speed.
pub const MAX_SPEED: u8 = 100;

const DEFAULT_SPEED: u8 = 50;

/// An edge accepted into the spanning tree during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Playback controller for one bound graph + trace.
pub struct Playback {
    nodes: Vec<Node>,
    accepted_edges: Vec<AcceptedEdge>,
    trace: Trace,
    cursor: usize,
    state: PlaybackState,
    speed: u8,
    start: NodeId,
    end: NodeId,
}

impl Playback {
    /// Create an idle playback with nothing bound.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            accepted_edges: Vec::new(),
            trace: Trace::default(),
            cursor: 0,
            state: PlaybackState::Idle,
            speed: DEFAULT_SPEED,
            start: NodeId(0),
            end: NodeId(0),
        }
    }

    /// Bind a graph and a trace, establishing the initial snapshot: every
    /// node default except the declared start/end roles.
    ///
    /// Binding over an existing run stops it and replaces it; the driver
    /// observes the new state at its next iteration, so no stale tick can
    /// touch the new snapshot.
    pub fn bind(&mut self, graph: &Graph, trace: Trace, start: NodeId, end: NodeId) {
        self.start = start;
        self.end = end;
        self.nodes = graph.nodes().to_vec();
        for node in &mut self.nodes {
            node.state = role_state(start, end, node.id);
            node.color = None;
        }
        self.accepted_edges.clear();
        self.cursor = 0;
        self.state = if trace.is_empty() {
            PlaybackState::Finished
        } else {
            PlaybackState::Ready
        };
        self.trace = trace;
    }

    /// Start advancing. Valid from `Ready` or `Paused` with steps left;
    /// a no-op otherwise.
    pub fn play(&mut self) {
        if matches!(self.state, PlaybackState::Ready | PlaybackState::Paused)
            && self.cursor < self.trace.len()
        {
            self.state = PlaybackState::Running;
        }
    }

    /// Suspend advancing. Valid from `Running`; a no-op otherwise.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
        }
    }

    /// Apply the step at the cursor and advance. Only mutates while
    /// `Running`; any other state is a no-op returning `false`. Reaching
    /// the end of the trace transitions to `Finished`.
    pub fn tick(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        self.advance()
    }

    /// Apply one step without timed playback. Valid from `Ready`, `Paused`,
    /// or `Running`.
    pub fn step_forward(&mut self) -> bool {
        match self.state {
            PlaybackState::Ready | PlaybackState::Paused | PlaybackState::Running => {
                self.advance()
            }
            _ => false,
        }
    }

    /// Restore the initial snapshot and stop playback. Valid from any state
    /// with a bound trace; a no-op while `Idle`.
    pub fn reset(&mut self) {
        if self.state == PlaybackState::Idle {
            return;
        }
        let (start, end) = (self.start, self.end);
        for node in &mut self.nodes {
            node.state = role_state(start, end, node.id);
            node.color = None;
        }
        self.accepted_edges.clear();
        self.cursor = 0;
        self.state = if self.trace.is_empty() {
            PlaybackState::Finished
        } else {
            PlaybackState::Ready
        };
    }

    /// Set the playback speed, clamped to `[MIN_SPEED, MAX_SPEED]`. Takes
    /// effect on the next scheduled tick.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// The live visual snapshot. Read-only for callers; only ticks mutate it.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Spanning-tree edges accepted so far.
    pub fn accepted_edges(&self) -> &[AcceptedEdge] {
        &self.accepted_edges
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// How many steps have been applied.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Progress as a fraction in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        if self.trace.is_empty() {
            0.0
        } else {
            self.cursor as f64 / self.trace.len() as f64
        }
    }

    fn advance(&mut self) -> bool {
        let Some(step) = self.trace.get(self.cursor).cloned() else {
            self.state = PlaybackState::Finished;
            return false;
        };
        self.apply(&step);
        self.cursor += 1;
        if self.cursor == self.trace.len() {
            self.state = PlaybackState::Finished;
        }
        true
    }

    fn apply(&mut self, step: &Step) {
        match step {
            Step::Visited { node } => self.mark(*node, VisualState::Visited),

            Step::Current { node } => {
                // The previous focus falls back to visited
                for n in &mut self.nodes {
                    if n.state == VisualState::Current {
                        n.state = VisualState::Visited;
                    }
                }
                self.mark(*node, VisualState::Current);
            }

            Step::Path { nodes } => {
                for id in nodes {
                    self.mark(*id, VisualState::Path);
                }
            }

            Step::NodeColor { node, color } => {
                if let Some(n) = self.node_mut(*node) {
                    n.color = Some(color.clone());
                }
            }

            Step::EdgeAccepted { from, to } => {
                self.accepted_edges.push(AcceptedEdge {
                    from: *from,
                    to: *to,
                });
            }

            // The full edge set was already accumulated edge by edge
            Step::MstComplete { .. } => {}

            Step::Reset => {
                let (start, end) = (self.start, self.end);
                for n in &mut self.nodes {
                    if n.id != start && n.id != end {
                        n.state = VisualState::Default;
                        n.color = None;
                    }
                }
                self.accepted_edges.clear();
            }
        }
    }

    /// Set a node's visual state unless it holds a start/end role.
    fn mark(&mut self, id: NodeId, state: VisualState) {
        if let Some(node) = self.node_mut(id) {
            if node.state != VisualState::Start && node.state != VisualState::End {
                node.state = state;
            }
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }
}

/// The initial snapshot state for a node: its declared role, or default.
/// When start and end coincide, start wins.
fn role_state(start: NodeId, end: NodeId, id: NodeId) -> VisualState {
    if id == start {
        VisualState::Start
    } else if id == end {
        VisualState::End
    } else {
        VisualState::Default
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

/// Playback status for sending to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub cursor: usize,
    pub total_steps: usize,
    pub speed: u8,
    pub progress: f64,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            state: playback.state(),
            cursor: playback.cursor(),
            total_steps: playback.total_steps(),
            speed: playback.speed(),
            progress: playback.progress(),
        }
    }
}

/// An owned copy of the visual state, for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub nodes: Vec<Node>,
    pub accepted_edges: Vec<AcceptedEdge>,
    pub cursor: usize,
}

impl From<&Playback> for PlaybackSnapshot {
    fn from(playback: &Playback) -> Self {
        Self {
            nodes: playback.nodes().to_vec(),
            accepted_edges: playback.accepted_edges().to_vec(),
            cursor: playback.cursor(),
        }
    }
}
