//! Passive graph data: nodes with positions and visual state, directed
//! weighted edges, and the two lookup helpers every algorithm shares.
//!
//! The model carries no behavior beyond lookups. Algorithms treat a graph as
//! a read-only snapshot; only the playback engine mutates visual state, and
//! it does so on its own copy of the nodes.

use std::borrow::Cow;

/// A unique node identifier within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual state of a node as the playback engine animates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VisualState {
    /// Not yet touched by the algorithm
    #[default]
    Default,
    /// Discovered and placed in the frontier or tree
    Visited,
    /// The algorithm's current focus
    Current,
    /// Part of the final reconstructed route
    Path,
    /// The declared start node; never changes during playback
    Start,
    /// The declared end node; never changes during playback
    End,
}

/// A display color as a CSS hex string.
///
/// Backed by `Cow` so palette entries can live in a `const` table while
/// deserialized values own their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Wrap a static hex string, usable in `const` context.
    pub const fn from_static(hex: &'static str) -> Self {
        Self(Cow::Borrowed(hex))
    }

    /// Wrap an owned hex string.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(Cow::Owned(hex.into()))
    }

    /// The hex string, e.g. `"#4ade80"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node: identity, layout position, and the mutable visual fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    /// Mutated only by the playback engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: VisualState,
    /// Override color assigned during coloring playback.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Color>,
}

impl Node {
    /// Create a node in the default visual state.
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            state: VisualState::Default,
            color: None,
        }
    }

    /// Straight-line distance to another node's position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Weight used when an edge carries none.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// A directed edge with an optional positive weight.
///
/// Undirected connectivity is modeled by inserting both `(a, b)` and
/// `(b, a)`. Parallel edges between the same ordered pair are permitted and
/// independent; self-loops are permitted and harmless.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
}

impl Edge {
    /// Create an unweighted edge.
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }

    /// The edge weight, defaulting to [`DEFAULT_EDGE_WEIGHT`] when absent.
    pub fn weight_or_default(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

/// A graph: node list plus directed edge list, in insertion order.
///
/// Insertion order is load-bearing: algorithms explore neighbors in
/// edge-list order and color nodes in node-list order, so two graphs with
/// the same sets but different ordering produce different traces.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from its parts.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Every edge target reachable from `id` along an outgoing edge, in
    /// edge-list order. Direction matters: callers needing undirected
    /// adjacency must insert reciprocal edges themselves.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|e| e.from == id)
            .map(|e| e.to)
            .collect()
    }

    /// Weight of the **first** edge `(from, to)` in edge-list order, or
    /// [`DEFAULT_EDGE_WEIGHT`] when no such edge exists or it is unweighted.
    /// With parallel edges, first match wins.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> f64 {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map(Edge::weight_or_default)
            .unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}
