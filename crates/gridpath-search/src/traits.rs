use std::fmt;

/// Dense arena index identifying one node of a graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// Wrap a raw arena index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Minimal search interface: node enumeration and ordered adjacency.
pub trait Graph {
    /// Number of nodes. Valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Ordered neighbours of `id`. The order decides breadth-first and
    /// depth-first tie-breaking.
    fn neighbors(&self, id: NodeId) -> &[NodeId];

    /// Whether `id` names a node of this graph.
    #[inline]
    fn contains(&self, id: NodeId) -> bool {
        id.index() < self.node_count()
    }

    /// Whether `id` may be entered at all. Graphs with a notion of
    /// impassable nodes (zero passability) report them here.
    #[inline]
    fn is_passable(&self, _id: NodeId) -> bool {
        true
    }
}

/// Graph whose nodes carry a passability cost multiplier.
pub trait WeightedGraph: Graph {
    /// Cost multiplier of entering `id`, in `(0, 1]`. Zero means impassable.
    fn passability(&self, id: NodeId) -> f32;

    /// Geometric length of the step between adjacent `from` and `to`.
    #[inline]
    fn step_length(&self, _from: NodeId, _to: NodeId) -> f32 {
        1.0
    }
}

/// Weighted graph with a straight-line heuristic, as needed by A*.
pub trait HeuristicGraph: WeightedGraph {
    /// Straight-line distance estimate from `from` to `to`.
    /// Must never overestimate the true remaining cost.
    fn estimate(&self, from: NodeId, to: NodeId) -> f32;
}
