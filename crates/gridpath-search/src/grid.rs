//! The passability grid: a dense arena of lattice nodes with fixed,
//! ordered adjacency.

use gridpath_core::{Point, Range};
use rand::{Rng, RngExt};

use crate::distance::euclidean;
use crate::error::{Endpoint, GridError, SearchError};
use crate::neighbors::Connectivity;
use crate::pathfinder::{Pathfinder, SearchOutcome};
use crate::reached::Path;
use crate::strategy::Strategy;
use crate::traits::{Graph, HeuristicGraph, NodeId, WeightedGraph};

/// One grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    position: Point,
    passability: f32,
    neighbors: Vec<NodeId>,
}

impl Node {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn passability(&self) -> f32 {
        self.passability
    }

    /// Adjacent nodes in attachment order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Shape of a grid to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connectivity: Connectivity,
}

impl GridConfig {
    /// 4-connected grid of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            connectivity: Connectivity::Four,
        }
    }

    /// Square grid, `size` cells on a side.
    pub fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Build with every cell at passability 1.
    pub fn build(self) -> Result<Grid, GridError> {
        self.build_with(|_| 1.0)
    }

    /// Build, asking `passability` for the value of each cell. Cells are
    /// visited in row-major order starting at the origin.
    pub fn build_with(self, mut passability: impl FnMut(Point) -> f32) -> Result<Grid, GridError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GridError::Empty {
                width: self.width,
                height: self.height,
            });
        }
        let bounds = Range::with_size(self.width, self.height);

        let mut nodes = Vec::with_capacity(bounds.len());
        for p in bounds {
            let value = passability(p);
            if !(0.0..=1.0).contains(&value) {
                return Err(GridError::InvalidPassability { pos: p, value });
            }
            nodes.push(Node {
                position: p,
                passability: value,
                neighbors: Vec::with_capacity(self.connectivity.offsets().len()),
            });
        }

        for node in nodes.iter_mut() {
            node.neighbors.extend(
                self.connectivity
                    .around(node.position, |n| bounds.contains(n))
                    .filter_map(|n| bounds.index_of(n))
                    .map(NodeId),
            );
        }

        log::debug!(
            "built {}x{} grid, {:?}-connected",
            self.width,
            self.height,
            self.connectivity
        );
        Ok(Grid {
            bounds,
            connectivity: self.connectivity,
            nodes,
        })
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Rectangular lattice of [`Node`]s, immutable once built.
///
/// Node ids are row-major offsets from the origin, so the id of `(x, y)` is
/// `y * width + x`. Adjacency is symmetric by construction.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Range,
    connectivity: Connectivity,
    nodes: Vec<Node>,
}

impl Grid {
    /// Uniform-passability grid.
    pub fn uniform(width: i32, height: i32, connectivity: Connectivity) -> Result<Self, GridError> {
        GridConfig::new(width, height)
            .with_connectivity(connectivity)
            .build()
    }

    /// Cells covered by the grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Id of the node at `p`, or `None` if `p` is off the grid.
    pub fn id(&self, p: Point) -> Option<NodeId> {
        self.bounds.index_of(p).map(NodeId)
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(Node::position)
    }

    /// Pick a node uniformly at random.
    pub fn random_node(&self, rng: &mut impl Rng) -> NodeId {
        NodeId(rng.random_range(0..self.nodes.len()))
    }

    /// Lattice positions along `path`.
    pub fn positions(&self, path: &Path) -> Vec<Point> {
        path.iter().filter_map(|id| self.position(id)).collect()
    }

    /// Search between two cells with default settings for `strategy`.
    pub fn find_path(&self, strategy: Strategy, from: Point, to: Point) -> Result<Path, SearchError> {
        self.find_path_with(&Pathfinder::with_strategy(strategy), from, to)?
            .into_path()
    }

    /// Search between two cells with a configured [`Pathfinder`].
    pub fn find_path_with(
        &self,
        pathfinder: &Pathfinder,
        from: Point,
        to: Point,
    ) -> Result<SearchOutcome, SearchError> {
        let start = self.endpoint(Endpoint::Start, from)?;
        let end = self.endpoint(Endpoint::End, to)?;
        pathfinder.run(self, start, end)
    }

    fn endpoint(&self, which: Endpoint, p: Point) -> Result<NodeId, SearchError> {
        self.id(p).ok_or_else(|| {
            log::warn!("{which} {p} is outside grid {:?}", self.bounds);
            SearchError::InvalidEndpoint { which }
        })
    }
}

impl Graph for Grid {
    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn neighbors(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.neighbors,
            None => &[],
        }
    }

    #[inline]
    fn is_passable(&self, id: NodeId) -> bool {
        self.passability(id) > 0.0
    }
}

impl WeightedGraph for Grid {
    #[inline]
    fn passability(&self, id: NodeId) -> f32 {
        self.node(id).map_or(0.0, Node::passability)
    }

    fn step_length(&self, from: NodeId, to: NodeId) -> f32 {
        self.estimate(from, to)
    }
}

impl HeuristicGraph for Grid {
    fn estimate(&self, from: NodeId, to: NodeId) -> f32 {
        match (self.position(from), self.position(to)) {
            (Some(a), Some(b)) => euclidean(a, b),
            _ => 0.0,
        }
    }
}
