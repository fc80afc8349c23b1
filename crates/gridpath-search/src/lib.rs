//! Path search over passability grids.
//!
//! This crate finds routes between two cells of a rectangular grid whose
//! cells carry a passability cost multiplier. Four interchangeable strategies
//! share one traversal loop:
//!
//! - **Breadth-first**: fewest edges, cost-blind ([`Pathfinder::breadth_first`])
//! - **Depth-first**: first route found, cost-blind ([`Pathfinder::depth_first`])
//! - **Dijkstra**: cheapest-first expansion ([`Pathfinder::dijkstra`])
//! - **A\***: Dijkstra biased by straight-line distance ([`Pathfinder::astar`])
//!
//! Every node is recorded in the [`ReachedFrom`] map when first discovered
//! and never revisited, and the search stops as soon as the target is
//! discovered. The weighted strategies therefore return a low-cost path, not
//! a provably optimal one.
//!
//! Per-search state lives in the call, never in the [`Grid`], so a grid can
//! be searched from several threads at once.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | breadth-first, depth-first |
//! | [`WeightedGraph`] : [`Graph`] | Dijkstra |
//! | [`HeuristicGraph`] : [`WeightedGraph`] | A* and [`search`] |
//!
//! # Example
//!
//! ```
//! use gridpath_core::Point;
//! use gridpath_search::{Connectivity, Grid, Strategy};
//!
//! let grid = Grid::uniform(3, 3, Connectivity::Four).unwrap();
//! let path = grid
//!     .find_path(Strategy::BreadthFirst, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.edge_count(), 4);
//! ```

mod astar;
mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod pathfinder;
mod reached;
mod strategy;
mod traits;
mod traverse;

#[cfg(test)]
mod testutil;

pub use config::{CostModel, SearchConfig, ZeroPassability};
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::{Endpoint, GridError, ParseStrategyError, SearchError};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, MinCostFrontier};
pub use grid::{Grid, GridConfig, Node};
pub use neighbors::Connectivity;
pub use pathfinder::{Pathfinder, SearchOutcome, search};
pub use reached::{Path, ReachedFrom};
pub use strategy::Strategy;
pub use traits::{Graph, HeuristicGraph, NodeId, WeightedGraph};
