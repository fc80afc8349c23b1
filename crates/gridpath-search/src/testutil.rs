//! Grid fixtures shared by the unit tests.

use gridpath_core::Point;
use rand::{RngExt, SeedableRng};

pub(crate) use crate::distance::{chebyshev, manhattan};
use crate::grid::{Grid, GridConfig};
use crate::neighbors::Connectivity;
use crate::reached::Path;
use crate::traits::{Graph, NodeId};

pub(crate) fn uniform(width: i32, height: i32) -> Grid {
    Grid::uniform(width, height, Connectivity::Four).unwrap()
}

pub(crate) fn uniform8(width: i32, height: i32) -> Grid {
    Grid::uniform(width, height, Connectivity::Eight).unwrap()
}

pub(crate) fn grid_with(width: i32, height: i32, f: impl FnMut(Point) -> f32) -> Grid {
    GridConfig::new(width, height).build_with(f).unwrap()
}

fn random_with(width: i32, height: i32, connectivity: Connectivity, seed: u64) -> Grid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    GridConfig::new(width, height)
        .with_connectivity(connectivity)
        .build_with(|_| rng.random_range(0.05f32..1.0))
        .unwrap()
}

/// 4-connected grid with passability drawn from `[0.05, 1)`.
pub(crate) fn random_grid(width: i32, height: i32, seed: u64) -> Grid {
    random_with(width, height, Connectivity::Four, seed)
}

pub(crate) fn random_grid8(width: i32, height: i32, seed: u64) -> Grid {
    random_with(width, height, Connectivity::Eight, seed)
}

pub(crate) fn id(g: &Grid, x: i32, y: i32) -> NodeId {
    g.id(Point::new(x, y)).unwrap()
}

/// Path starts at `start`, ends at `end`, and every step follows an edge.
pub(crate) fn assert_valid_path<G: Graph + ?Sized>(g: &G, path: &Path, start: NodeId, end: NodeId) {
    assert_eq!(path.start(), Some(start));
    assert_eq!(path.end(), Some(end));
    for w in path.nodes().windows(2) {
        assert!(
            g.neighbors(w[0]).contains(&w[1]),
            "{} -> {} is not an edge",
            w[0],
            w[1]
        );
    }
}
