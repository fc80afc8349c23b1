//! Shared driver for the terminal demo: builds a random terrain grid, picks
//! endpoints and renders a search outcome as ASCII.

use gridpath_core::Point;
use gridpath_search::{Connectivity, Grid, GridConfig, GridError, NodeId, SearchOutcome};
use rand::{Rng, RngExt, SeedableRng};

pub const WIDTH: i32 = 48;
pub const HEIGHT: i32 = 20;
/// Share of cells that come out as walls.
const WALL_CHANCE: f64 = 0.12;

const CH_WALL: char = '#';
const CH_PATH: char = '*';
const CH_SEEN: char = '+';
const CH_OPEN: char = '.';
const CH_START: char = 'S';
const CH_END: char = 'E';

/// A grid plus the two cells to connect.
pub struct Scenario {
    pub grid: Grid,
    pub start: NodeId,
    pub end: NodeId,
}

impl Scenario {
    /// Random terrain with scattered walls and random, non-wall endpoints.
    pub fn random(connectivity: Connectivity, seed: u64) -> Result<Self, GridError> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let grid = GridConfig::new(WIDTH, HEIGHT)
            .with_connectivity(connectivity)
            .build_with(|_| {
                if rng.random_bool(WALL_CHANCE) {
                    0.0
                } else {
                    1.0 - rng.random_range(0.0f32..0.95)
                }
            })?;
        let start = open_node(&grid, &mut rng);
        let end = open_node(&grid, &mut rng);
        Ok(Self { grid, start, end })
    }
}

/// Random passable node. Falls back to any node when every cell is a wall.
fn open_node(grid: &Grid, rng: &mut impl Rng) -> NodeId {
    let open: Vec<NodeId> = grid
        .nodes()
        .filter(|(_, n)| n.passability() > 0.0)
        .map(|(id, _)| id)
        .collect();
    if open.is_empty() {
        return grid.random_node(rng);
    }
    open[rng.random_range(0..open.len())]
}

/// Draw the grid with the explored area and the route, top row first.
pub fn render(scenario: &Scenario, outcome: &SearchOutcome) -> String {
    let grid = &scenario.grid;
    let reached = outcome.reached_from();
    let path = outcome.path();

    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let Some(id) = grid.id(Point::new(x, y)) else {
                continue;
            };
            let ch = if id == scenario.start {
                CH_START
            } else if id == scenario.end {
                CH_END
            } else if path.is_some_and(|p| p.contains(id)) {
                CH_PATH
            } else if reached.contains(id) {
                CH_SEEN
            } else if grid.node(id).is_some_and(|n| n.passability() == 0.0) {
                CH_WALL
            } else {
                CH_OPEN
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
