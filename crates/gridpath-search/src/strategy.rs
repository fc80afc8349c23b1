use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;

/// The four interchangeable search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Unweighted, FIFO frontier. Fewest edges.
    #[default]
    BreadthFirst,
    /// Unweighted, LIFO frontier. No optimality guarantee.
    DepthFirst,
    /// Passability-weighted, minimum-cost frontier.
    Dijkstra,
    /// Dijkstra plus a straight-line distance term.
    AStar,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    /// Whether the strategy orders its frontier by cost.
    pub fn is_weighted(self) -> bool {
        matches!(self, Strategy::Dijkstra | Strategy::AStar)
    }

    /// Canonical short name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" | "depthfirst" => Ok(Strategy::DepthFirst),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
