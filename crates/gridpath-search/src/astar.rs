use std::time::Instant;

use crate::config::CostModel;
use crate::error::SearchError;
use crate::frontier::MinCostFrontier;
use crate::pathfinder::{Pathfinder, SearchOutcome};
use crate::strategy::Strategy;
use crate::traits::{HeuristicGraph, NodeId};
use crate::traverse::{Discovery, traverse};

impl Pathfinder {
    /// Heuristic-guided search from `start` to `end`.
    ///
    /// Like [`dijkstra`](Self::dijkstra), with the straight-line distance to
    /// `end` biasing expansion toward the target. Under
    /// [`CostModel::Multiplier`] the estimate is folded into the stored cost
    /// and therefore accumulates along the route; under
    /// [`CostModel::Resistance`] it only orders the frontier.
    pub fn astar<G: HeuristicGraph + ?Sized>(
        &self,
        graph: &G,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchOutcome, SearchError> {
        Self::check_endpoints(graph, start, end)?;
        let started = Instant::now();
        let model = self.config().cost_model;

        let mut frontier = MinCostFrontier::new();
        let traversal = traverse(
            graph,
            start,
            end,
            &mut frontier,
            |id| self.excludes(graph, id),
            |cost, from, to| {
                let g = model.step(graph, cost, from, to);
                let h = graph.estimate(to, end);
                match model {
                    CostModel::Multiplier => Discovery {
                        cost: g + h,
                        priority: g + h,
                    },
                    CostModel::Resistance => Discovery {
                        cost: g,
                        priority: g + h,
                    },
                }
            },
        );

        Ok(Self::finish(Strategy::AStar, traversal, end, started))
    }
}
