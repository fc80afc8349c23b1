use std::time::Instant;

use crate::error::SearchError;
use crate::frontier::MinCostFrontier;
use crate::pathfinder::{Pathfinder, SearchOutcome};
use crate::strategy::Strategy;
use crate::traits::{NodeId, WeightedGraph};
use crate::traverse::{Discovery, traverse};

impl Pathfinder {
    /// Passability-weighted search from `start` to `end`.
    ///
    /// Expands the cheapest known node first. A node's cost is computed once,
    /// when it is first discovered, and is not lowered if a cheaper route
    /// turns up later, so the result is a low-cost path rather than a
    /// guaranteed optimum.
    pub fn dijkstra<G: WeightedGraph + ?Sized>(
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
                let cost = model.step(graph, cost, from, to);
                Discovery {
                    cost,
                    priority: cost,
                }
            },
        );

        Ok(Self::finish(Strategy::Dijkstra, traversal, end, started))
    }
}
