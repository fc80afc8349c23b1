use std::time::Instant;

use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::pathfinder::{Pathfinder, SearchOutcome};
use crate::strategy::Strategy;
use crate::traits::{Graph, NodeId};
use crate::traverse::{Discovery, traverse};

impl Pathfinder {
    /// Breadth-first search from `start` to `end`.
    ///
    /// Each step counts as one edge regardless of passability, so the path
    /// has the fewest possible edges but ignores terrain cost.
    pub fn breadth_first<G: Graph + ?Sized>(
        &self,
        graph: &G,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchOutcome, SearchError> {
        Self::check_endpoints(graph, start, end)?;
        let started = Instant::now();

        let mut frontier = FifoFrontier::new();
        let traversal = traverse(
            graph,
            start,
            end,
            &mut frontier,
            |id| self.excludes(graph, id),
            |_, _, _| Discovery::UNWEIGHTED,
        );

        Ok(Self::finish(Strategy::BreadthFirst, traversal, end, started))
    }
}
