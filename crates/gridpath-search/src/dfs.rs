use std::time::Instant;

use crate::error::SearchError;
use crate::frontier::LifoFrontier;
use crate::pathfinder::{Pathfinder, SearchOutcome};
use crate::strategy::Strategy;
use crate::traits::{Graph, NodeId};
use crate::traverse::{Discovery, traverse};

impl Pathfinder {
    /// Depth-first search from `start` to `end`.
    ///
    /// Returns the first route the stack order stumbles on, which is often
    /// far from the shortest.
    pub fn depth_first<G: Graph + ?Sized>(
        &self,
        graph: &G,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchOutcome, SearchError> {
        Self::check_endpoints(graph, start, end)?;
        let started = Instant::now();

        let mut frontier = LifoFrontier::new();
        let traversal = traverse(
            graph,
            start,
            end,
            &mut frontier,
            |id| self.excludes(graph, id),
            |_, _, _| Discovery::UNWEIGHTED,
        );

        Ok(Self::finish(Strategy::DepthFirst, traversal, end, started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SearchConfig, ZeroPassability};
    use crate::testutil::*;
    use gridpath_core::Point;

    #[test]
    fn follows_the_last_pushed_neighbour() {
        let g = uniform(3, 3);
        let path = g
            .find_path(Strategy::DepthFirst, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        // (0,0) pushes up then right; right pops first and so on.
        assert_eq!(
            g.positions(&path),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn can_wander_far_from_optimal() {
        let g = uniform(6, 6);
        let from = Point::new(0, 0);
        let to = Point::new(0, 5);
        let dfs = g.find_path(Strategy::DepthFirst, from, to).unwrap();
        let bfs = g.find_path(Strategy::BreadthFirst, from, to).unwrap();
        assert_eq!(bfs.edge_count(), 5);
        assert!(dfs.edge_count() > bfs.edge_count());
        assert_valid_path(&g, &dfs, id(&g, 0, 0), id(&g, 0, 5));
    }

    #[test]
    fn walls_only_block_under_the_exclude_policy() {
        let g = grid_with(3, 3, |p| if p.x == 1 { 0.0 } else { 1.0 });
        let (start, end) = (id(&g, 0, 0), id(&g, 2, 2));

        let strict = Pathfinder::with_strategy(Strategy::DepthFirst);
        let out = strict.depth_first(&g, start, end).unwrap();
        assert!(!out.found());
        assert_eq!(
            out.into_path().unwrap_err(),
            SearchError::TargetUnreached { discovered: 3 }
        );

        let lax = Pathfinder::new(
            SearchConfig::new(Strategy::DepthFirst)
                .with_zero_passability(ZeroPassability::Infinite),
        );
        let path = lax.depth_first(&g, start, end).unwrap().into_path().unwrap();
        // Straight through the wall along the bottom row, then up.
        assert_eq!(
            g.positions(&path),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }
}
