use std::time::Instant;

use crate::config::{SearchConfig, ZeroPassability};
use crate::error::{Endpoint, SearchError};
use crate::reached::{Path, ReachedFrom};
use crate::strategy::Strategy;
use crate::traits::{Graph, HeuristicGraph, NodeId};
use crate::traverse::Traversal;

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Everything one search produced: the exploration record, the route (if the
/// target was reached) and a little accounting.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    strategy: Strategy,
    reached: ReachedFrom,
    costs: Vec<f32>,
    path: Option<Path>,
    expansions: usize,
}

impl SearchOutcome {
    /// Strategy that produced this outcome.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Predecessor of every discovered node.
    pub fn reached_from(&self) -> &ReachedFrom {
        &self.reached
    }

    /// The route, or `None` if the target was never discovered.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Whether the target was reached.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of nodes popped from the frontier and expanded.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of distinct nodes discovered.
    pub fn discovered(&self) -> usize {
        self.reached.len()
    }

    /// Cost recorded for `id` at discovery. Always `0.0` for the unweighted
    /// strategies; `None` if `id` was not discovered.
    pub fn cost_at(&self, id: NodeId) -> Option<f32> {
        if !self.reached.contains(id) {
            return None;
        }
        self.costs.get(id.index()).copied()
    }

    /// Take the route, turning an unreached target into an error.
    pub fn into_path(self) -> Result<Path, SearchError> {
        let discovered = self.reached.len();
        self.path
            .ok_or(SearchError::TargetUnreached { discovered })
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Runs searches according to a [`SearchConfig`].
///
/// A `Pathfinder` holds no per-search state: every call allocates its own
/// reached-from map, cost table and frontier, so one instance (and one
/// graph) may serve any number of threads at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Pathfinder with default settings for `strategy`.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(SearchConfig::new(strategy))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `start` to `end` with the configured strategy.
    pub fn run<G: HeuristicGraph + ?Sized>(
        &self,
        graph: &G,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchOutcome, SearchError> {
        match self.config.strategy {
            Strategy::BreadthFirst => self.breadth_first(graph, start, end),
            Strategy::DepthFirst => self.depth_first(graph, start, end),
            Strategy::Dijkstra => self.dijkstra(graph, start, end),
            Strategy::AStar => self.astar(graph, start, end),
        }
    }

    /// Neighbour filter implied by the zero-passability policy.
    pub(crate) fn excludes<G: Graph + ?Sized>(&self, graph: &G, id: NodeId) -> bool {
        self.config.zero_passability == ZeroPassability::Exclude && !graph.is_passable(id)
    }

    pub(crate) fn check_endpoints<G: Graph + ?Sized>(
        graph: &G,
        start: NodeId,
        end: NodeId,
    ) -> Result<(), SearchError> {
        for (which, id) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !graph.contains(id) {
                log::warn!(
                    "{which} node {id} rejected: graph has {} nodes",
                    graph.node_count()
                );
                return Err(SearchError::InvalidEndpoint { which });
            }
        }
        Ok(())
    }

    pub(crate) fn finish(
        strategy: Strategy,
        traversal: Traversal,
        end: NodeId,
        started: Instant,
    ) -> SearchOutcome {
        let Traversal {
            reached,
            costs,
            expansions,
            found,
        } = traversal;
        let path = if found { reached.reconstruct(end) } else { None };
        log::debug!(
            "{strategy} search {} in {:?}: {} expansions, {} discovered, path length {}",
            if path.is_some() { "succeeded" } else { "exhausted" },
            started.elapsed(),
            expansions,
            reached.len(),
            path.as_ref().map_or(0, Path::len),
        );
        SearchOutcome {
            strategy,
            reached,
            costs,
            path,
            expansions,
        }
    }
}

/// Search `graph` from `start` to `end` with `strategy` and default settings.
pub fn search<G: HeuristicGraph + ?Sized>(
    strategy: Strategy,
    graph: &G,
    start: NodeId,
    end: NodeId,
) -> Result<Path, SearchError> {
    Pathfinder::with_strategy(strategy)
        .run(graph, start, end)?
        .into_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostModel;
    use crate::testutil::*;
    use gridpath_core::Point;
    use rand::SeedableRng;

    fn all_configs() -> Vec<SearchConfig> {
        let mut out = Vec::new();
        for strategy in Strategy::ALL {
            for model in [CostModel::Multiplier, CostModel::Resistance] {
                out.push(SearchConfig::new(strategy).with_cost_model(model));
            }
        }
        out
    }

    #[test]
    fn every_strategy_returns_a_connected_route() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for (seed, g) in [random_grid(10, 8, 1), random_grid8(9, 9, 2)].into_iter().enumerate() {
            for _ in 0..20 {
                let start = g.random_node(&mut rng);
                let end = g.random_node(&mut rng);
                for cfg in all_configs() {
                    let out = Pathfinder::new(cfg).run(&g, start, end).unwrap();
                    assert_eq!(out.strategy(), cfg.strategy);
                    let path = out.path().unwrap_or_else(|| panic!("grid {seed}: {cfg:?}"));
                    assert_valid_path(&g, path, start, end);
                }
            }
        }
    }

    #[test]
    fn same_start_and_end_is_a_single_node() {
        let g = random_grid(4, 4, 5);
        let here = id(&g, 2, 1);
        for cfg in all_configs() {
            let out = Pathfinder::new(cfg).run(&g, here, here).unwrap();
            assert_eq!(out.expansions(), 0);
            assert_eq!(out.discovered(), 1);
            assert_eq!(out.path().unwrap().nodes(), &[here]);
        }
    }

    #[test]
    fn walled_off_target_is_unreached_for_every_strategy() {
        // Row y = 2 is solid wall.
        let g = grid_with(5, 5, |p| if p.y == 2 { 0.0 } else { 1.0 });
        for strategy in Strategy::ALL {
            let err = search(strategy, &g, id(&g, 0, 0), id(&g, 4, 4)).unwrap_err();
            assert_eq!(err, SearchError::TargetUnreached { discovered: 10 });
        }
    }

    #[test]
    fn walled_target_itself_is_unreached() {
        let g = grid_with(3, 3, |p| if p == Point::new(2, 2) { 0.0 } else { 1.0 });
        let out = Pathfinder::with_strategy(Strategy::AStar)
            .run(&g, id(&g, 0, 0), id(&g, 2, 2))
            .unwrap();
        assert!(!out.found());
        assert_eq!(out.discovered(), 8);
        assert_eq!(out.cost_at(id(&g, 2, 2)), None);
    }

    #[test]
    fn invalid_ids_fail_before_traversal() {
        let g = uniform(3, 3);
        assert_eq!(
            search(Strategy::Dijkstra, &g, NodeId(9), NodeId(0)),
            Err(SearchError::InvalidEndpoint {
                which: Endpoint::Start
            })
        );
        assert_eq!(
            search(Strategy::DepthFirst, &g, NodeId(0), NodeId(42)),
            Err(SearchError::InvalidEndpoint {
                which: Endpoint::End
            })
        );
    }

    #[test]
    fn breadth_first_is_never_longer_than_depth_first() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        for g in [uniform(9, 7), uniform8(8, 8), uniform(1, 12)] {
            for _ in 0..30 {
                let start = g.random_node(&mut rng);
                let end = g.random_node(&mut rng);
                let bfs = search(Strategy::BreadthFirst, &g, start, end).unwrap();
                let dfs = search(Strategy::DepthFirst, &g, start, end).unwrap();
                assert!(bfs.edge_count() <= dfs.edge_count());
            }
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let g = random_grid8(16, 12, 21);
        let (start, end) = (id(&g, 1, 10), id(&g, 14, 2));
        for cfg in all_configs() {
            let pf = Pathfinder::new(cfg);
            let first = pf.run(&g, start, end).unwrap();
            let second = pf.run(&g, start, end).unwrap();
            assert_eq!(first.path(), second.path());
            assert_eq!(first.expansions(), second.expansions());
        }
    }

    #[test]
    fn concurrent_searches_share_one_grid() {
        let g = random_grid(24, 24, 8);
        let (start, end) = (id(&g, 0, 0), id(&g, 23, 23));
        let expected: Vec<_> = Strategy::ALL
            .iter()
            .map(|&s| search(s, &g, start, end).unwrap())
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = Strategy::ALL
                .iter()
                .map(|&s| {
                    let g = &g;
                    scope.spawn(move || search(s, g, start, end).unwrap())
                })
                .collect();
            for (h, want) in handles.into_iter().zip(&expected) {
                assert_eq!(&h.join().unwrap(), want);
            }
        });
    }

    #[test]
    fn outcome_reports_costs_only_for_discovered_nodes() {
        let g = uniform(4, 1);
        let out = Pathfinder::with_strategy(Strategy::Dijkstra)
            .run(&g, id(&g, 0, 0), id(&g, 2, 0))
            .unwrap();
        assert_eq!(out.cost_at(id(&g, 0, 0)), Some(0.0));
        assert_eq!(out.cost_at(id(&g, 2, 0)), Some(2.0));
        assert_eq!(out.cost_at(id(&g, 3, 0)), None);
        assert_eq!(out.into_path().unwrap().len(), 3);
    }
}
