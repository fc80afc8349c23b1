//! The traversal template shared by every strategy.
//!
//! A node moves through three states: unvisited (absent from the
//! reached-from map), in the frontier, and expanded. It is recorded in the
//! map at the moment it is first discovered as a neighbour and never again,
//! so its cost is fixed at discovery too. The loop ends when the target is
//! discovered or the frontier runs dry.

use crate::frontier::Frontier;
use crate::reached::ReachedFrom;
use crate::traits::{Graph, NodeId};

/// Cost bookkeeping for one discovered node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Discovery {
    /// Value stored in the cost table, read back when the node is expanded.
    pub(crate) cost: f32,
    /// Frontier ordering key.
    pub(crate) priority: f32,
}

impl Discovery {
    pub(crate) const UNWEIGHTED: Self = Self {
        cost: 0.0,
        priority: 0.0,
    };
}

/// Raw result of one traversal.
pub(crate) struct Traversal {
    pub(crate) reached: ReachedFrom,
    pub(crate) costs: Vec<f32>,
    pub(crate) expansions: usize,
    pub(crate) found: bool,
}

/// Run the shared search loop.
///
/// `blocked` filters neighbours that may never be discovered. `discover`
/// computes cost and priority of a neighbour from the cost of the node being
/// expanded. Endpoints must already be validated.
pub(crate) fn traverse<G, F, B, D>(
    graph: &G,
    start: NodeId,
    end: NodeId,
    frontier: &mut F,
    blocked: B,
    mut discover: D,
) -> Traversal
where
    G: Graph + ?Sized,
    F: Frontier,
    B: Fn(NodeId) -> bool,
    D: FnMut(f32, NodeId, NodeId) -> Discovery,
{
    let n = graph.node_count();
    let mut reached = ReachedFrom::new(n);
    let mut costs = vec![0.0f32; n];
    let mut expansions = 0;

    reached.insert_root(start);
    if start == end {
        return Traversal {
            reached,
            costs,
            expansions,
            found: true,
        };
    }
    frontier.push(start, 0.0);

    let found = 'search: loop {
        let Some(current) = frontier.pop() else {
            break 'search false;
        };
        expansions += 1;
        let current_cost = costs[current.index()];

        for &next in graph.neighbors(current) {
            if !graph.contains(next) || reached.contains(next) || blocked(next) {
                continue;
            }
            let d = discover(current_cost, current, next);
            costs[next.index()] = d.cost;
            reached.insert(next, current);
            frontier.push(next, d.priority);
            if next == end {
                log::trace!("target {next} discovered from {current}");
                break 'search true;
            }
        }
    };

    Traversal {
        reached,
        costs,
        expansions,
        found,
    }
}
