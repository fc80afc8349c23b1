//! Predecessor bookkeeping and path reconstruction.

use crate::config::CostModel;
use crate::traits::{NodeId, WeightedGraph};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Link {
    Unreached,
    Root,
    From(NodeId),
}

/// Per-search predecessor relation, stored flat and indexed by [`NodeId`].
///
/// A node becomes a key exactly once and its predecessor never changes
/// afterwards.
#[derive(Clone, Debug)]
pub struct ReachedFrom {
    links: Vec<Link>,
    len: usize,
}

impl ReachedFrom {
    /// Empty map sized for a graph of `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            links: vec![Link::Unreached; node_count],
            len: 0,
        }
    }

    /// Record `id` as the search root. Returns `false` if it was already a key.
    pub fn insert_root(&mut self, id: NodeId) -> bool {
        self.set(id, Link::Root)
    }

    /// Record that `id` was reached from `from`. Returns `false`, leaving
    /// the map untouched, if `id` was already a key.
    pub fn insert(&mut self, id: NodeId, from: NodeId) -> bool {
        self.set(id, Link::From(from))
    }

    fn set(&mut self, id: NodeId, link: Link) -> bool {
        let Some(slot) = self.links.get_mut(id.index()) else {
            return false;
        };
        if *slot != Link::Unreached {
            return false;
        }
        *slot = link;
        self.len += 1;
        true
    }

    /// Whether `id` has been discovered.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.links.get(id.index()), Some(Link::Root | Link::From(_)))
    }

    /// Predecessor of `id`: `None` if undiscovered, `Some(None)` for the
    /// root, `Some(Some(p))` otherwise.
    pub fn predecessor(&self, id: NodeId) -> Option<Option<NodeId>> {
        match self.links.get(id.index())? {
            Link::Unreached => None,
            Link::Root => Some(None),
            Link::From(p) => Some(Some(*p)),
        }
    }

    /// Number of discovered nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every discovered node with its predecessor (`None` for the root), in
    /// node-id order. Intended for drawing exploration arrows.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<NodeId>)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(i, link)| match *link {
                Link::Unreached => None,
                Link::Root => Some((NodeId(i), None)),
                Link::From(p) => Some((NodeId(i), Some(p))),
            })
    }

    /// Walk predecessors from `target` back to the root and return the
    /// route root-first. `None` if `target` was never discovered.
    pub fn reconstruct(&self, target: NodeId) -> Option<Path> {
        let mut nodes = Vec::new();
        let mut cur = target;
        loop {
            // A chain longer than the key count can only be a cycle.
            if nodes.len() >= self.len {
                return None;
            }
            nodes.push(cur);
            match self.predecessor(cur)? {
                None => break,
                Some(prev) => cur = prev,
            }
        }
        nodes.reverse();
        Some(Path { nodes })
    }
}

/// Ordered route from start to end, both inclusive. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Nodes in travel order.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes (edge count + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of steps along the path.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Cumulative cost of walking the path under `model`, without any
    /// heuristic term.
    pub fn cost<G: WeightedGraph + ?Sized>(&self, graph: &G, model: CostModel) -> f32 {
        self.nodes
            .windows(2)
            .fold(0.0, |acc, w| model.step(graph, acc, w[0], w[1]))
    }
}

impl IntoIterator for Path {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(p: &Path) -> Vec<usize> {
        p.iter().map(NodeId::index).collect()
    }

    #[test]
    fn keys_are_fixed_on_first_insert() {
        let mut rf = ReachedFrom::new(4);
        assert!(rf.is_empty());
        assert!(rf.insert_root(NodeId(0)));
        assert!(rf.insert(NodeId(1), NodeId(0)));
        assert!(!rf.insert(NodeId(1), NodeId(2)));
        assert!(!rf.insert_root(NodeId(1)));
        assert_eq!(rf.predecessor(NodeId(1)), Some(Some(NodeId(0))));
        assert_eq!(rf.predecessor(NodeId(0)), Some(None));
        assert_eq!(rf.predecessor(NodeId(3)), None);
        assert_eq!(rf.len(), 2);
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        let mut rf = ReachedFrom::new(2);
        assert!(!rf.insert(NodeId(7), NodeId(0)));
        assert!(!rf.contains(NodeId(7)));
        assert_eq!(rf.predecessor(NodeId(7)), None);
        assert!(rf.is_empty());
    }

    #[test]
    fn reconstruct_walks_back_to_root() {
        let mut rf = ReachedFrom::new(5);
        rf.insert_root(NodeId(2));
        rf.insert(NodeId(4), NodeId(2));
        rf.insert(NodeId(0), NodeId(4));
        rf.insert(NodeId(1), NodeId(2));

        let path = rf.reconstruct(NodeId(0)).unwrap();
        assert_eq!(ids(&path), vec![2, 4, 0]);
        assert_eq!(path.edge_count(), 2);
        assert_eq!(path.start(), Some(NodeId(2)));
        assert_eq!(path.end(), Some(NodeId(0)));

        let root_only = rf.reconstruct(NodeId(2)).unwrap();
        assert_eq!(ids(&root_only), vec![2]);
    }

    #[test]
    fn reconstruct_unreached_target_is_none() {
        let mut rf = ReachedFrom::new(3);
        rf.insert_root(NodeId(0));
        assert!(rf.reconstruct(NodeId(2)).is_none());
        assert!(ReachedFrom::new(3).reconstruct(NodeId(0)).is_none());
    }

    #[test]
    fn reconstruct_refuses_rootless_cycles() {
        let mut rf = ReachedFrom::new(3);
        rf.insert(NodeId(0), NodeId(1));
        rf.insert(NodeId(1), NodeId(0));
        assert!(rf.reconstruct(NodeId(0)).is_none());
    }

    #[test]
    fn iter_exports_every_key() {
        let mut rf = ReachedFrom::new(4);
        rf.insert_root(NodeId(3));
        rf.insert(NodeId(1), NodeId(3));
        let pairs: Vec<_> = rf.iter().collect();
        assert_eq!(pairs, vec![(NodeId(1), Some(NodeId(3))), (NodeId(3), None)]);
        assert_eq!(pairs.len(), rf.len());
    }
}
