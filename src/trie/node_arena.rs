//! Index-based arena for trie nodes.
//!
//! Nodes are appended to a single `Vec` and addressed by [`NodeId`], so
//! cross-links between nodes are plain indices. The arena only grows.
//! Used internally by [`Trie`](super::Trie).

use std::ops::{Index, IndexMut};

use super::node::{NodeId, TrieNode};
use super::symbol::TrieChar;

#[derive(Clone, Debug)]
pub(crate) struct NodeArena<C: TrieChar> {
    nodes: Vec<TrieNode<C>>,
}

impl<C: TrieChar> NodeArena<C> {
    /// Creates an arena holding only a root with `width` child slots.
    pub fn with_root(width: usize) -> Self {
        NodeArena {
            nodes: vec![TrieNode::root(width)],
        }
    }

    /// Creates an arena from already validated nodes; index 0 must be the root.
    pub fn from_nodes(nodes: Vec<TrieNode<C>>) -> Self {
        debug_assert!(nodes.first().is_some_and(|root| root.parent().is_none()));
        NodeArena { nodes }
    }

    /// Appends a node and returns its handle.
    pub fn alloc(&mut self, node: TrieNode<C>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TrieNode<C>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    /// Iterates mutably over all nodes in allocation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TrieNode<C>> + '_ {
        self.nodes.iter_mut()
    }
}

impl<C: TrieChar> Index<NodeId> for NodeArena<C> {
    type Output = TrieNode<C>;

    #[inline]
    fn index(&self, id: NodeId) -> &TrieNode<C> {
        &self.nodes[id.index()]
    }
}

impl<C: TrieChar> IndexMut<NodeId> for NodeArena<C> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode<C> {
        &mut self.nodes[id.index()]
    }
}
