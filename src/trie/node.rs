use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::symbol::TrieChar;

/// Stable handle of a node inside a trie's arena.
///
/// Handles are only meaningful for the trie that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NodeId(u32);

impl NodeId {
    /// The root is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        NodeId(u32::try_from(index).expect("trie node count exceeds u32::MAX"))
    }

    /// Position of this node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True for [`NodeId::ROOT`].
    #[inline]
    pub fn is_root(self) -> bool {
        self == NodeId::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex of the trie.
///
/// Children are owned through the arena; `parent`, `failure` and `output` are
/// plain handles that never own anything, which lets the root's failure link
/// point back at the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode<C: TrieChar> {
    children: Box<[Option<NodeId>]>,
    terminal: bool,
    symbol: Option<C>,
    parent: Option<NodeId>,
    depth: u32,
    pub(crate) failure: Option<NodeId>,
    pub(crate) output: Option<NodeId>,
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates the root node with `width` empty child slots.
    pub(crate) fn root(width: usize) -> Self {
        TrieNode {
            children: vec![None; width].into_boxed_slice(),
            terminal: false,
            symbol: None,
            parent: None,
            depth: 0,
            failure: None,
            output: None,
        }
    }

    /// Creates a non-terminal node reached from `parent` through `symbol`.
    pub(crate) fn child_of(parent: NodeId, parent_depth: usize, symbol: C, width: usize) -> Self {
        TrieNode {
            children: vec![None; width].into_boxed_slice(),
            terminal: false,
            symbol: Some(symbol),
            parent: Some(parent),
            depth: parent_depth as u32 + 1,
            failure: None,
            output: None,
        }
    }

    /// Rebuilds a node from its exported parts.
    pub(crate) fn from_parts(
        children: Box<[Option<NodeId>]>,
        terminal: bool,
        symbol: Option<C>,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Self {
        TrieNode {
            children,
            terminal,
            symbol,
            parent,
            depth: depth as u32,
            failure: None,
            output: None,
        }
    }

    /// Returns the child in slot `offset`, or None if the slot is empty or out of range.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<NodeId> {
        self.children.get(offset).copied().flatten()
    }

    #[inline]
    pub(crate) fn set_child(&mut self, offset: usize, child: NodeId) {
        debug_assert!(self.children[offset].is_none());
        self.children[offset] = Some(child);
    }

    /// True if an inserted sequence ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline]
    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    /// The symbol on the edge into this node; `None` for the root.
    #[inline]
    pub fn symbol(&self) -> Option<C> {
        self.symbol
    }

    /// The node owning this one; `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Length of the sequence spelled by the path from the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    /// Failure link, set by [`build_automaton`](super::Trie::build_automaton).
    ///
    /// The root's failure link is the root itself.
    #[inline]
    pub fn failure(&self) -> Option<NodeId> {
        self.failure
    }

    /// Nearest terminal node along the failure chain, excluding this node.
    #[inline]
    pub fn output(&self) -> Option<NodeId> {
        self.output
    }

    /// Number of child slots, which equals the alphabet size.
    #[inline]
    pub fn width(&self) -> usize {
        self.children.len()
    }

    /// Returns an iterator over the occupied child slots in increasing offset order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            slots: &self.children,
            index: 0,
        }
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no child slot is occupied.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// An iterator over the `(offset, child)` pairs of a [`TrieNode`].
#[derive(Clone)]
pub struct ChildIter<'n> {
    slots: &'n [Option<NodeId>],
    index: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (usize, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            let offset = self.index;
            self.index += 1;
            if let Some(child) = *slot {
                return Some((offset, child));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len().saturating_sub(self.index)))
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.slots.len() > self.index {
            let last = self.slots.len() - 1;
            let slot = self.slots[last];
            self.slots = &self.slots[..last];
            if let Some(child) = slot {
                return Some((last, child));
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_children() {
        let n = TrieNode::<char>::root(26);
        assert_eq!(n.children().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(n.is_leaf());
        assert_eq!(n.width(), 26);
        assert_eq!(n.symbol(), None);
        assert_eq!(n.parent(), None);
    }

    #[test]
    fn children_come_in_offset_order() {
        let mut n = TrieNode::<char>::root(4);
        n.set_child(3, NodeId::new(1));
        n.set_child(0, NodeId::new(2));
        n.set_child(2, NodeId::new(3));
        let children: Vec<_> = n.children().collect();
        assert_eq!(
            children,
            vec![(0, NodeId::new(2)), (2, NodeId::new(3)), (3, NodeId::new(1))]
        );
        assert_eq!(n.child_count(), 3);
        assert_eq!(n.get(1), None);
        assert_eq!(n.get(3), Some(NodeId::new(1)));
        assert_eq!(n.get(99), None);
    }

    #[test]
    fn reversed_children() {
        let mut n = TrieNode::<u8>::root(5);
        n.set_child(1, NodeId::new(1));
        n.set_child(4, NodeId::new(2));
        let children: Vec<_> = n.children().rev().collect();
        assert_eq!(children, vec![(4, NodeId::new(2)), (1, NodeId::new(1))]);
    }

    #[test]
    fn child_records_parent_and_depth() {
        let n = TrieNode::child_of(NodeId::ROOT, 0, 'q', 26);
        assert_eq!(n.symbol(), Some('q'));
        assert_eq!(n.parent(), Some(NodeId::ROOT));
        assert_eq!(n.depth(), 1);
        assert!(!n.is_terminal());
        assert_eq!(n.failure(), None);
    }

    #[test]
    fn display_node_id() {
        assert_eq!(NodeId::new(42).to_string(), "#42");
        assert!(NodeId::ROOT.is_root());
    }
}
