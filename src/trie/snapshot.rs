//! Export and import of a trie's arena, cross-links included.
//!
//! Links are stored as arena indices, so the root's failure self-loop and the
//! parent back-references need no special treatment when serialized.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::alphabet::Alphabet;
use super::automaton::AutomatonState;
use super::error::TrieError;
use super::node::{NodeId, TrieNode};
use super::node_arena::NodeArena;
use super::symbol::TrieChar;
use super::tree::Trie;

/// Plain-data image of a [`Trie`], produced by [`Trie::snapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrieSnapshot<C: TrieChar> {
    /// First symbol of the alphabet.
    pub first: C,
    /// Alphabet size, the child-slot width of every node.
    pub size: usize,
    /// Wildcard marker for queries.
    pub wildcard: C,
    /// State of the failure and output links.
    pub automaton: AutomatonState,
    /// One record per node, in arena order; the root comes first.
    pub nodes: Vec<NodeRecord<C>>,
}

/// One node of a [`TrieSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeRecord<C: TrieChar> {
    /// Edge symbol into the node; `None` for the root.
    pub symbol: Option<C>,
    /// Whether a word ends here.
    pub terminal: bool,
    /// Owning node; `None` for the root.
    pub parent: Option<NodeId>,
    /// Failure link.
    pub failure: Option<NodeId>,
    /// Output link.
    pub output: Option<NodeId>,
    /// Occupied child slots as `(offset, child)`, in increasing offset order.
    pub children: Vec<(usize, NodeId)>,
}

fn invalid<C: TrieChar, T>(reason: impl Into<String>) -> Result<T, TrieError<C>> {
    Err(TrieError::InvalidSnapshot(reason.into()))
}

impl<C: TrieChar> Trie<C> {
    /// Exports the nodes and all three link types.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    /// use libtrie::trie::tree::build_trie;
    ///
    /// let mut trie = build_trie(["ab", "b"]).unwrap();
    /// trie.build_automaton();
    ///
    /// let copy = Trie::from_snapshot(trie.snapshot()).unwrap();
    /// assert_eq!(copy.matches("cab").unwrap(), ["ab", "b"]);
    /// ```
    pub fn snapshot(&self) -> TrieSnapshot<C> {
        let nodes = self
            .arena
            .iter()
            .map(|(_, node)| NodeRecord {
                symbol: node.symbol(),
                terminal: node.is_terminal(),
                parent: node.parent(),
                failure: node.failure(),
                output: node.output(),
                children: node.children().collect(),
            })
            .collect();
        TrieSnapshot {
            first: self.alphabet.first(),
            size: self.alphabet.size(),
            wildcard: self.alphabet.wildcard(),
            automaton: self.automaton,
            nodes,
        }
    }

    /// Rebuilds a trie from a snapshot, root and links included.
    ///
    /// # Errors
    ///
    /// Returns an alphabet error if the alphabet fields are invalid, and
    /// [`TrieError::InvalidSnapshot`] if the nodes do not form a single tree
    /// rooted at index 0 with consistent parents and symbols, or if a failure
    /// or output link does not lead to a shallower node.
    pub fn from_snapshot(snapshot: TrieSnapshot<C>) -> Result<Self, TrieError<C>> {
        let alphabet = Alphabet::new(snapshot.first, snapshot.size, snapshot.wildcard)?;
        let records = snapshot.nodes;
        let count = records.len();
        let Some(root) = records.first() else {
            return invalid("snapshot has no nodes");
        };
        if root.parent.is_some() || root.symbol.is_some() {
            return invalid("root has a parent or symbol");
        }
        if root.terminal {
            return invalid("root is terminal");
        }
        let in_range = |id: NodeId| id.index() < count;

        // Child slots, checked against the records they point at.
        let mut slots: Vec<Box<[Option<NodeId>]>> = Vec::with_capacity(count);
        let mut claimed = vec![false; count];
        for (index, record) in records.iter().enumerate() {
            let id = NodeId::new(index);
            let mut children = vec![None; alphabet.size()].into_boxed_slice();
            for &(offset, child) in &record.children {
                if offset >= alphabet.size() {
                    return invalid(format!("{id} has child slot {offset} outside the alphabet"));
                }
                if !in_range(child) || child.is_root() {
                    return invalid(format!("{id} has invalid child {child}"));
                }
                if children[offset].is_some() {
                    return invalid(format!("{id} fills child slot {offset} twice"));
                }
                if std::mem::replace(&mut claimed[child.index()], true) {
                    return invalid(format!("{child} is the child of more than one node"));
                }
                let child_record = &records[child.index()];
                if child_record.parent != Some(id) {
                    return invalid(format!("{child} does not name {id} as its parent"));
                }
                if child_record.symbol != alphabet.symbol(offset) {
                    return invalid(format!("{child} symbol disagrees with slot {offset} of {id}"));
                }
                children[offset] = Some(child);
            }
            slots.push(children);
        }

        // Depths, and reachability of every node from the root.
        let mut depths: Vec<Option<usize>> = vec![None; count];
        depths[0] = Some(0);
        let mut queue = VecDeque::from([NodeId::ROOT]);
        while let Some(id) = queue.pop_front() {
            let depth = depths[id.index()].unwrap_or_default();
            for child in slots[id.index()].iter().flatten() {
                depths[child.index()] = Some(depth + 1);
                queue.push_back(*child);
            }
        }
        if let Some(index) = depths.iter().position(Option::is_none) {
            return invalid(format!("{} is not reachable from the root", NodeId::new(index)));
        }
        let depths: Vec<usize> = depths.into_iter().flatten().collect();

        // Every link below the root leads to a strictly shallower node.
        for (index, record) in records.iter().enumerate() {
            let id = NodeId::new(index);
            for link in [record.failure, record.output].into_iter().flatten() {
                if !in_range(link) {
                    return invalid(format!("{id} links to missing node {link}"));
                }
                if !id.is_root() && depths[link.index()] >= depths[index] {
                    return invalid(format!("{id} links to {link}, which is not shallower"));
                }
            }
            if id.is_root()
                && (record.failure.is_some_and(|fail| !fail.is_root()) || record.output.is_some())
            {
                return invalid("root links away from itself");
            }
            if record.output.is_some_and(|out| !records[out.index()].terminal) {
                return invalid(format!("{id} has an output link to a non-terminal node"));
            }
            if snapshot.automaton == AutomatonState::Ready && record.failure.is_none() {
                return invalid(format!("automaton is ready but {id} has no failure link"));
            }
        }

        let nodes = records
            .iter()
            .zip(slots)
            .zip(depths)
            .map(|((record, children), depth)| {
                let mut node = TrieNode::from_parts(
                    children,
                    record.terminal,
                    record.symbol,
                    record.parent,
                    depth,
                );
                node.failure = record.failure;
                node.output = record.output;
                node
            })
            .collect();
        let word_count = records.iter().filter(|record| record.terminal).count();
        debug!(nodes = count, words = word_count, "imported trie snapshot");

        Ok(Trie {
            arena: NodeArena::from_nodes(nodes),
            alphabet,
            word_count,
            automaton: snapshot.automaton,
        })
    }
}
