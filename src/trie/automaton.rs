//! Aho-Corasick failure and output links, and the multi-pattern scanner built on them.

use std::collections::VecDeque;
use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::TrieError;
use super::node::NodeId;
use super::symbol::TrieChar;
use super::tree::Trie;
use super::word::IntoWord;

/// Whether the failure and output links of a trie can be trusted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AutomatonState {
    /// [`build_automaton`](Trie::build_automaton) has never run.
    #[default]
    Unbuilt,
    /// Links match the current tree.
    Ready,
    /// Links were built, but words were inserted afterwards.
    Stale,
}

/// A dictionary word found by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// Terminal node of the matched word.
    pub node: NodeId,
    /// Index of the first input symbol of the match.
    pub start: usize,
    /// Index one past the last input symbol of the match.
    pub end: usize,
}

impl Match {
    /// Number of symbols in the match.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: dictionary words are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<C: TrieChar> Trie<C> {
    /// Computes the failure and output links of every node, turning the trie into
    /// an Aho-Corasick automaton.
    ///
    /// Must run after the last insertion that should take part in matching. Words
    /// inserted later are not seen by [`matches`](Trie::matches) until the
    /// automaton is built again; building twice in a row yields the same links.
    pub fn build_automaton(&mut self) {
        let root = NodeId::ROOT;
        for node in self.arena.iter_mut() {
            node.failure = None;
            node.output = None;
        }
        self.arena[root].failure = Some(root);

        // All nodes of depth 1 fall back to the root.
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let first_level: Vec<NodeId> = self.arena[root].children().map(|(_, id)| id).collect();
        for child in first_level {
            self.arena[child].failure = Some(root);
            queue.push_back(child);
        }

        let mut children = Vec::with_capacity(self.alphabet.size());
        while let Some(current) = queue.pop_front() {
            children.clear();
            children.extend(self.arena[current].children());
            for &(offset, child) in &children {
                // Deepest node spelled by a proper suffix of the child's word.
                let mut fail = self.failure_of(current);
                while self.arena[fail].get(offset).is_none() && !fail.is_root() {
                    fail = self.failure_of(fail);
                }
                let fail = self.arena[fail].get(offset).unwrap_or(root);

                let output = if self.arena[fail].is_terminal() {
                    Some(fail)
                } else {
                    self.arena[fail].output
                };
                let node = &mut self.arena[child];
                node.failure = Some(fail);
                node.output = output;
                queue.push_back(child);
            }
        }

        self.automaton = AutomatonState::Ready;
        debug!(
            nodes = self.arena.len(),
            words = self.word_count,
            "built trie automaton"
        );
    }

    /// Scans `input` from left to right and yields every dictionary word occurring in it.
    ///
    /// Matches are ordered by end position; matches ending at the same position come
    /// longest first. Symbols outside the alphabet reset the scan to the root.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::AutomatonNotBuilt`] if
    /// [`build_automaton`](Trie::build_automaton) has never been called.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::tree::build_trie;
    ///
    /// let mut trie = build_trie(["he", "she", "hers"]).unwrap();
    /// trie.build_automaton();
    /// let spans: Vec<_> = trie
    ///     .find_iter("ushers".chars())
    ///     .unwrap()
    ///     .map(|m| (m.start, m.end))
    ///     .collect();
    /// assert_eq!(spans, [(1, 4), (2, 4), (2, 6)]);
    /// ```
    pub fn find_iter<I>(&self, input: I) -> Result<FindIter<'_, C, I::IntoIter>, TrieError<C>>
    where
        I: IntoIterator<Item = C>,
    {
        match self.automaton {
            AutomatonState::Unbuilt => return Err(TrieError::AutomatonNotBuilt),
            AutomatonState::Stale => {
                warn!("matching with a stale automaton; words inserted since the last build may be missed")
            }
            AutomatonState::Ready => {}
        }
        Ok(FindIter {
            trie: self,
            input: input.into_iter(),
            position: 0,
            current: NodeId::ROOT,
            pending: None,
        })
    }

    /// Returns every dictionary word occurring in `input`, in the order of
    /// [`find_iter`](Trie::find_iter).
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::AutomatonNotBuilt`] if the automaton was never built.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::tree::build_trie;
    ///
    /// let mut trie = build_trie(["vertical", "call", "all"]).unwrap();
    /// trie.build_automaton();
    /// assert_eq!(trie.matches("wverticall").unwrap(), ["vertical", "call", "all"]);
    /// ```
    pub fn matches(&self, input: impl IntoWord<C>) -> Result<Vec<C::Word>, TrieError<C>> {
        let input = input.collect_word();
        Ok(self
            .find_iter(input)?
            .map(|m| self.word(m.node))
            .collect())
    }

    /// Failure link of `id`; nodes created after the last build fall back to the root.
    #[inline]
    fn failure_of(&self, id: NodeId) -> NodeId {
        self.arena[id].failure.unwrap_or(NodeId::ROOT)
    }

    /// Goto transition of the automaton.
    fn next_state(&self, mut current: NodeId, symbol: C) -> NodeId {
        let Some(offset) = self.alphabet.offset(symbol) else {
            return NodeId::ROOT;
        };
        while self.arena[current].get(offset).is_none() && !current.is_root() {
            current = self.failure_of(current);
        }
        self.arena[current].get(offset).unwrap_or(NodeId::ROOT)
    }
}

/// Iterator over the [`Match`]es of an input, created by [`Trie::find_iter`].
pub struct FindIter<'t, C: TrieChar, I> {
    trie: &'t Trie<C>,
    input: I,
    position: usize,
    current: NodeId,
    /// Next node to report at the current position.
    pending: Option<NodeId>,
}

impl<C: TrieChar, I: Iterator<Item = C>> Iterator for FindIter<'_, C, I> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(id) = self.pending {
                let node = self.trie.node(id);
                self.pending = node.output;
                return Some(Match {
                    node: id,
                    start: self.position - node.depth(),
                    end: self.position,
                });
            }

            let symbol = self.input.next()?;
            self.position += 1;
            self.current = self.trie.next_state(self.current, symbol);
            let node = self.trie.node(self.current);
            self.pending = if node.is_terminal() {
                Some(self.current)
            } else {
                node.output
            };
        }
    }
}

impl<C: TrieChar, I: FusedIterator<Item = C>> FusedIterator for FindIter<'_, C, I> {}
