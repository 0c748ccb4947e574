use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::node::NodeId;
use super::symbol::TrieChar;
use super::tree::Trie;
use super::word::{IntoWord, WordBuf};

/// Breadth-first iterator over the words below a node.
///
/// Words come out by increasing length, and words of equal length in
/// lexicographic order of their symbols' alphabet offsets.
///
/// Created by [`Trie::iter_prefix`] and [`Trie::words`].
#[derive(Clone)]
pub struct PrefixIter<'t, C: TrieChar> {
    trie: &'t Trie<C>,
    queue: VecDeque<(NodeId, WordBuf<C>)>,
}

impl<'t, C: TrieChar> PrefixIter<'t, C> {
    fn new(trie: &'t Trie<C>, start: Option<NodeId>, prefix: WordBuf<C>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(start) = start {
            queue.push_back((start, prefix));
        }
        PrefixIter { trie, queue }
    }
}

impl<C: TrieChar> Iterator for PrefixIter<'_, C> {
    type Item = C::Word;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, prefix)) = self.queue.pop_front() {
            let node = self.trie.node(id);
            for (_, child) in node.children() {
                let mut extended = prefix.clone();
                extended.extend(self.trie.node(child).symbol());
                self.queue.push_back((child, extended));
            }
            if node.is_terminal() {
                return Some(prefix.into_iter().collect());
            }
        }
        None
    }
}

impl<C: TrieChar> FusedIterator for PrefixIter<'_, C> {}

impl<C: TrieChar> Trie<C> {
    /// Returns every word starting with `prefix`, shortest first.
    ///
    /// The prefix itself is included if it is a word. An empty prefix, or one
    /// without a path in the trie, gives an empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::tree::build_trie;
    ///
    /// let trie = build_trie(["car", "cart", "care", "cat", "dog"]).unwrap();
    /// assert_eq!(trie.starts_with("ca"), ["car", "cat", "care", "cart"]);
    /// assert_eq!(trie.starts_with("car"), ["car", "care", "cart"]);
    /// assert!(trie.starts_with("").is_empty());
    /// ```
    pub fn starts_with(&self, prefix: impl IntoWord<C>) -> Vec<C::Word> {
        self.iter_prefix(prefix).collect()
    }

    /// Lazy form of [`starts_with`](Trie::starts_with).
    pub fn iter_prefix(&self, prefix: impl IntoWord<C>) -> PrefixIter<'_, C> {
        let prefix = prefix.collect_word();
        let start = self.walk(&prefix).filter(|id| !id.is_root());
        PrefixIter::new(self, start, prefix)
    }

    /// Iterates over every word in the trie, in the order of [`starts_with`](Trie::starts_with).
    pub fn words(&self) -> PrefixIter<'_, C> {
        PrefixIter::new(self, Some(NodeId::ROOT), WordBuf::new())
    }
}
