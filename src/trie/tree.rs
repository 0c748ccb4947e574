use smallvec::SmallVec;
use tracing::trace;

use super::alphabet::Alphabet;
use super::automaton::AutomatonState;
use super::error::TrieError;
use super::node::{NodeId, TrieNode};
use super::node_arena::NodeArena;
use super::symbol::TrieChar;
use super::word::{IntoWord, WORD_INLINE};

/// A prefix tree over a fixed contiguous [`Alphabet`].
///
/// Nodes live in an arena and refer to each other through [`NodeId`]s. Besides
/// insertion and lookup, a trie supports prefix enumeration
/// ([`starts_with`](Trie::starts_with)), Aho-Corasick matching
/// ([`build_automaton`](Trie::build_automaton) then [`matches`](Trie::matches)),
/// wildcard queries ([`query`](Trie::query)) and permutation search
/// ([`permute`](Trie::permute)).
///
/// # Examples
///
/// ```
/// use libtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("tea").unwrap();
/// trie.insert("ten").unwrap();
///
/// assert!(trie.contains("tea"));
/// assert!(!trie.contains("te"));
/// assert_eq!(trie.starts_with("te"), ["tea", "ten"]);
/// ```
#[derive(Clone, Debug)]
pub struct Trie<C: TrieChar> {
    pub(crate) arena: NodeArena<C>,
    pub(crate) alphabet: Alphabet<C>,
    pub(crate) word_count: usize,
    pub(crate) automaton: AutomatonState,
}

impl Trie<char> {
    /// Creates an empty trie over the lowercase English alphabet, with `?` as wildcard.
    pub fn new() -> Self {
        Trie::with_alphabet(Alphabet::lowercase())
    }

    /// Creates an empty trie over the first `size` symbols starting at `a`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyAlphabet`] if `size` is zero.
    pub fn with_alphabet_size(size: usize) -> Result<Self, TrieError<char>> {
        Ok(Trie::with_alphabet(Alphabet::with_size(size)?))
    }
}

impl Default for Trie<char> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<C: TrieChar> Trie<C> {
    /// Creates an empty trie whose nodes have one child slot per symbol of `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet<C>) -> Self {
        Trie {
            arena: NodeArena::with_root(alphabet.size()),
            alphabet,
            word_count: 0,
            automaton: AutomatonState::Unbuilt,
        }
    }

    /// The alphabet this trie was built for.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet<C> {
        &self.alphabet
    }

    /// Number of distinct words inserted.
    #[inline]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// True if no word was inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &TrieNode<C> {
        &self.arena[NodeId::ROOT]
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode<C> {
        &self.arena[id]
    }

    /// Returns the child of `id` reached through `symbol`, if any.
    #[inline]
    pub fn child(&self, id: NodeId, symbol: C) -> Option<NodeId> {
        let offset = self.alphabet.offset(symbol)?;
        self.arena[id].get(offset)
    }

    /// Current state of the failure and output links.
    #[inline]
    pub fn automaton_state(&self) -> AutomatonState {
        self.automaton
    }

    /// True if words were inserted after the last [`build_automaton`](Trie::build_automaton).
    #[inline]
    pub fn automaton_is_stale(&self) -> bool {
        self.automaton == AutomatonState::Stale
    }

    /// Inserts a word into the trie.
    ///
    /// Returns `Ok(true)` if the word was added and `Ok(false)` if it was already
    /// present. Missing nodes along the path are created on demand.
    ///
    /// Inserting after [`build_automaton`](Trie::build_automaton) leaves the
    /// automaton stale until it is built again.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptySequence`] for an empty word and
    /// [`TrieError::SymbolOutOfRange`] if a symbol is not in the alphabet. The trie
    /// is left untouched on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::{Trie, TrieError};
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.insert("cat"), Ok(true));
    /// assert_eq!(trie.insert("cat"), Ok(false));
    /// assert_eq!(
    ///     trie.insert("Cat"),
    ///     Err(TrieError::SymbolOutOfRange { symbol: 'C', position: 0 })
    /// );
    /// ```
    pub fn insert(&mut self, word: impl IntoWord<C>) -> Result<bool, TrieError<C>> {
        let word = word.collect_word();
        if word.is_empty() {
            return Err(TrieError::EmptySequence);
        }
        let offsets = word
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.alphabet
                    .offset(symbol)
                    .ok_or(TrieError::SymbolOutOfRange { symbol, position })
            })
            .collect::<Result<SmallVec<[usize; WORD_INLINE]>, _>>()?;

        let width = self.alphabet.size();
        let mut current = NodeId::ROOT;
        for (&symbol, &offset) in word.iter().zip(&offsets) {
            current = match self.arena[current].get(offset) {
                Some(child) => child,
                None => {
                    let depth = self.arena[current].depth();
                    let child = self
                        .arena
                        .alloc(TrieNode::child_of(current, depth, symbol, width));
                    self.arena[current].set_child(offset, child);
                    trace!(node = %child, parent = %current, ?symbol, "created trie node");
                    child
                }
            };
        }

        let terminal = &mut self.arena[current];
        if terminal.is_terminal() {
            return Ok(false);
        }
        terminal.set_terminal();
        self.word_count += 1;
        if self.automaton == AutomatonState::Ready {
            self.automaton = AutomatonState::Stale;
        }
        Ok(true)
    }

    /// Returns true if `word` was inserted.
    ///
    /// A strict prefix of an inserted word is not contained unless it was inserted
    /// itself. Symbols outside the alphabet never match.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        self.lookup_node(word)
            .is_some_and(|id| self.arena[id].is_terminal())
    }

    /// Returns the node at the end of `prefix`'s path.
    ///
    /// Returns `None` if a symbol along the path is missing, and also when the path
    /// ends at the root: the empty prefix never resolves to a node.
    pub fn lookup_node(&self, prefix: impl IntoWord<C>) -> Option<NodeId> {
        let prefix = prefix.collect_word();
        self.walk(&prefix).filter(|id| !id.is_root())
    }

    /// Returns true if some inserted word starts with the non-empty `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.lookup_node(prefix).is_some()
    }

    /// Reconstructs the sequence spelled by the path from the root to `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("rust").unwrap();
    /// let node = trie.lookup_node("rust").unwrap();
    /// assert_eq!(trie.word(node), "rust");
    /// ```
    pub fn word(&self, id: NodeId) -> C::Word {
        let mut symbols: SmallVec<[C; WORD_INLINE]> = SmallVec::new();
        let mut current = &self.arena[id];
        while let (Some(symbol), Some(parent)) = (current.symbol(), current.parent()) {
            symbols.push(symbol);
            current = &self.arena[parent];
        }
        symbols.into_iter().rev().collect()
    }

    /// Follows `symbols` from the root; the empty path yields the root.
    pub(crate) fn walk(&self, symbols: &[C]) -> Option<NodeId> {
        symbols
            .iter()
            .try_fold(NodeId::ROOT, |id, &symbol| self.child(id, symbol))
    }
}

/// Builds a trie over the lowercase English alphabet from an iterator of words.
///
/// Unlike a minimal word graph, the words may come in any order and repeat.
///
/// # Examples
///
/// ```
/// use libtrie::trie::tree::build_trie;
///
/// let trie = build_trie(["bake", "cake", "fake"]).unwrap();
/// assert!(trie.contains("cake"));
/// assert!(!trie.contains("ake"));
/// ```
pub fn build_trie<W>(words: impl IntoIterator<Item = W>) -> Result<Trie<char>, TrieError<char>>
where
    W: IntoWord<char>,
{
    let mut trie = Trie::new();
    for word in words {
        trie.insert(word)?;
    }
    Ok(trie)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn add_word() {
        let trie = build_trie(["test", "tester", "wtest"]).unwrap();
        let is_terminal = |prefix: &str| trie.node(trie.lookup_node(prefix).unwrap()).is_terminal();

        assert!(!is_terminal("t"));
        assert!(!is_terminal("te"));
        assert!(!is_terminal("tes"));
        assert!(is_terminal("test"));
        assert!(!is_terminal("teste"));
        assert!(is_terminal("tester"));
        assert_eq!(trie.lookup_node("testert"), None);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn nodes_are_shared_along_common_prefixes() {
        let trie = build_trie(["abc", "abd", "ab"]).unwrap();
        // root + a + b + c + d
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("echo"), Ok(true));
        let nodes = trie.node_count();
        assert_eq!(trie.insert("echo"), Ok(false));
        assert_eq!(trie.insert(String::from("echo")), Ok(false));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert(""), Err(TrieError::EmptySequence));
        assert!(trie.is_empty());
    }

    #[test]
    fn out_of_range_symbol_leaves_trie_untouched() {
        let mut trie = Trie::new();
        let res = trie.insert("abC");
        assert_eq!(res, Err(TrieError::SymbolOutOfRange { symbol: 'C', position: 2 }));
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.has_prefix("a"));
    }

    #[test]
    fn prefixes_are_not_words() {
        let trie = build_trie(["vertical"]).unwrap();
        assert!(trie.contains("vertical"));
        assert!(!trie.contains("vert"));
        assert!(!trie.contains("verticals"));
        assert!(!trie.contains("VERTICAL"));
        assert!(!trie.contains(""));
        assert!(trie.has_prefix("vert"));
    }

    #[test]
    fn lookup_of_empty_prefix_is_none() {
        let trie = build_trie(["alfa"]).unwrap();
        assert_eq!(trie.lookup_node(""), None);
        assert!(!trie.has_prefix(""));
    }

    #[test]
    fn lookup_reaches_expected_node() {
        let trie = build_trie(["bravo"]).unwrap();
        let id = trie.lookup_node("bra").unwrap();
        let node = trie.node(id);
        assert_eq!(node.symbol(), Some('a'));
        assert_eq!(node.depth(), 3);
        assert_eq!(trie.word(id), "bra");
        assert_eq!(trie.child(id, 'v'), trie.lookup_node("brav"));
        assert_eq!(trie.child(id, '!'), None);
    }

    #[test]
    fn custom_alphabet_with_bytes() {
        let alphabet = Alphabet::new(1u8, 4, 0).unwrap();
        let mut trie = Trie::with_alphabet(alphabet);
        trie.insert([1, 2, 3]).unwrap();
        trie.insert([1, 2, 4]).unwrap();
        trie.insert([2, 3, 4]).unwrap();
        assert!(trie.contains([1, 2, 3]));
        assert!(trie.contains([2, 3, 4]));
        assert!(!trie.contains([1, 2]));
        assert!(!trie.contains([1, 2, 5]));
        assert_eq!(trie.root().width(), 4);
        assert_eq!(trie.word(trie.lookup_node([1, 2, 4]).unwrap()), vec![1, 2, 4]);
        assert_eq!(
            trie.insert([1, 9]),
            Err(TrieError::SymbolOutOfRange { symbol: 9, position: 1 })
        );
    }

    #[test]
    fn alphabet_size_must_be_positive() {
        assert_eq!(Trie::with_alphabet_size(0).unwrap_err(), TrieError::EmptyAlphabet);
        let trie = Trie::with_alphabet_size(4).unwrap();
        assert_eq!(trie.root().width(), 4);
    }

    #[test]
    fn smaller_alphabet_rejects_later_letters() {
        let mut trie = Trie::with_alphabet_size(3).unwrap();
        assert_eq!(trie.insert("cab"), Ok(true));
        assert_eq!(
            trie.insert("dab"),
            Err(TrieError::SymbolOutOfRange { symbol: 'd', position: 0 })
        );
    }

    #[test]
    fn insert_after_build_marks_automaton_stale() {
        let mut trie = build_trie(["he", "she"]).unwrap();
        assert_eq!(trie.automaton_state(), AutomatonState::Unbuilt);
        trie.build_automaton();
        assert_eq!(trie.automaton_state(), AutomatonState::Ready);
        trie.insert("she").unwrap();
        assert_eq!(trie.automaton_state(), AutomatonState::Ready);
        trie.insert("his").unwrap();
        assert!(trie.automaton_is_stale());
        trie.build_automaton();
        assert_eq!(trie.automaton_state(), AutomatonState::Ready);
    }

    proptest! {
        #[test]
        fn inserted_words_stay_contained(
            words in proptest::collection::vec("[a-e]{1,6}", 1..20),
            others in proptest::collection::vec("[a-e]{1,6}", 0..20),
        ) {
            let mut trie = Trie::new();
            for w in &words {
                trie.insert(w).unwrap();
                prop_assert!(trie.contains(w));
            }
            for w in &others {
                trie.insert(w).unwrap();
            }
            for w in &words {
                prop_assert!(trie.contains(w));
            }
        }

        #[test]
        fn absent_words_are_not_contained(
            words in proptest::collection::vec("[a-c]{1,5}", 1..10),
            candidate in "[a-c]{1,6}",
        ) {
            let trie = build_trie(&words).unwrap();
            prop_assert_eq!(trie.contains(&candidate), words.contains(&candidate));
        }

        #[test]
        fn word_reconstructs_inserted_sequence(words in proptest::collection::vec("[a-z]{1,12}", 1..10)) {
            let trie = build_trie(&words).unwrap();
            for w in &words {
                let id = trie.lookup_node(w).unwrap();
                prop_assert_eq!(&trie.word(id), w);
            }
        }
    }
}
