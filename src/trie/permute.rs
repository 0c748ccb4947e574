use smallvec::SmallVec;

use super::node::NodeId;
use super::symbol::TrieChar;
use super::tree::Trie;
use super::word::IntoWord;

type Letters<C> = SmallVec<[C; 16]>;

impl<C: TrieChar> Trie<C> {
    /// Finds the words that can be spelled with some or all of `letters`, each
    /// letter used at most once.
    ///
    /// Orderings are generated by repeatedly taking one letter out of the remaining
    /// multiset. Repeated letters produce the same candidates more than once, and
    /// the result then holds duplicates; deduplicate on the caller side if needed.
    /// Orderings whose prefix is not in the trie are skipped, which never drops a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::tree::build_trie;
    ///
    /// let trie = build_trie(["dare", "dear", "read", "are", "rad", "red", "ear", "era"]).unwrap();
    /// let mut words = trie.permute(['a', 'e', 'r', 'd']);
    /// words.sort();
    /// assert_eq!(words, ["are", "dare", "dear", "ear", "era", "rad", "read", "red"]);
    /// ```
    pub fn permute(&self, letters: impl IntoWord<C>) -> Vec<C::Word> {
        let letters: Letters<C> = letters.collect_word().into_iter().collect();
        let mut words = Vec::new();

        let mut stack: Vec<(NodeId, Letters<C>)> = vec![(NodeId::ROOT, letters)];
        while let Some((id, remaining)) = stack.pop() {
            if !id.is_root() && self.node(id).is_terminal() {
                words.push(self.word(id));
            }
            // Pushed in reverse so that the first letter is explored first.
            for &letter in remaining.iter().rev() {
                let Some(child) = self.child(id, letter) else {
                    continue;
                };
                let mut rest = remaining.clone();
                if let Some(pos) = rest.iter().position(|&c| c == letter) {
                    rest.remove(pos);
                }
                stack.push((child, rest));
            }
        }
        words
    }
}
