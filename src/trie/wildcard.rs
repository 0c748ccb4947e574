use super::node::NodeId;
use super::symbol::TrieChar;
use super::tree::Trie;
use super::word::IntoWord;

impl<C: TrieChar> Trie<C> {
    /// Finds every word of the same length as `expression` that agrees with it on
    /// each literal position. The alphabet's [wildcard](crate::Alphabet::wildcard)
    /// matches any single symbol.
    ///
    /// Only symbols that exist as children are tried at a wildcard, so the cost is
    /// bounded by the dictionary rather than by the alphabet. Results are
    /// deterministic for a given alphabet: each wildcard branches in offset order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::tree::build_trie;
    ///
    /// let trie = build_trie(["slice", "space", "since"]).unwrap();
    /// assert_eq!(trie.query("s??ce"), ["slice", "space"]);
    /// assert_eq!(trie.query("?????"), ["since", "slice", "space"]);
    /// ```
    pub fn query(&self, expression: impl IntoWord<C>) -> Vec<C::Word> {
        let expression = expression.collect_word();
        let wildcard = self.alphabet.wildcard();
        let mut words = Vec::new();

        // (node, number of expression symbols consumed); depth-first, smallest offset on top.
        let mut stack: Vec<(NodeId, usize)> = vec![(NodeId::ROOT, 0)];
        while let Some((id, index)) = stack.pop() {
            let node = self.node(id);
            let Some(&next) = expression.get(index) else {
                if node.is_terminal() {
                    words.push(self.word(id));
                }
                continue;
            };
            if next == wildcard {
                stack.extend(node.children().rev().map(|(_, child)| (child, index + 1)));
            } else if let Some(child) = self.child(id, next) {
                stack.push((child, index + 1));
            }
        }
        words
    }
}

#[cfg(test)]
mod test {
    use super::super::tree::build_trie;
    use super::*;
    use crate::Alphabet;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_positions_constrain_results() {
        let trie = build_trie(["slice", "space", "since"]).unwrap();
        assert_eq!(trie.query("s??ce"), vec!["slice", "space"]);
        assert_eq!(trie.query("s?n?e"), vec!["since"]);
    }

    #[test]
    fn length_must_match_exactly() {
        let trie = build_trie(["ab", "abc", "abcd"]).unwrap();
        assert_eq!(trie.query("ab?"), vec!["abc"]);
        assert_eq!(trie.query("??"), vec!["ab"]);
        assert!(trie.query("?????").is_empty());
    }

    #[test]
    fn wildcards_branch_in_alphabet_order() {
        let trie = build_trie(["cut", "bat", "cat", "bit", "cot"]).unwrap();
        assert_eq!(trie.query("?at"), vec!["bat", "cat"]);
        assert_eq!(trie.query("c?t"), vec!["cat", "cot", "cut"]);
        assert_eq!(trie.query("???"), vec!["bat", "bit", "cat", "cot", "cut"]);
    }

    #[test]
    fn no_wildcards_is_exact_lookup() {
        let trie = build_trie(["exact"]).unwrap();
        assert_eq!(trie.query("exact"), vec!["exact"]);
        assert!(trie.query("exac").is_empty());
    }

    #[test]
    fn foreign_literal_abandons_branch() {
        let trie = build_trie(["abc"]).unwrap();
        assert!(trie.query("a#c").is_empty());
        assert!(trie.query("").is_empty());
    }

    #[test]
    fn custom_wildcard() {
        let alphabet = Alphabet::new(1u8, 3, 0).unwrap();
        let mut trie = Trie::with_alphabet(alphabet);
        trie.insert([1, 2]).unwrap();
        trie.insert([3, 2]).unwrap();
        trie.insert([3, 3]).unwrap();
        assert_eq!(trie.query([0, 2]), vec![vec![1, 2], vec![3, 2]]);
    }

    #[test]
    fn matches_linear_filter() {
        let words = ["mist", "most", "must", "mast", "moss", "mitt", "most"];
        let trie = build_trie(words).unwrap();
        let pattern = "m?s?";
        let mut expected: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| {
                w.len() == pattern.len()
                    && w.chars().zip(pattern.chars()).all(|(c, p)| p == '?' || c == p)
            })
            .collect();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(trie.query(pattern), expected);
    }
}
