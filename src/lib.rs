//! # libtrie
//!
//! An arena-backed [trie](https://en.wikipedia.org/wiki/Trie) over a small contiguous
//! alphabet that doubles as an
//! [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! multi-pattern matching automaton.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16` or `u32` through
//!   [`TrieChar`]
//! - **Arena nodes**: children, parent, failure and output links are indices into a
//!   single `Vec`, so the root's failure self-loop needs no reference counting
//! - **Dictionary queries**: containment, prefix enumeration, wildcard queries and
//!   permutation search
//! - **Multi-pattern matching**: every dictionary word occurring in an input, in one pass
//! - **Snapshots**: export and import of the whole structure, links included
//!   (serializable with the `serde` feature, enabled by default)
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["vertical", "call", "all"] {
//!     trie.insert(word).unwrap();
//! }
//! assert!(trie.contains("call"));
//! assert!(!trie.contains("cal"));
//! assert_eq!(trie.starts_with("ca"), ["call"]);
//!
//! trie.build_automaton();
//! assert_eq!(trie.matches("wverticall").unwrap(), ["vertical", "call", "all"]);
//! ```
//!
//! ## Generic Usage
//!
//! The trie is generic over the edge label type; the [`Alphabet`] fixes the
//! symbol range and the wildcard used by [`Trie::query`]:
//!
//! ```
//! use libtrie::{Alphabet, Trie};
//!
//! let alphabet = Alphabet::new(1u8, 4, 0).unwrap();
//! let mut trie = Trie::with_alphabet(alphabet);
//! trie.insert([1, 2, 3]).unwrap();
//! trie.insert([1, 4, 3]).unwrap();
//!
//! assert!(trie.contains([1, 2, 3]));
//! assert_eq!(trie.query([1, 0, 3]), [vec![1u8, 2, 3], vec![1, 4, 3]]);
//! ```

#![warn(missing_docs)]

/// Core trie data structure: nodes, alphabet, automaton and queries.
pub mod trie;

pub use trie::{
    Alphabet, AutomatonState, ErrorKind, IntoWord, Match, NodeId, Trie, TrieChar, TrieError,
    TrieNode, TrieSnapshot,
};

#[cfg(test)]
mod test {
    use super::trie::tree::build_trie;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dictionary_queries_share_one_tree() {
        let words = ["dare", "dear", "read", "are", "rad", "red", "ear", "era"];
        let mut trie = build_trie(words).unwrap();

        for word in words {
            assert!(trie.contains(word), "{}", word);
        }
        assert!(!trie.contains("rea"));
        assert_eq!(trie.starts_with("re"), vec!["red", "read"]);
        assert_eq!(trie.query("?ea?"), vec!["dear", "read"]);
        assert_eq!(trie.permute("aerd").len(), words.len());

        trie.build_automaton();
        assert_eq!(trie.matches("dread").unwrap(), vec!["read"]);
        assert_eq!(trie.matches("dared").unwrap(), vec!["dare", "are", "red"]);
    }

    #[test]
    fn every_word_round_trips_through_its_node() {
        let words = ["alfa", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel"];
        let trie = build_trie(words).unwrap();
        for word in words {
            let node = trie.lookup_node(word).unwrap();
            assert!(trie.node(node).is_terminal());
            assert_eq!(trie.word(node), word);
        }
        let mut all: Vec<_> = trie.words().collect();
        all.sort();
        assert_eq!(all, words);
    }
}
