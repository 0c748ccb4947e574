/// Contiguous symbol ranges and the wildcard marker.
pub mod alphabet;
/// Aho-Corasick automaton construction and multi-pattern matching.
pub mod automaton;
/// Breadth-first enumeration of the words below a prefix.
pub mod enumerate;
/// Error type and error classification.
pub mod error;
/// Trie node and child iteration.
pub mod node;
/// Index-based node storage.
pub(crate) mod node_arena;
/// Word discovery from a multiset of letters.
pub mod permute;
/// Export and import of the arena representation.
pub mod snapshot;
/// Trait for types that can serve as trie edge labels.
pub mod symbol;
/// The trie itself: construction, insertion and lookup.
pub mod tree;
/// Wildcard-constrained lookup.
pub mod wildcard;
/// Conversion of caller input into symbol sequences.
pub mod word;

pub use alphabet::{Alphabet, DEFAULT_WILDCARD, ENGLISH_ALPHABET_SIZE};
pub use automaton::{AutomatonState, FindIter, Match};
pub use enumerate::PrefixIter;
pub use error::{ErrorKind, TrieError};
pub use node::{ChildIter, NodeId, TrieNode};
pub use snapshot::{NodeRecord, TrieSnapshot};
pub use symbol::TrieChar;
pub use tree::Trie;
pub use word::IntoWord;
