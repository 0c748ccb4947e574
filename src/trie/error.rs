use thiserror::Error;

use super::symbol::TrieChar;

/// Broad classification of a [`TrieError`].
///
/// Every error is a violated precondition of the caller; none is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input was missing or malformed.
    InvalidArgument,
    /// The trie was not in the state the operation requires.
    InvalidState,
}

/// Errors returned by trie construction, insertion and matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError<C: TrieChar> {
    /// The alphabet was configured with zero symbols.
    #[error("alphabet size must be positive")]
    EmptyAlphabet,

    /// The last symbol of the alphabet is not representable.
    #[error("alphabet of {size} symbols starting at {first:?} exceeds the symbol range")]
    AlphabetOverflow {
        /// First symbol of the requested alphabet.
        first: C,
        /// Requested number of symbols.
        size: usize,
    },

    /// The wildcard marker is itself an alphabet symbol.
    #[error("wildcard {0:?} collides with an alphabet symbol")]
    WildcardInAlphabet(C),

    /// An empty sequence cannot be inserted; the root is never terminal.
    #[error("cannot insert an empty sequence")]
    EmptySequence,

    /// A symbol of an inserted sequence is outside the alphabet.
    #[error("symbol {symbol:?} at position {position} is outside the alphabet")]
    SymbolOutOfRange {
        /// The offending symbol.
        symbol: C,
        /// Its position in the sequence.
        position: usize,
    },

    /// Matching was attempted before [`build_automaton`](super::Trie::build_automaton).
    #[error("automaton not built yet; call build_automaton first")]
    AutomatonNotBuilt,

    /// An imported snapshot does not describe a well-formed trie.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl<C: TrieChar> TrieError<C> {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrieError::AutomatonNotBuilt => ErrorKind::InvalidState,
            TrieError::EmptyAlphabet
            | TrieError::AlphabetOverflow { .. }
            | TrieError::WildcardInAlphabet(_)
            | TrieError::EmptySequence
            | TrieError::SymbolOutOfRange { .. }
            | TrieError::InvalidSnapshot(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(TrieError::<char>::AutomatonNotBuilt.kind(), ErrorKind::InvalidState);
        assert_eq!(TrieError::<char>::EmptyAlphabet.kind(), ErrorKind::InvalidArgument);
        assert_eq!(TrieError::<char>::EmptySequence.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            TrieError::SymbolOutOfRange { symbol: 'A', position: 0 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages_name_the_symbol() {
        let err = TrieError::SymbolOutOfRange { symbol: 'Z', position: 3 };
        assert_eq!(err.to_string(), "symbol 'Z' at position 3 is outside the alphabet");
    }
}
