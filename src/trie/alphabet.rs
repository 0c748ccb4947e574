use super::error::TrieError;
use super::symbol::TrieChar;

/// Number of symbols in the default lowercase alphabet.
pub const ENGLISH_ALPHABET_SIZE: usize = 26;

/// The wildcard marker of the default alphabet.
pub const DEFAULT_WILDCARD: char = '?';

/// A contiguous range of symbols plus the wildcard marker used by
/// [`Trie::query`](super::Trie::query).
///
/// Every node of a trie has exactly [`size`](Alphabet::size) child slots, and a
/// symbol lands in slot `code(symbol) - code(first)`.
///
/// # Examples
///
/// ```
/// use libtrie::Alphabet;
///
/// let dna = Alphabet::new('A', 20, '*').unwrap();
/// assert_eq!(dna.offset('C'), Some(2));
/// assert_eq!(dna.offset('a'), None);
/// assert_eq!(dna.symbol(19), Some('T'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet<C: TrieChar> {
    first: C,
    size: usize,
    wildcard: C,
}

impl<C: TrieChar> Alphabet<C> {
    /// Creates an alphabet of `size` symbols starting at `first`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyAlphabet`] if `size` is zero,
    /// [`TrieError::AlphabetOverflow`] if the last symbol is not representable, and
    /// [`TrieError::WildcardInAlphabet`] if `wildcard` falls inside the range.
    pub fn new(first: C, size: usize, wildcard: C) -> Result<Self, TrieError<C>> {
        if size == 0 {
            return Err(TrieError::EmptyAlphabet);
        }
        // Every symbol in the range has to exist, not just the last one
        // (char codes skip the surrogate block).
        let start = first.code();
        let representable = u32::try_from(size - 1)
            .ok()
            .filter(|&span| start.checked_add(span).is_some())
            .is_some_and(|span| (0..=span).all(|i| C::from_code(start + i).is_some()));
        if !representable {
            return Err(TrieError::AlphabetOverflow { first, size });
        }
        let alphabet = Alphabet {
            first,
            size,
            wildcard,
        };
        if alphabet.offset(wildcard).is_some() {
            return Err(TrieError::WildcardInAlphabet(wildcard));
        }
        Ok(alphabet)
    }

    /// The first symbol of the range.
    #[inline]
    pub fn first(&self) -> C {
        self.first
    }

    /// Number of symbols, and the number of child slots per node.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The symbol matching any single alphabet symbol in a query expression.
    #[inline]
    pub fn wildcard(&self) -> C {
        self.wildcard
    }

    /// Returns the child slot for `symbol`, or `None` if it is outside the alphabet.
    #[inline]
    pub fn offset(&self, symbol: C) -> Option<usize> {
        let offset = symbol.code().checked_sub(self.first.code())? as usize;
        (offset < self.size).then_some(offset)
    }

    /// Returns the symbol stored in child slot `offset`.
    #[inline]
    pub fn symbol(&self, offset: usize) -> Option<C> {
        if offset >= self.size {
            return None;
        }
        C::from_code(self.first.code() + offset as u32)
    }

    /// True if `symbol` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, symbol: C) -> bool {
        self.offset(symbol).is_some()
    }
}

impl Alphabet<char> {
    /// The lowercase English alphabet `a..=z` with `?` as wildcard.
    pub fn lowercase() -> Self {
        Alphabet {
            first: 'a',
            size: ENGLISH_ALPHABET_SIZE,
            wildcard: DEFAULT_WILDCARD,
        }
    }

    /// The first `size` lowercase letters starting at `a`, with `?` as wildcard.
    ///
    /// Sizes above 26 run past `z` into the following code points.
    pub fn with_size(size: usize) -> Result<Self, TrieError<char>> {
        Alphabet::new('a', size, DEFAULT_WILDCARD)
    }
}

impl Default for Alphabet<char> {
    fn default() -> Self {
        Alphabet::lowercase()
    }
}
