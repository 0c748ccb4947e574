use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in a [`Trie`](super::Trie).
///
/// Implemented for `char`, `u8`, `u16` and `u32`.
///
/// - `Copy`: child slots and queries handle symbols by value
/// - `Eq + Ord + Hash`: comparing symbols and using them as keys
/// - `Debug`: error messages and debug printing of nodes
///
/// The alphabet maps symbols onto child slots through [`code`](TrieChar::code),
/// so a symbol type must have a contiguous integer encoding.
pub trait TrieChar: Copy + Eq + Ord + Hash + Debug {
    /// The owned sequence type produced when a word is reconstructed from the trie.
    type Word: FromIterator<Self> + Clone + Debug + Eq + Ord + Hash;

    /// Returns the integer code of this symbol.
    fn code(self) -> u32;

    /// Returns the symbol with the given code, or `None` if the code is not a valid symbol.
    fn from_code(code: u32) -> Option<Self>;
}

impl TrieChar for char {
    type Word = String;

    #[inline]
    fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_code(code: u32) -> Option<Self> {
        char::from_u32(code)
    }
}

macro_rules! impl_trie_char_for_int {
    ($($ty:ty),*) => {
        $(
            impl TrieChar for $ty {
                type Word = Vec<$ty>;

                #[inline]
                fn code(self) -> u32 {
                    u32::from(self)
                }

                #[inline]
                fn from_code(code: u32) -> Option<Self> {
                    <$ty>::try_from(code).ok()
                }
            }
        )*
    };
}

impl_trie_char_for_int!(u8, u16, u32);
