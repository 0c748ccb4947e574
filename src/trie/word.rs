use smallvec::SmallVec;

use super::symbol::TrieChar;

/// Inline capacity of a collected word before it spills to the heap.
pub(crate) const WORD_INLINE: usize = 32;

/// Symbols of one word, query pattern, letter multiset or scanned text.
pub type WordBuf<C> = SmallVec<[C; WORD_INLINE]>;

/// Input accepted wherever a [`Trie`](super::Trie) takes a sequence of symbols.
///
/// Text becomes `char` symbols; slices, vectors and arrays of any [`TrieChar`]
/// are copied as they are. Symbols are not checked against the alphabet here:
/// [`insert`](super::Trie::insert) rejects foreign symbols and the read-only
/// operations treat them as absent.
pub trait IntoWord<C: TrieChar> {
    /// Copies the sequence into a symbol buffer.
    fn collect_word(self) -> WordBuf<C>;
}

impl IntoWord<char> for &str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

// Dictionaries loaded as `Vec<String>` are inserted and queried by reference.
impl IntoWord<char> for &String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_slice(self)
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_vec(self)
    }
}

impl<C: TrieChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_slice(self)
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_slice(self)
    }
}

#[cfg(test)]
mod test {
    use super::super::tree::build_trie;
    use super::*;

    #[test]
    fn strings_collect_chars() {
        assert_eq!("abc".collect_word().as_slice(), &['a', 'b', 'c']);
        assert_eq!(String::from("xy").collect_word().as_slice(), &['x', 'y']);
        assert!("".collect_word().is_empty());
    }

    #[test]
    fn sequences_collect_symbols() {
        assert_eq!([1u8, 2, 3].collect_word().as_slice(), &[1, 2, 3]);
        assert_eq!(vec![7u16].collect_word().as_slice(), &[7]);
        let slice: &[u32] = &[4, 5];
        assert_eq!(slice.collect_word().as_slice(), &[4, 5]);
    }

    #[test]
    fn long_words_spill() {
        let long = "a".repeat(WORD_INLINE * 2);
        let word = long.as_str().collect_word();
        assert_eq!(word.len(), WORD_INLINE * 2);
        assert!(word.spilled());
    }

    #[test]
    fn owned_dictionary_is_used_by_reference() {
        let dictionary: Vec<String> = ["ant", "anthem"].map(String::from).to_vec();
        let trie = build_trie(&dictionary).unwrap();
        for word in &dictionary {
            assert!(trie.contains(word));
        }
        assert_eq!(trie.starts_with(&dictionary[0]), dictionary);
    }
}
