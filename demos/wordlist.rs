//! Example: a word-game helper built on a Trie.
//!
//! Loads a small wordlist, then runs each kind of query against it: lookups,
//! prefix completion, crossword-style wildcard patterns, anagrams, and scanning
//! a string of letters for hidden words.
//!
//! Run with: cargo run --example wordlist
//! Set RUST_LOG=libtrie=debug to see the library's log events.

use libtrie::trie::tree::build_trie;
use libtrie::{Trie, TrieError};
use tracing_subscriber::EnvFilter;

const WORDS: [&str; 14] = [
    "bake", "baked", "baker", "cake", "caked", "fake", "lake", "dare", "dear", "read", "are",
    "red", "ear", "era",
];

fn report(title: &str, words: &[String]) {
    println!("{title}: {}", words.join(", "));
}

fn main() -> Result<(), TrieError<char>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut trie: Trie<char> = build_trie(WORDS)?;
    println!("{} words in {} nodes", trie.len(), trie.node_count());

    println!("\nWord lookup:");
    for word in ["bake", "baker", "bakes", "cake", "lake", "make"] {
        println!("  {word}: {}", if trie.contains(word) { "yes" } else { "no" });
    }

    println!();
    for prefix in ["ba", "cak", "ma"] {
        report(&format!("Completions of {prefix}*"), &trie.starts_with(prefix));
    }

    println!();
    for pattern in ["?ake", "?a?ed", "?e?"] {
        report(&format!("Pattern {pattern}"), &trie.query(pattern));
    }

    println!();
    report("Anagrams of a e r d", &trie.permute(['a', 'e', 'r', 'd']));

    trie.build_automaton();
    println!();
    for text in ["bakedearth", "fakerlake"] {
        let found: Vec<String> = trie
            .find_iter(text.chars())?
            .map(|m| format!("{}@{}..{}", trie.word(m.node), m.start, m.end))
            .collect();
        report(&format!("Hidden in {text}"), &found);
    }

    Ok(())
}
