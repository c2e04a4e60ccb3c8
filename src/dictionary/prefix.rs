//! Prefix index over the active dictionary
//!
//! A byte-trie answering "does any dictionary word start with this string"
//! in O(len) per query. Tile groups are multi-character, so the solver leans
//! on this to abandon a search branch the moment its accumulated prefix has
//! no possible completion.

use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
struct Node {
    children: FxHashMap<u8, u32>,
    terminal: bool,
}

/// Trie over a dictionary's word set
///
/// Built once per dictionary snapshot. Construction is O(total characters
/// across all words); both queries walk one node per input byte.
#[derive(Debug)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
}

impl PrefixIndex {
    /// Build an index over the given words
    pub fn new<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = Self {
            nodes: vec![Node::default()],
        };
        for word in words {
            index.insert(word);
        }
        index
    }

    fn insert(&mut self, word: &str) {
        let mut current = 0usize;
        for &byte in word.as_bytes() {
            current = match self.nodes[current].children.get(&byte) {
                Some(&next) => next as usize,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(byte, next as u32);
                    next
                }
            };
        }
        self.nodes[current].terminal = true;
    }

    /// Walk the trie along `s`, answering the reached node if any
    fn walk(&self, s: &str) -> Option<&Node> {
        let mut current = 0usize;
        for &byte in s.as_bytes() {
            current = *self.nodes[current].children.get(&byte)? as usize;
        }
        Some(&self.nodes[current])
    }

    /// Whether some indexed word starts with `s` (including `s` itself)
    ///
    /// The empty string is a prefix of every word.
    #[must_use]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.walk(s).is_some()
    }

    /// Whether `s` is itself a complete indexed word
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.walk(s).is_some_and(|node| node.terminal)
    }

    /// Number of trie nodes, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> PrefixIndex {
        PrefixIndex::new(["cat", "cart", "question", "quest", "aa"])
    }

    #[test]
    fn is_prefix_accepts_partial_words() {
        let index = index();
        assert!(index.is_prefix("c"));
        assert!(index.is_prefix("ca"));
        assert!(index.is_prefix("car"));
        assert!(index.is_prefix("ques"));
        assert!(index.is_prefix("questio"));
    }

    #[test]
    fn is_prefix_accepts_complete_words() {
        let index = index();
        assert!(index.is_prefix("cat"));
        assert!(index.is_prefix("question"));
    }

    #[test]
    fn is_prefix_rejects_dead_ends() {
        let index = index();
        assert!(!index.is_prefix("cb"));
        assert!(!index.is_prefix("questions"));
        assert!(!index.is_prefix("z"));
    }

    #[test]
    fn empty_string_is_always_a_prefix() {
        assert!(index().is_prefix(""));
        assert!(PrefixIndex::new([]).is_prefix(""));
    }

    #[test]
    fn is_word_requires_terminal() {
        let index = index();
        assert!(index.is_word("cat"));
        assert!(index.is_word("quest"));
        assert!(index.is_word("question"));
        // Prefixes of words are not words themselves
        assert!(!index.is_word("ca"));
        assert!(!index.is_word("ques"));
        assert!(!index.is_word(""));
        assert!(!index.is_word("zebra"));
    }

    #[test]
    fn nested_words_both_recognized() {
        let index = PrefixIndex::new(["in", "inn", "inning"]);
        assert!(index.is_word("in"));
        assert!(index.is_word("inn"));
        assert!(index.is_word("inning"));
        assert!(index.is_prefix("inni"));
        assert!(!index.is_word("inni"));
    }

    #[test]
    fn node_count_bounded_by_total_chars() {
        let index = index();
        // Root plus at most one node per inserted character
        assert!(index.node_count() <= 1 + "catcartquestionquestaa".len());
        // Shared prefixes collapse: "cat"/"cart" share "ca"
        assert!(index.node_count() < 1 + "catcartquestionquestaa".len());
    }
}
