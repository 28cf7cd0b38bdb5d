use log::trace;

use crate::alphabet::normalize;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    pub fn is_word(&self, word: &str) -> bool {
        self.get_node(&normalize(word))
            .map(|x| x.is_terminal)
            .unwrap_or(false)
    }

    /// Words formed by appending exactly one letter to `word`, ordered by
    /// the appended letter.
    pub fn one_char_completions(&self, word: &str) -> Vec<String> {
        let word = normalize(word);
        match self.get_node(&word) {
            Some(node) => Self::terminal_children(&word, node),
            None => vec![],
        }
    }

    /// Words formed by replacing the last letter of `word`. The original
    /// word is included when it is itself in the dictionary.
    pub fn one_char_end_corrections(&self, word: &str) -> Vec<String> {
        let mut prefix = normalize(word);
        if prefix.pop().is_none() {
            return vec![];
        }
        match self.get_node(&prefix) {
            Some(node) => Self::terminal_children(&prefix, node),
            None => vec![],
        }
    }

    /// Words that differ from `word` in exactly one position.
    ///
    /// Results are grouped by position, left to right, and ordered by the
    /// replacement letter within a position. They are not deduplicated.
    pub fn one_char_corrections(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = normalize(word).chars().collect();
        let mut results: Vec<String> = vec![];

        let mut prefix = Some(&self.root);
        for pos in 0..chars.len() {
            // Every longer prefix passes through this one.
            let Some(node) = prefix else { break };
            let original = chars[pos];
            let suffix = &chars[pos + 1..];

            for (c, child) in node {
                if c == original {
                    continue;
                }
                let matched = child.get_node(suffix.iter().copied())
                    .map(|x| x.is_terminal)
                    .unwrap_or(false);
                if matched {
                    let mut correction = chars.clone();
                    correction[pos] = c;
                    results.push(correction.into_iter().collect());
                }
            }
            prefix = node.get_child(original);
        }
        trace!("{} corrections for {:?}", results.len(), word);
        results
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        self.root.get_node(word.chars())
    }

    fn terminal_children(prefix: &str, node: &TrieNode) -> Vec<String> {
        node.into_iter()
            .filter(|(_, child)| child.is_terminal)
            .map(|(c, _)| {
                let mut word = prefix.to_string();
                word.push(c);
                word
            })
            .collect()
    }
}
