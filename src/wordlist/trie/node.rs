use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, letter, ALPHABET};

/// One prefix in the trie. Children are owned exclusively by their parent.
#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        get_idx(c).and_then(|idx| self.children[idx].as_deref())
    }

    /// `idx` comes from [`get_idx`], so it is always in range.
    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(Default::default)
    }

    /// Follows `word` from this node, one letter at a time.
    pub(crate) fn get_node<I>(&self, word: I) -> Option<&TrieNode>
        where I: IntoIterator<Item=char> {
        let mut current = self;
        for c in word {
            current = current.get_child(c)?;
        }
        Some(current)
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.into_iter()
                .map(|(c, _)| c)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Walks the present children of a node in alphabetical order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.node.children.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.children[idx].as_deref() {
                return Some((letter(idx), child));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}
