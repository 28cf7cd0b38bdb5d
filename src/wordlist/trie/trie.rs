use std::fmt::{Debug, Formatter};

use log::warn;

use crate::alphabet::{get_idx, normalize};
use crate::error::SpellError;
use crate::wordlist::trie::node::TrieNode;

/// Alphabet-indexed prefix tree over the dictionary.
///
/// Built once with [`Trie::add`] and then only read, so a shared `&Trie`
/// can be queried from any number of threads.
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
        }
    }

    pub fn from_words<'f, I>(items: I) -> Self
        where I: IntoIterator<Item=&'f str> {
        let mut trie = Trie::new();
        trie.add_all(items);
        trie
    }

    /// Inserts `word`, skipping (with a warning) anything outside `a`-`z`.
    pub fn add(&mut self, word: &str) {
        if let Err(e) = self.try_add(word) {
            warn!("skipping word: {}", e);
        }
    }

    pub fn add_all<'f, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| self.add(x));
    }

    /// Inserts `word` after lowercasing it. Rejected words leave the trie
    /// untouched: no node is created unless every character has a slot.
    pub fn try_add(&mut self, word: &str) -> Result<(), SpellError> {
        let word = normalize(word);
        let idxs = match word.chars().map(get_idx).collect::<Option<Vec<usize>>>() {
            Some(idxs) => idxs,
            None => return Err(SpellError::OutOfAlphabet(word)),
        };

        let mut current = &mut self.root;
        for idx in idxs {
            current = current.get_or_create_child(idx);
        }
        current.is_terminal = true;
        Ok(())
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![(String::new(), &self.root)];
        while let Some((path, node)) = stack.pop() {
            if node.is_terminal {
                l.entry(&path);
            }
            let mut children: Vec<_> = node.into_iter().collect();
            children.reverse();
            for (c, child) in children {
                let mut child_path = path.clone();
                child_path.push(c);
                stack.push((child_path, child));
            }
        }
        l.finish()
    }
}
