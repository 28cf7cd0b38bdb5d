pub mod trie;
pub mod search;

mod node;
