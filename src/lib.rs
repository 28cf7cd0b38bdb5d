pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use crate::error::SpellError;
pub use crate::wordlist::trie::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};
