use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpellError {
    #[error("failed to read dictionary {path:?}: {source}")]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: no word column")]
    MalformedLine { line: usize },

    #[error("{0:?} contains characters outside a-z")]
    OutOfAlphabet(String),
}
