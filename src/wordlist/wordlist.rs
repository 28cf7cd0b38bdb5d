use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{info, warn};
use rayon::prelude::*;
use typed_builder::TypedBuilder;

use crate::error::SpellError;
use crate::wordlist::trie::trie::Trie;

/// A dictionary loaded once and then queried.
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a word-list file. The default is one word per line.
#[derive(TypedBuilder, Debug)]
pub struct FileFormat {
    /// Split each line on this character and take the word from `word_column`.
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    /// Fail on the first unusable line instead of skipping it.
    #[builder(default)]
    strict: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

impl Wordlist {
    pub fn from_words<'f, I>(items: I) -> Wordlist
        where I: IntoIterator<Item=&'f str> {
        Wordlist { trie: Trie::from_words(items) }
    }

    /// Builds a wordlist from the file at `path`.
    ///
    /// A file that cannot be opened or decoded is an error; nothing is
    /// returned unless every line was read. Blank lines add the empty word.
    pub fn from_file<P: AsRef<Path>>(path: P, format: FileFormat) -> Result<Wordlist, SpellError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let load_error = |source| SpellError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        };

        let start = Instant::now();
        let file = File::open(path).map_err(load_error)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(load_error)?;
        info!("Reading took {:.3}s", start.elapsed().as_secs_f64());

        let start = Instant::now();
        let mut trie = Trie::new();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for (idx, line) in lines.iter().enumerate() {
            let added = match format.parse_line(line) {
                Some(word) => trie.try_add(word),
                None => Err(SpellError::MalformedLine { line: idx + 1 }),
            };
            match added {
                Ok(()) => count += 1,
                Err(e) if format.strict => return Err(e),
                Err(e) => {
                    warn!("{}:{}: skipping: {}", path.display(), idx + 1, e);
                    failures += 1;
                }
            }
        }

        info!("Built dictionary of {} words in {:.3}s [{} failures]",
              count, start.elapsed().as_secs_f64(), failures);
        Ok(Wordlist { trie })
    }

    delegate! {
        to self.trie {
            pub fn is_word(&self, word: &str) -> bool;
            pub fn one_char_completions(&self, word: &str) -> Vec<String>;
            pub fn one_char_end_corrections(&self, word: &str) -> Vec<String>;
            pub fn one_char_corrections(&self, word: &str) -> Vec<String>;
        }
    }

    /// Checks every word in parallel; the result lines up with `words`.
    pub fn check_all<S>(&self, words: &[S]) -> Vec<bool>
        where S: AsRef<str> + Sync {
        words.par_iter()
            .map(|word| self.trie.is_word(word.as_ref()))
            .collect()
    }
}
