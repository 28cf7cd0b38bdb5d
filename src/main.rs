use std::io::{self, Write};

use anyhow::{Context, Result};
use structopt::clap::AppSettings;
use structopt::StructOpt;

use spellchecker::{FileFormat, Wordlist};

/// The word list, one word per line, read from the working directory.
const DICT_PATH: &str = "words_alpha.txt";

/// Check a word against the dictionary or suggest one-letter fixes.
#[derive(StructOpt, Debug, PartialEq)]
#[structopt(name = "spellchecker", setting = AppSettings::DisableHelpSubcommand)]
enum Cli {
    /// Print "correct" if the word is in the dictionary, "incorrect" otherwise
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Check {
        #[structopt(allow_hyphen_values = true)]
        word: String,
    },
    /// Print every word formed by appending one letter
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Complete {
        #[structopt(allow_hyphen_values = true)]
        word: String,
    },
    /// Print every word formed by changing one letter
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Correct {
        #[structopt(allow_hyphen_values = true)]
        word: String,
    },
}

fn run<W: Write>(args: &Cli, wl: &Wordlist, out: &mut W) -> io::Result<()> {
    match args {
        Cli::Check { word } => {
            writeln!(out, "{}", if wl.is_word(word) { "correct" } else { "incorrect" })?;
        }
        Cli::Complete { word } => {
            for completion in wl.one_char_completions(word) {
                writeln!(out, "{}", completion)?;
            }
        }
        Cli::Correct { word } => {
            for correction in wl.one_char_corrections(word) {
                writeln!(out, "{}", correction)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Cli::from_args();

    let wl = Wordlist::from_file(DICT_PATH, FileFormat::default())
        .with_context(|| format!("could not load dictionary {}", DICT_PATH))?;

    let stdout = io::stdout();
    run(&args, &wl, &mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use structopt::clap::ErrorKind;
    use structopt::StructOpt;

    use spellchecker::Wordlist;

    use crate::{run, Cli};

    fn output(args: &[&str]) -> String {
        let wl = Wordlist::from_words(vec!["cat", "bat", "cot", "cats", "car"]);
        let cli = Cli::from_iter_safe(args).unwrap();
        let mut out = Vec::new();
        run(&cli, &wl, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// A rejection that `clap::Error::exit` reports with status 1.
    fn is_usage_error(args: &[&str]) -> bool {
        match Cli::from_iter_safe(args) {
            Ok(_) => false,
            Err(e) => e.kind != ErrorKind::HelpDisplayed && e.kind != ErrorKind::VersionDisplayed,
        }
    }

    #[test]
    fn parses_command_and_word() {
        assert_eq!(Cli::from_iter_safe(&["spellchecker", "check", "cat"]).unwrap(),
                   Cli::Check { word: "cat".to_string() });
        assert_eq!(Cli::from_iter_safe(&["spellchecker", "complete", "ca"]).unwrap(),
                   Cli::Complete { word: "ca".to_string() });
        assert_eq!(Cli::from_iter_safe(&["spellchecker", "correct", "cst"]).unwrap(),
                   Cli::Correct { word: "cst".to_string() });
    }

    #[test]
    fn words_may_start_with_a_hyphen() {
        assert_eq!(Cli::from_iter_safe(&["spellchecker", "check", "-x"]).unwrap(),
                   Cli::Check { word: "-x".to_string() });
        assert_eq!(output(&["spellchecker", "check", "-x"]), "incorrect\n");
    }

    #[test]
    fn wrong_argument_count_is_a_usage_error() {
        assert!(is_usage_error(&["spellchecker"]));
        assert!(is_usage_error(&["spellchecker", "check"]));
        assert!(is_usage_error(&["spellchecker", "check", "cat", "dog"]));
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        assert!(is_usage_error(&["spellchecker", "bogus", "cat"]));
        assert!(is_usage_error(&["spellchecker", "help", "check"]));
    }

    #[test]
    fn check_prints_correct_or_incorrect() {
        assert_eq!(output(&["spellchecker", "check", "cat"]), "correct\n");
        assert_eq!(output(&["spellchecker", "check", "Cat"]), "correct\n");
        assert_eq!(output(&["spellchecker", "check", "ca"]), "incorrect\n");
        assert_eq!(output(&["spellchecker", "check", "c4t"]), "incorrect\n");
    }

    #[test]
    fn complete_prints_one_word_per_line() {
        assert_eq!(output(&["spellchecker", "complete", "ca"]), "car\ncat\n");
        assert_eq!(output(&["spellchecker", "complete", "dog"]), "");
    }

    #[test]
    fn correct_replaces_any_position() {
        // Not only the last letter: "bat" and "cot" change earlier positions.
        assert_eq!(output(&["spellchecker", "correct", "cat"]), "bat\ncot\ncar\n");
        assert_eq!(output(&["spellchecker", "correct", "zzz"]), "");
    }
}
