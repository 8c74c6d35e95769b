//! Word list loading utilities
//!
//! A word list file holds one word per line. Blank lines are skipped and
//! surrounding whitespace is ignored; any other malformed line rejects the
//! whole file.

use std::fs;
use std::path::Path;

use log::debug;

use super::{WordList, parse_entry};
use crate::error::{GameError, Result};

/// Load a word list from a file
///
/// # Errors
///
/// - `GameError::WordListIo` if the file cannot be read
/// - `GameError::MalformedWordList` for the first line that is not a word
/// - `GameError::EmptyWordList` if the file has no words
///
/// # Examples
/// ```no_run
/// use wordle_round::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordListIo {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content)?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse the contents of a word list file
///
/// # Errors
///
/// Same as [`load_from_file`], minus I/O errors.
pub fn parse_word_list(content: &str) -> Result<WordList> {
    let words = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| parse_entry(number, line))
        .collect::<Result<Vec<_>>>()?;

    WordList::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_word_per_line() {
        let words = parse_word_list("apple\ncrane\nmoist\n").unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words.words()[1].text(), "crane");
    }

    #[test]
    fn skips_blank_lines_and_trims() {
        let words = parse_word_list("\n  apple  \n\r\n\tcrane\r\n\n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.words()[0].text(), "apple");
    }

    #[test]
    fn malformed_line_reports_file_line_number() {
        let err = parse_word_list("apple\n\ncrane\nbanana\n").unwrap_err();
        assert!(matches!(
            err,
            GameError::MalformedWordList { line: 4, ref word, .. } if word == "banana"
        ));
    }

    #[test]
    fn blank_file_is_empty_list() {
        assert!(matches!(
            parse_word_list("\n \n"),
            Err(GameError::EmptyWordList)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/word/list.txt").unwrap_err();
        assert!(matches!(err, GameError::WordListIo { .. }));
        assert!(err.to_string().contains("/nonexistent/word/list.txt"));
    }

    #[test]
    fn loads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("wordle_round_{}.txt", std::process::id()));
        fs::write(&path, "apple\ncrane\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }
}
