use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.txt");

#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    /// The source was readable but contained no usable words. The games cannot
    /// run against an empty dictionary, so this is fatal rather than silent.
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListError::Io(e) => write!(f, "failed to read word list: {e}"),
            WordListError::Empty => write!(f, "word list contains no words"),
        }
    }
}

impl Error for WordListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WordListError::Io(e) => Some(e),
            WordListError::Empty => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        WordListError::Io(e)
    }
}

/// Parses a word list from text. Words may be one per line or whitespace
/// separated on a single line; they are lowercased on load and anything that
/// is not purely alphabetic is dropped.
pub fn load_words_from_str(data: &str) -> HashSet<String> {
    data.split_whitespace()
        .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|token| token.to_lowercase())
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, WordListError> {
    let data = fs::read_to_string(path)?;
    let words = load_words_from_str(&data);
    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_words_one_per_line() {
        let words = load_words_from_str("apple\nbanana\ncherry\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("apple"));
        assert!(words.contains("cherry"));
    }

    #[test]
    fn test_load_words_single_line() {
        // The hangman word list format: everything on one line.
        let words = load_words_from_str("apple banana cherry");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_load_words_normalizes_case() {
        let words = load_words_from_str("Apple BANANA\n");
        assert!(words.contains("apple"));
        assert!(words.contains("banana"));
    }

    #[test]
    fn test_load_words_drops_non_alphabetic_tokens() {
        let words = load_words_from_str("apple 123 ban-ana pear\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("apple"));
        assert!(words.contains("pear"));
    }

    #[test]
    fn test_load_words_trims_whitespace() {
        let words = load_words_from_str("  apple  \n\n  pear\t\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_load_words_from_missing_file_is_io_error() {
        let err = load_words_from_file("/no/such/wordlist.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io(_)));
    }

    #[test]
    fn test_embedded_wordlist_loads() {
        let words = load_words_from_str(EMBEDDED_WORDLIST);
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
