use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Result;

/// Capability answering whether a string is an accepted word.
pub trait WordSource {
    fn is_valid_word(&self, word: &str) -> bool;
}

/// The shipped word source: an in-memory set of uppercase words,
/// populated from a fixed list or a file.
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a file with one word per line. Entries are
    /// trimmed and uppercased; blank lines and single letters are
    /// dropped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| !word.is_empty() && word.len() >= 2)
            .collect();

        tracing::info!("Loaded {} words into dictionary", words.len());

        Ok(Self { words })
    }

    /// Build a dictionary from a fixed word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary. The probe is uppercased
    /// before lookup, so matching is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("TEST"));
    }

    #[test]
    fn test_from_words_uppercases_entries() {
        let dict = Dictionary::from_words(["casa", "Mesa"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("CASA"));
        assert!(dict.contains("mesa"));
        assert!(!dict.contains("silla"));
    }

    #[test]
    fn test_load_trims_and_filters_short_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  casa  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "a").unwrap();
        writeln!(file, "luna").unwrap();
        file.flush().unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("CASA"));
        assert!(dict.contains("LUNA"));
        assert!(!dict.contains("A"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(Dictionary::load("/nonexistent/words.txt").is_err());
    }
}
