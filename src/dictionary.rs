//! The word list every guess is drawn from.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::DictionaryError;
use crate::word::Word;

/// Where the command-line tool looks for its word list by default.
pub const DEFAULT_DICTIONARY_PATH: &str = "static/wordle_valid_words.txt";

/// The ordered list of legal guesses (and possible answers).
///
/// Built once, then shared read-only by reference with every solver and the
/// simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from `words`. Repeated words are dropped, keeping
    /// the first occurrence in place.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let total = words.len();
        let mut seen = HashSet::with_capacity(total);
        let words: Vec<Word> = words.into_iter().filter(|word| seen.insert(*word)).collect();
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        if words.len() < total {
            debug!("dropped {} duplicate words", total - words.len());
        }
        Ok(Self { words })
    }

    /// Parse whitespace-separated words, keeping their order.
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse()
                    .map_err(|source| DictionaryError::InvalidWord { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&text)?;
        debug!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
