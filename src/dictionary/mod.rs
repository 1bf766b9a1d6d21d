use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Shortest word admitted into a dictionary
pub const MIN_WORD_LENGTH: usize = 3;

/// A set of upper-case, purely alphabetic words of at least [`MIN_WORD_LENGTH`] letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw words, dropping any that fail admission
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| Self::admit(word.as_ref()))
            .collect();

        Self { words }
    }

    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let dictionary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Create an empty dictionary
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Normalize a raw word, or `None` if it is too short or not purely alphabetic.
    /// Surrounding whitespace is trimmed first, so `" art"` is admitted as `ART`.
    fn admit(raw: &str) -> Option<String> {
        let word = raw.trim().to_uppercase();
        if word.chars().count() < MIN_WORD_LENGTH || !word.chars().all(char::is_alphabetic) {
            return None;
        }
        Some(word)
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
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
