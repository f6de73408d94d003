//! Word list consumed read-only by the application style heuristic.

use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

const BUILTIN_WORDS: &[&str] = &["literally", "all", "the", "words"];

/// Ordered, read-only sequence of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The small embedded dictionary used when no file is configured.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// Parses one word per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self::new(words)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let list = Self::parse(&text);
        debug!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
