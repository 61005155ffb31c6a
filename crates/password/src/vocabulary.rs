//! Sources of words for memorable passwords.
//!
//! Acquiring a word corpus is left to the caller; the
//! memorable generator only consumes the list returned
//! by a [VocabularySource].
use crate::Result;
use std::path::{Path, PathBuf};

/// Supplies the words sampled by a memorable password generator.
pub trait VocabularySource {
    /// Load the list of words.
    fn vocabulary(&self) -> Result<Vec<String>>;
}

impl VocabularySource for Vec<String> {
    fn vocabulary(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }
}

impl VocabularySource for [&str] {
    fn vocabulary(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> VocabularySource for [&str; N] {
    fn vocabulary(&self) -> Result<Vec<String>> {
        self.as_slice().vocabulary()
    }
}

/// Newline delimited word file.
///
/// Lines are trimmed, blank lines and lines beginning
/// with `#` are ignored.
#[derive(Debug, Clone)]
pub struct WordFile {
    path: PathBuf,
}

impl WordFile {
    /// Word list shipped with most unix systems.
    pub const SYSTEM_DICTIONARY: &'static str = "/usr/share/dict/words";

    /// Create a word file source.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path to the word file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse words from the contents of a word file.
    pub fn parse(contents: &str) -> Vec<String> {
        contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect()
    }
}

impl VocabularySource for WordFile {
    fn vocabulary(&self) -> Result<Vec<String>> {
        let contents = std::fs::read_to_string(&self.path)?;
        let words = Self::parse(&contents);
        tracing::debug!(
            path = %self.path.display(),
            words = words.len(),
            "vocabulary::load"
        );
        Ok(words)
    }
}
