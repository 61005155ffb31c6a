use crate::{Error, PasswordGenerator, Result, VocabularySource};
use rand::{seq::SliceRandom, RngCore};

/// Generates passwords by joining words drawn from a vocabulary.
///
/// Words that contain the separator are kept as they are,
/// so such a password cannot always be split back into the
/// words it was made from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemorablePasswordGenerator {
    word_count: usize,
    separator: String,
    capitalize: bool,
    vocabulary: Vec<String>,
}

impl MemorablePasswordGenerator {
    /// Default number of words.
    pub const DEFAULT_WORD_COUNT: usize = 5;

    /// Default separator between words.
    pub const DEFAULT_SEPARATOR: &'static str = "-";

    /// Create a memorable password generator.
    ///
    /// Fails with [Error::InvalidConfiguration] when the word
    /// count is negative and [Error::MissingVocabulary] when
    /// there are no words to sample from.
    pub fn new(word_count: i64, vocabulary: Vec<String>) -> Result<Self> {
        let word_count = Error::check_count("word_count", word_count)?;
        if vocabulary.is_empty() {
            return Err(Error::MissingVocabulary);
        }
        Ok(Self {
            word_count,
            separator: Self::DEFAULT_SEPARATOR.to_owned(),
            capitalize: false,
            vocabulary,
        })
    }

    /// Create a generator loading the words from a source.
    ///
    /// The source is read once, here.
    pub fn from_source<S>(word_count: i64, source: &S) -> Result<Self>
    where
        S: VocabularySource + ?Sized,
    {
        // Validate the count before touching the source
        Error::check_count("word_count", word_count)?;
        Self::new(word_count, source.vocabulary()?)
    }

    /// Create a generator with the default word count.
    pub fn with_vocabulary(vocabulary: Vec<String>) -> Result<Self> {
        Self::new(Self::DEFAULT_WORD_COUNT as i64, vocabulary)
    }

    /// Set the separator placed between words.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set whether words are converted to uppercase.
    pub fn capitalize(mut self, value: bool) -> Self {
        self.capitalize = value;
        self
    }

    /// Number of words in each password.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Separator placed between words.
    pub fn separator_str(&self) -> &str {
        &self.separator
    }

    /// Whether words are converted to uppercase.
    pub fn is_capitalized(&self) -> bool {
        self.capitalize
    }

    /// Words sampled by this generator.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

impl PasswordGenerator for MemorablePasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        tracing::debug!(
            word_count = self.word_count,
            vocabulary = self.vocabulary.len(),
            capitalize = self.capitalize,
            "memorable::generate"
        );
        let mut words = Vec::with_capacity(self.word_count);
        for _ in 0..self.word_count {
            if let Some(word) = self.vocabulary.choose(&mut *rng) {
                if self.capitalize {
                    words.push(word.to_uppercase());
                } else {
                    words.push(word.clone());
                }
            }
        }
        words.join(self.separator.as_str())
    }
}
