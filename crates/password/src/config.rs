//! Serializable generator configuration.
//!
//! A [GeneratorConfig] is plain data, it can be stored in a
//! profile file and turned into a boxed [PasswordGenerator]
//! with [GeneratorConfig::build].
use crate::{
    charset::CharacterSet, MemorablePasswordGenerator, PasswordGenerator,
    PinCodeGenerator, RandomPasswordGenerator, Result, VocabularySource,
};
use serde::{Deserialize, Serialize};

/// Configuration for one of the generator strategies.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeneratorConfig {
    /// Numeric PIN codes.
    Pin(PinConfig),
    /// Random characters.
    Random(RandomConfig),
    /// Words from a vocabulary.
    Memorable(MemorableConfig),
}

/// Configuration for a PIN code generator.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    /// Number of digits.
    pub length: i64,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            length: PinCodeGenerator::DEFAULT_LENGTH as i64,
        }
    }
}

/// Configuration for a random password generator.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Number of characters.
    pub length: i64,
    /// Character set flags.
    #[serde(flatten)]
    pub characters: CharacterSet,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: RandomPasswordGenerator::DEFAULT_LENGTH as i64,
            characters: Default::default(),
        }
    }
}

/// Configuration for a memorable password generator.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MemorableConfig {
    /// Number of words.
    pub word_count: i64,
    /// Separator between words.
    pub separator: String,
    /// Convert words to uppercase.
    pub capitalize: bool,
    /// Inline vocabulary.
    ///
    /// When absent the vocabulary source given to
    /// [GeneratorConfig::build] is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,
}

impl Default for MemorableConfig {
    fn default() -> Self {
        Self {
            word_count: MemorablePasswordGenerator::DEFAULT_WORD_COUNT as i64,
            separator: MemorablePasswordGenerator::DEFAULT_SEPARATOR
                .to_owned(),
            capitalize: false,
            vocabulary: None,
        }
    }
}

impl GeneratorConfig {
    /// Name of the strategy.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pin(_) => "pin",
            Self::Random(_) => "random",
            Self::Memorable(_) => "memorable",
        }
    }

    /// Build a generator from this configuration.
    ///
    /// The vocabulary source is only consulted for a memorable
    /// configuration without an inline vocabulary.
    pub fn build(
        &self,
        source: Option<&dyn VocabularySource>,
    ) -> Result<Box<dyn PasswordGenerator>> {
        tracing::debug!(kind = self.kind(), "config::build");
        let generator: Box<dyn PasswordGenerator> = match self {
            Self::Pin(config) => Box::new(PinCodeGenerator::new(config.length)?),
            Self::Random(config) => {
                Box::new(RandomPasswordGenerator::with_characters(
                    config.length,
                    config.characters,
                )?)
            }
            Self::Memorable(config) => {
                let generator = match (&config.vocabulary, source) {
                    (Some(words), _) => MemorablePasswordGenerator::new(
                        config.word_count,
                        words.clone(),
                    )?,
                    (None, Some(source)) => {
                        MemorablePasswordGenerator::from_source(
                            config.word_count,
                            source,
                        )?
                    }
                    (None, None) => MemorablePasswordGenerator::new(
                        config.word_count,
                        vec![],
                    )?,
                };
                Box::new(
                    generator
                        .separator(config.separator.clone())
                        .capitalize(config.capitalize),
                )
            }
        };
        Ok(generator)
    }
}

impl From<PinConfig> for GeneratorConfig {
    fn from(value: PinConfig) -> Self {
        Self::Pin(value)
    }
}

impl From<RandomConfig> for GeneratorConfig {
    fn from(value: RandomConfig) -> Self {
        Self::Random(value)
    }
}

impl From<MemorableConfig> for GeneratorConfig {
    fn from(value: MemorableConfig) -> Self {
        Self::Memorable(value)
    }
}
