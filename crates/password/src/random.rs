use crate::{
    charset::CharacterSet, generator::sample_chars, Error, PasswordGenerator,
    Result,
};
use rand::RngCore;

/// Text placed before the secret by
/// [RandomPasswordGenerator::generate_with].
pub const MESSAGE_PREFIX: &str = "your password is ";

/// Generates passwords from a composed alphabet.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RandomPasswordGenerator {
    length: usize,
    characters: CharacterSet,
    alphabet: Vec<char>,
}

impl RandomPasswordGenerator {
    /// Default password length.
    pub const DEFAULT_LENGTH: usize = 8;

    /// Create a generator using lowercase letters.
    ///
    /// A negative length is rejected with
    /// [Error::InvalidConfiguration].
    pub fn new(length: i64) -> Result<Self> {
        let length = Error::check_count("length", length)?;
        Ok(Self::from_parts(length, CharacterSet::new()))
    }

    /// Create a generator for a character set.
    pub fn with_characters(
        length: i64,
        characters: CharacterSet,
    ) -> Result<Self> {
        let length = Error::check_count("length", length)?;
        Ok(Self::from_parts(length, characters))
    }

    fn from_parts(length: usize, characters: CharacterSet) -> Self {
        Self {
            length,
            alphabet: characters.alphabet(),
            characters,
        }
    }

    /// Include uppercase letters.
    pub fn capitalization(self, value: bool) -> Self {
        let characters = self.characters.capitalization(value);
        Self::from_parts(self.length, characters)
    }

    /// Include numerical digits.
    pub fn numbers(self, value: bool) -> Self {
        let characters = self.characters.numbers(value);
        Self::from_parts(self.length, characters)
    }

    /// Include ASCII punctuation.
    pub fn symbols(self, value: bool) -> Self {
        let characters = self.characters.symbols(value);
        Self::from_parts(self.length, characters)
    }

    /// Length of the generated secret.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character set flags.
    pub fn characters(&self) -> &CharacterSet {
        &self.characters
    }

    /// Alphabet the secret is drawn from.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Generate the secret without the message prefix.
    pub fn secret_with(&self, rng: &mut dyn RngCore) -> String {
        tracing::debug!(
            length = self.length,
            alphabet = self.alphabet.len(),
            "random::generate"
        );
        sample_chars(rng, &self.alphabet, self.length)
    }

    /// Generate the secret without the message prefix using
    /// the default random source.
    pub fn secret(&self) -> String {
        let mut rng = crate::csprng();
        self.secret_with(&mut rng)
    }
}

impl Default for RandomPasswordGenerator {
    fn default() -> Self {
        Self::from_parts(Self::DEFAULT_LENGTH, CharacterSet::new())
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        format!("{}{}", MESSAGE_PREFIX, self.secret_with(rng))
    }
}
