use crate::{
    charset::DIGITS, generator::sample_chars, Error, PasswordGenerator,
    Result,
};
use rand::RngCore;

/// Generates numeric PIN codes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PinCodeGenerator {
    length: usize,
    digits: Vec<char>,
}

impl PinCodeGenerator {
    /// Default number of digits.
    pub const DEFAULT_LENGTH: usize = 4;

    /// Create a PIN code generator.
    ///
    /// A negative length is rejected with
    /// [Error::InvalidConfiguration].
    pub fn new(length: i64) -> Result<Self> {
        let length = Error::check_count("length", length)?;
        Ok(Self {
            length,
            digits: DIGITS.chars().collect(),
        })
    }

    /// Number of digits in each PIN code.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator yields empty PIN codes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PinCodeGenerator {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            digits: DIGITS.chars().collect(),
        }
    }
}

impl PasswordGenerator for PinCodeGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        tracing::debug!(length = self.length, "pin::generate");
        sample_chars(rng, &self.digits, self.length)
    }
}
