//! Character sets for random password generation.
use serde::{Deserialize, Serialize};

/// Lowercase roman letters.
pub const ROMAN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase roman letters.
pub const ROMAN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numerical digits.
pub const DIGITS: &str = "0123456789";

/// Printable ASCII punctuation characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Feature flags used to compose an alphabet.
///
/// Lowercase letters are always present; the flags
/// widen the alphabet from there.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CharacterSet {
    /// Include uppercase letters.
    pub include_capitalization: bool,
    /// Include numerical digits.
    pub include_numbers: bool,
    /// Include ASCII punctuation.
    pub include_symbols: bool,
}

impl CharacterSet {
    /// Lowercase letters only.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set whether uppercase letters are included.
    pub fn capitalization(mut self, value: bool) -> Self {
        self.include_capitalization = value;
        self
    }

    /// Set whether digits are included.
    pub fn numbers(mut self, value: bool) -> Self {
        self.include_numbers = value;
        self
    }

    /// Set whether punctuation is included.
    pub fn symbols(mut self, value: bool) -> Self {
        self.include_symbols = value;
        self
    }

    /// Compose the alphabet for these flags.
    ///
    /// The result is never empty.
    pub fn alphabet(&self) -> Vec<char> {
        // Capitalization replaces the base set rather than
        // extending it, which yields the same letters in a
        // fixed order.
        let mut source = if self.include_capitalization {
            format!("{}{}", ROMAN_LOWER, ROMAN_UPPER)
        } else {
            ROMAN_LOWER.to_owned()
        };
        if self.include_numbers {
            source.push_str(DIGITS);
        }
        if self.include_symbols {
            source.push_str(PUNCTUATION);
        }
        source.chars().collect()
    }
}
