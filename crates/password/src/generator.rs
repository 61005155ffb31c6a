use rand::RngCore;
use secrecy::SecretString;

/// Common interface for every password strategy.
///
/// Implementations are configured at construction and
/// keep no state between calls, each call produces an
/// independent secret.
pub trait PasswordGenerator: Send + Sync {
    /// Generate a secret drawing randomness from `rng`.
    fn generate_with(&self, rng: &mut dyn RngCore) -> String;

    /// Generate a secret using the default random source.
    fn generate(&self) -> String {
        let mut rng = crate::csprng();
        self.generate_with(&mut rng)
    }

    /// Generate a secret wrapped so that it is redacted
    /// from debug output.
    fn generate_secret(&self) -> SecretString {
        SecretString::from(self.generate())
    }

    /// Generate multiple secrets.
    fn many(&self, count: usize) -> Vec<String> {
        let mut rng = crate::csprng();
        (0..count).map(|_| self.generate_with(&mut rng)).collect()
    }
}

/// Draw `length` characters from `alphabet` with replacement.
pub(crate) fn sample_chars(
    rng: &mut dyn RngCore,
    alphabet: &[char],
    length: usize,
) -> String {
    use rand::seq::SliceRandom;
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        if let Some(c) = alphabet.choose(&mut *rng) {
            password.push(*c);
        }
    }
    password
}
