#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! PIN code, random and memorable password generators.
//!
//! Every strategy implements the [PasswordGenerator] trait so
//! callers can pick a generator at runtime and call
//! [PasswordGenerator::generate] repeatedly.
//!
//! ```
//! use passgen_password::{PasswordGenerator, PinCodeGenerator};
//!
//! let pin = PinCodeGenerator::new(6).unwrap().generate();
//! assert_eq!(6, pin.len());
//! ```

pub mod charset;
pub mod config;
mod error;
mod generator;
mod memorable;
mod pin;
mod random;
pub mod vocabulary;

pub use config::GeneratorConfig;
pub use error::Error;
pub use generator::PasswordGenerator;
pub use memorable::MemorablePasswordGenerator;
pub use pin::PinCodeGenerator;
pub use random::{RandomPasswordGenerator, MESSAGE_PREFIX};
pub use vocabulary::{VocabularySource, WordFile};

pub use zxcvbn;

/// Default random source.
///
/// `OsRng` holds no state so it is safe to share between
/// threads; callers that need reproducible output should
/// pass their own generator to
/// [PasswordGenerator::generate_with] instead.
pub fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Measure the entropy in a password.
pub fn measure_entropy(
    password: &str,
    user_inputs: &[&str],
) -> zxcvbn::Entropy {
    zxcvbn::zxcvbn(password, user_inputs)
}
