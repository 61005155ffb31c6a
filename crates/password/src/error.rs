use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a numeric configuration
    /// field is negative.
    #[error("invalid configuration, {field} must be a non-negative count (got {value})")]
    InvalidConfiguration {
        /// Name of the configuration field.
        field: &'static str,
        /// Value that was rejected.
        value: i64,
    },

    /// Error generated when a memorable password generator
    /// is created without any words to sample from.
    #[error("vocabulary is missing or empty")]
    MissingVocabulary,

    /// Errors generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Validate a count supplied as a signed integer.
    pub(crate) fn check_count(field: &'static str, value: i64) -> crate::Result<usize> {
        usize::try_from(value)
            .map_err(|_| Error::InvalidConfiguration { field, value })
    }
}
