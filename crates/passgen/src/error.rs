use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the command line interface.
#[derive(Debug, Error)]
pub enum Error {
    /// Profile file already exists.
    #[error("file {0} already exists, use --force to overwrite")]
    FileExists(PathBuf),

    /// Profile file does not exist.
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    /// Word file could not be read.
    #[error("could not read word file {0}: {1}")]
    WordFile(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Password(#[from] passgen_password::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDecode(#[from] toml::de::Error),

    #[error(transparent)]
    TomlEncode(#[from] toml::ser::Error),
}
