//! Command line interface for the passgen generators.

/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "passgen";

pub mod cli;
pub mod commands;
mod error;

pub use error::Error;
pub use passgen_cli_helpers::CommandTree;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, error::Error>;
