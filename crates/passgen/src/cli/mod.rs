//! Command line argument parsers.
pub mod passgen;
