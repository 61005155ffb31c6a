//! Integration tests for the passgen generators live in `tests/`.
