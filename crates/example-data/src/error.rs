//! Error types for the example-data crate.
//!
//! Semantic error enums for roster generation, following the project's error
//! handling conventions with `thiserror`.

use thiserror::Error;

/// Errors that can occur during roster generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a usable person name after maximum retries.
    ///
    /// A name is usable when it yields a non-empty email local part once
    /// stripped down to mailbox-safe characters.
    #[error("failed to generate a usable person name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
