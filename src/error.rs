//! Analysis error types.

use thiserror::Error;

/// Errors that can occur during cryptanalysis.
///
/// Degenerate inputs that have a defined fallback (empty columns, all-zero
/// IC tables) are handled inside the pipeline and never surface here.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Ciphertext normalizes to fewer than 3 letters; nothing to analyze.
    #[error("Ciphertext too short after normalization: {letters} letters (need at least 3)")]
    EmptyInput {
        /// Number of A–Z letters left after normalization.
        letters: usize,
    },

    /// A configuration bound is out of range (zero key length search,
    /// inverted Kasiski window, zero column count).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Decryption or encryption attempted with an unusable key.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Input exceeds the configured size guard for the O(N²) Kasiski scan.
    #[error("Input too large: {letters} letters exceeds the configured limit of {limit}")]
    InputTooLarge {
        /// Number of letters after normalization.
        letters: usize,
        /// Configured maximum.
        limit: usize,
    },
}
