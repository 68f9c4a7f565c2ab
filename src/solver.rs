//! Full cryptanalysis pipeline: normalize, examine, estimate, recover,
//! decrypt.
//!
//! Every stage is a pure function of its inputs; a run holds no state
//! across calls, so concurrent analyses of different ciphertexts need no
//! coordination.

use serde::Serialize;

use crate::alphabet::normalize;
use crate::cipher::decrypt;
use crate::error::AnalysisError;
use crate::friedman::{best_key_length, estimate_key_length, IcTable, DEFAULT_MAX_KEY_LENGTH};
use crate::kasiski::{
    analyze_kasiski, factor_counts, RepeatRecord, DEFAULT_MAX_WINDOW, DEFAULT_MIN_WINDOW,
};
use crate::recover::recover_key;

/// Minimum number of letters a ciphertext must normalize to.
pub const MIN_CIPHER_LETTERS: usize = 3;

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Upper bound of the Friedman key-length search (inclusive).
    pub max_key_length: usize,

    /// Shortest repeated substring the Kasiski stage looks for.
    pub kasiski_min_window: usize,

    /// Longest repeated substring the Kasiski stage looks for.
    pub kasiski_max_window: usize,

    /// Skip the Friedman estimate and use this key length directly.
    pub forced_key_length: Option<usize>,

    /// Optional cap on normalized input length. The Kasiski scan is O(N²),
    /// so callers exposed to untrusted input sizes can bound latency here.
    pub max_input_len: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            kasiski_min_window: DEFAULT_MIN_WINDOW,
            kasiski_max_window: DEFAULT_MAX_WINDOW,
            forced_key_length: None,
            max_input_len: None,
        }
    }
}

impl SolverConfig {
    /// Checks all bounds, reporting the first violation.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.max_key_length == 0 {
            return Err(AnalysisError::InvalidConfiguration(
                "max key length must be at least 1".to_string(),
            ));
        }
        if self.kasiski_min_window == 0 {
            return Err(AnalysisError::InvalidConfiguration(
                "Kasiski window size must be at least 1".to_string(),
            ));
        }
        if self.kasiski_min_window > self.kasiski_max_window {
            return Err(AnalysisError::InvalidConfiguration(format!(
                "Kasiski window bounds inverted: min {} > max {}",
                self.kasiski_min_window, self.kasiski_max_window
            )));
        }
        if self.forced_key_length == Some(0) {
            return Err(AnalysisError::InvalidConfiguration(
                "forced key length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Normalized ciphertext the analysis ran on.
    pub cipher: String,
    /// Repeated substrings and occurrence distances (advisory).
    pub repeats: RepeatRecord,
    /// Distance factor tallies, most common first (advisory).
    pub factor_counts: Vec<(usize, usize)>,
    /// Average IC per candidate key length.
    pub ic_table: IcTable,
    /// Key length the estimator settled on (or the forced one).
    pub key_length: usize,
    /// Recovered key, one letter per column.
    pub key: String,
    /// Decryption of the ciphertext under the recovered key.
    pub plaintext: String,
}

/// Runs the full pipeline on raw input text.
///
/// Normalizes the input, rejects it if fewer than 3 letters remain
/// (`EmptyInput`) or the configured size guard trips (`InputTooLarge`),
/// then runs the Kasiski examination, the Friedman estimate, per-column
/// key recovery, and decryption.
pub fn analyze(raw_text: &str, config: &SolverConfig) -> Result<AnalysisReport, AnalysisError> {
    config.validate()?;

    let cipher = normalize(raw_text);
    if cipher.len() < MIN_CIPHER_LETTERS {
        return Err(AnalysisError::EmptyInput {
            letters: cipher.len(),
        });
    }
    if let Some(limit) = config.max_input_len {
        if cipher.len() > limit {
            return Err(AnalysisError::InputTooLarge {
                letters: cipher.len(),
                limit,
            });
        }
    }

    let repeats = analyze_kasiski(&cipher, config.kasiski_min_window, config.kasiski_max_window)?;
    let factors = factor_counts(&repeats, config.max_key_length);

    let ic_table = estimate_key_length(&cipher, config.max_key_length)?;
    let key_length = match config.forced_key_length {
        Some(k) => k,
        None => best_key_length(&ic_table),
    };

    let key = recover_key(&cipher, key_length)?;
    let plaintext = decrypt(&cipher, &key)?;

    Ok(AnalysisReport {
        cipher,
        repeats,
        factor_counts: factors,
        ic_table,
        key_length,
        key,
        plaintext,
    })
}
