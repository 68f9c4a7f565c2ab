//! Friedman test: key-length estimation via index of coincidence.
//!
//! For the true key length (or one of its divisors), each interleaved
//! column is effectively a Caesar cipher of natural-language text, so its
//! index of coincidence sits near the English value (~0.067). Wrong key
//! lengths mix alphabets and push the columns toward the uniform value
//! (~0.038). Scanning candidate lengths and taking the highest average
//! column IC therefore picks out the key length.

use serde::Serialize;

use crate::alphabet::{letter_index, ALPHABET_LEN};
use crate::error::AnalysisError;

/// Default upper bound of the key-length search range.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Average index of coincidence per candidate key length.
///
/// `scores[k - 1]` is the average column IC for key length k; candidates
/// run from 1 to `scores.len()` inclusive.
#[derive(Debug, Clone, Serialize)]
pub struct IcTable {
    /// Average column IC, indexed by candidate key length minus one.
    pub scores: Vec<f64>,
}

impl IcTable {
    /// Returns the average IC for candidate key length `k`, if in range.
    pub fn score(&self, k: usize) -> Option<f64> {
        if k == 0 {
            return None;
        }
        self.scores.get(k - 1).copied()
    }

    /// Iterates `(key_length, average_ic)` pairs in increasing key length.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().copied().enumerate().map(|(i, s)| (i + 1, s))
    }
}

/// Computes the index of coincidence of a text: the probability that two
/// distinct positions hold the same letter, Σ f·(f−1) / (M·(M−1)).
///
/// Defined as 0 for texts shorter than two letters so that downstream
/// comparisons stay total. Non A–Z bytes are ignored in the counts.
pub fn index_of_coincidence(text: &str) -> f64 {
    let mut counts = [0usize; ALPHABET_LEN];
    let mut total = 0usize;
    for &b in text.as_bytes() {
        if let Some(idx) = letter_index(b) {
            counts[idx] += 1;
            total += 1;
        }
    }

    if total <= 1 {
        return 0.0;
    }

    let coincidences: usize = counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
    coincidences as f64 / (total as f64 * (total - 1) as f64)
}

/// Extracts column `offset` of a `columns`-way interleaved split:
/// the characters at positions offset, offset + columns, offset + 2·columns, …
pub(crate) fn extract_column(cipher: &str, columns: usize, offset: usize) -> String {
    let bytes = cipher.as_bytes();
    let mut column = String::new();
    let mut i = offset;
    while i < bytes.len() {
        column.push(bytes[i] as char);
        i += columns;
    }
    column
}

/// Computes the average column IC for every candidate key length in
/// `1..=max_key_length`.
///
/// Empty columns (ciphertext shorter than the candidate length) contribute
/// IC = 0 to the unweighted mean; they are not skipped. An empty ciphertext
/// yields an all-zero table. Returns `InvalidConfiguration` if
/// `max_key_length` is zero.
pub fn estimate_key_length(
    cipher: &str,
    max_key_length: usize,
) -> Result<IcTable, AnalysisError> {
    if max_key_length == 0 {
        return Err(AnalysisError::InvalidConfiguration(
            "max key length must be at least 1".to_string(),
        ));
    }

    let mut scores = Vec::with_capacity(max_key_length);
    for k in 1..=max_key_length {
        let total: f64 = (0..k)
            .map(|offset| index_of_coincidence(&extract_column(cipher, k, offset)))
            .sum();
        scores.push(total / k as f64);
    }

    Ok(IcTable { scores })
}

/// Picks the most likely key length from an IC table: the candidate with
/// the highest average IC, preferring the smallest length on ties.
///
/// An all-zero table (empty ciphertext) yields 1.
pub fn best_key_length(table: &IcTable) -> usize {
    let mut best_k = 1;
    let mut best_score = f64::NEG_INFINITY;
    for (k, score) in table.iter() {
        if score > best_score {
            best_score = score;
            best_k = k;
        }
    }
    best_k
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_ic_uniform_text() {
        // All distinct letters: no coincidences
        assert!(index_of_coincidence("ABCDEFG").abs() < EPSILON);
    }

    #[test]
    fn test_ic_single_letter_text() {
        // All identical: every pair coincides
        assert!((index_of_coincidence("AAAA") - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ic_degenerate_lengths() {
        assert_eq!(index_of_coincidence(""), 0.0);
        assert_eq!(index_of_coincidence("A"), 0.0);
    }

    #[test]
    fn test_ic_with_absent_letters() {
        // Most letters have count 0; only 'E' pairs coincide:
        // f_E = 2, f_X = 1, IC = 2 / (3 * 2)
        let ic = index_of_coincidence("EEX");
        assert!((ic - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_ic_known_value() {
        // "AABB": f_A = f_B = 2, IC = (2 + 2) / (4 * 3)
        let ic = index_of_coincidence("AABB");
        assert!((ic - 4.0 / 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_extract_column() {
        assert_eq!(extract_column("ABCDEF", 2, 0), "ACE");
        assert_eq!(extract_column("ABCDEF", 2, 1), "BDF");
        assert_eq!(extract_column("ABCDE", 3, 2), "C");
        assert_eq!(extract_column("", 3, 0), "");
    }

    #[test]
    fn test_empty_cipher_all_zero_table() {
        let table = estimate_key_length("", 10).unwrap();
        assert_eq!(table.scores.len(), 10);
        assert!(table.scores.iter().all(|&s| s == 0.0));
        assert_eq!(best_key_length(&table), 1);
    }

    #[test]
    fn test_empty_columns_count_in_average() {
        // Two letters, k = 4: columns "A", "B", "", "" — all IC 0
        let table = estimate_key_length("AB", 4).unwrap();
        assert_eq!(table.score(4), Some(0.0));
        // k = 1: one column "AB", two distinct letters, IC 0
        assert_eq!(table.score(1), Some(0.0));
    }

    #[test]
    fn test_zero_max_key_length_rejected() {
        let err = estimate_key_length("ABC", 0).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_monoalphabetic_text_prefers_length_one() {
        // A strongly skewed single-alphabet text has high IC at k = 1;
        // ties at larger k resolve to the smaller candidate
        let table = estimate_key_length("AAAAABAAAABAAAAABAAB", 5).unwrap();
        assert_eq!(best_key_length(&table), 1);
    }

    #[test]
    fn test_tie_prefers_smaller_length() {
        // "AAAA" gives IC 1.0 for every k with non-trivial columns
        let table = estimate_key_length("AAAA", 2).unwrap();
        assert_eq!(table.score(1), Some(1.0));
        assert_eq!(table.score(2), Some(1.0));
        assert_eq!(best_key_length(&table), 1);
    }
}
