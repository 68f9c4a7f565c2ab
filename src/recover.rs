//! Key recovery via per-column frequency analysis.
//!
//! Once the key length is known, each column of the interleaved split is a
//! Caesar cipher. The classical pen-and-paper heuristic recovers each shift
//! by assuming the column's most frequent letter is the encryption of 'E'.
//! Skewed columns (short ciphertexts, non-English plaintext) can fool it;
//! that is expected behavior for this technique, not an error.

use crate::alphabet::{index_letter, letter_index, ALPHABET_LEN, INDEX_E};
use crate::error::AnalysisError;
use crate::friedman::extract_column;

/// Determines the Caesar shift of a single column.
///
/// The most frequent letter is assumed to decrypt to 'E'; on a frequency
/// tie the alphabetically first letter wins (single left-to-right scan
/// over the counts with a strict comparison). An empty column yields
/// shift 0.
fn column_shift(column: &str) -> usize {
    let mut counts = [0usize; ALPHABET_LEN];
    for &b in column.as_bytes() {
        if let Some(idx) = letter_index(b) {
            counts[idx] += 1;
        }
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0;
    }

    let mut best_idx = 0;
    let mut best_count = 0;
    for (idx, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_count = count;
            best_idx = idx;
        }
    }

    (best_idx + ALPHABET_LEN - INDEX_E) % ALPHABET_LEN
}

/// Recovers the key for a known key length: one letter per interleaved
/// column, each from that column's frequency profile.
///
/// Returns `InvalidConfiguration` if `key_length` is zero. Columns beyond
/// the ciphertext length (key longer than the text) fall back to shift 0,
/// so the recovered key always has exactly `key_length` letters.
pub fn recover_key(cipher: &str, key_length: usize) -> Result<String, AnalysisError> {
    if key_length == 0 {
        return Err(AnalysisError::InvalidConfiguration(
            "key length must be at least 1".to_string(),
        ));
    }

    let key = (0..key_length)
        .map(|offset| index_letter(column_shift(&extract_column(cipher, key_length, offset))))
        .collect();

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_shift_identifies_e() {
        // 'E' most frequent: shift 0
        assert_eq!(column_shift("EEEAB"), 0);
        // 'F' most frequent: shift 1
        assert_eq!(column_shift("FFFAB"), 1);
        // 'A' most frequent: shift (0 - 4) mod 26 = 22
        assert_eq!(column_shift("AAAXY"), 22);
    }

    #[test]
    fn test_column_shift_tie_prefers_alphabetical() {
        // 'C' and 'G' tie; 'C' wins the scan, shift (2 - 4) mod 26 = 24
        assert_eq!(column_shift("CGCG"), 24);
    }

    #[test]
    fn test_column_shift_empty() {
        assert_eq!(column_shift(""), 0);
    }

    #[test]
    fn test_recover_caesar_key() {
        // Plain "EEEEEEEE" shifted by 3 is "HHHHHHHH"; key length 1 -> "D"
        let key = recover_key("HHHHHHHH", 1).unwrap();
        assert_eq!(key, "D");
    }

    #[test]
    fn test_recover_key_length_preserved() {
        // Key longer than the ciphertext: trailing columns default to 'A'
        let key = recover_key("HH", 4).unwrap();
        assert_eq!(key, "DDAA");
    }

    #[test]
    fn test_zero_key_length_rejected() {
        let err = recover_key("ABC", 0).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_recover_on_empty_cipher() {
        assert_eq!(recover_key("", 3).unwrap(), "AAA");
    }
}
