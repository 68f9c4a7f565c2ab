//! Kasiski examination: repeated-substring distance analysis.
//!
//! Repeated substrings in a Vigenère ciphertext tend to appear at distances
//! that are multiples of the key length, because identical plaintext under
//! the same key alignment produces identical ciphertext. The distances (and
//! their common factors) are advisory output for the analyst; the pipeline's
//! key-length decision comes from the Friedman stage.

use serde::Serialize;

use crate::error::AnalysisError;

/// Default shortest repeated-substring window.
pub const DEFAULT_MIN_WINDOW: usize = 3;

/// Default longest repeated-substring window.
pub const DEFAULT_MAX_WINDOW: usize = 5;

/// One repeated substring with the distances between its occurrences.
#[derive(Debug, Clone, Serialize)]
pub struct RepeatEntry {
    /// The repeated substring.
    pub substring: String,
    /// Pairwise distances j−i for every occurrence pair i<j,
    /// in discovery order.
    pub distances: Vec<usize>,
}

/// All repeated substrings found in a ciphertext, in discovery order
/// (shorter windows first, then by first occurrence position).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepeatRecord {
    /// Discovered repeats.
    pub entries: Vec<RepeatEntry>,
}

impl RepeatRecord {
    /// Returns the distances recorded for a substring, if it repeated.
    pub fn distances(&self, substring: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|e| e.substring == substring)
            .map(|e| e.distances.as_slice())
    }

    /// Returns true if no repeated substring was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded distances across all repeats.
    pub fn distance_count(&self) -> usize {
        self.entries.iter().map(|e| e.distances.len()).sum()
    }

    fn record(&mut self, substring: &str, distance: usize) {
        match self.entries.iter_mut().find(|e| e.substring == substring) {
            Some(entry) => entry.distances.push(distance),
            None => self.entries.push(RepeatEntry {
                substring: substring.to_string(),
                distances: vec![distance],
            }),
        }
    }
}

/// Finds repeated substrings of each window size in `[min_window, max_window]`
/// and records the pairwise distances between their occurrences.
///
/// For each window size s, every pair of start positions i<j whose s-length
/// substrings match contributes distance j−i under that substring. Discovery
/// order is window size ascending, then i, then j. A ciphertext too short
/// for any window yields an empty record.
///
/// Returns `InvalidConfiguration` if `min_window` is zero or the bounds are
/// inverted.
pub fn analyze_kasiski(
    cipher: &str,
    min_window: usize,
    max_window: usize,
) -> Result<RepeatRecord, AnalysisError> {
    if min_window == 0 {
        return Err(AnalysisError::InvalidConfiguration(
            "Kasiski window size must be at least 1".to_string(),
        ));
    }
    if min_window > max_window {
        return Err(AnalysisError::InvalidConfiguration(format!(
            "Kasiski window bounds inverted: min {} > max {}",
            min_window, max_window
        )));
    }

    let bytes = cipher.as_bytes();
    let mut record = RepeatRecord::default();

    for size in min_window..=max_window {
        if size > bytes.len() {
            break;
        }
        let last_start = bytes.len() - size;
        for i in 0..=last_start {
            let needle = &bytes[i..i + size];
            for j in (i + 1)..=last_start {
                if &bytes[j..j + size] == needle {
                    // cipher is normalized A–Z, so byte slices are valid UTF-8
                    record.record(std::str::from_utf8(needle).unwrap_or(""), j - i);
                }
            }
        }
    }

    Ok(record)
}

/// Counts how often each factor in `2..=max_factor` divides a recorded
/// distance. The true key length tends to dominate these counts.
///
/// Returns `(factor, count)` pairs with count > 0, sorted by count
/// descending, then factor ascending.
pub fn factor_counts(record: &RepeatRecord, max_factor: usize) -> Vec<(usize, usize)> {
    let mut counts = vec![0usize; max_factor.saturating_add(1)];
    for entry in &record.entries {
        for &d in &entry.distances {
            for f in 2..=max_factor.min(d) {
                if d % f == 0 {
                    counts[f] += 1;
                }
            }
        }
    }

    let mut ranked: Vec<(usize, usize)> = counts
        .into_iter()
        .enumerate()
        .filter(|&(f, c)| f >= 2 && c > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_repeat_distances() {
        // "ABC" occurs at 0, 7, 12: pairs (0,7), (0,12), (7,12)
        let record = analyze_kasiski("ABCWXYZABCPQABC", 3, 3).unwrap();
        assert_eq!(record.distances("ABC"), Some(&[7, 12, 5][..]));
    }

    #[test]
    fn test_evenly_spaced_repeat_distances() {
        // "ABC" occurs at 0, 6, 12: pairwise gaps in i-then-j order
        let record = analyze_kasiski("ABCXYZABCPQRABC", 3, 3).unwrap();
        assert_eq!(record.distances("ABC"), Some(&[6, 12, 6][..]));
    }

    #[test]
    fn test_larger_windows_recorded_separately() {
        // "ABCD" repeats at 0 and 8; its 3-prefixes repeat too
        let record = analyze_kasiski("ABCDWXYZABCD", 3, 5).unwrap();
        assert_eq!(record.distances("ABC"), Some(&[8][..]));
        assert_eq!(record.distances("BCD"), Some(&[8][..]));
        assert_eq!(record.distances("ABCD"), Some(&[8][..]));
        assert_eq!(record.distances("ABCDW"), None);
    }

    #[test]
    fn test_discovery_order() {
        // Window 3 entries come before window 4 entries
        let record = analyze_kasiski("ABCDWXYZABCD", 3, 4).unwrap();
        let names: Vec<&str> = record.entries.iter().map(|e| e.substring.as_str()).collect();
        assert_eq!(names, vec!["ABC", "BCD", "ABCD"]);
    }

    #[test]
    fn test_short_input_is_empty() {
        let record = analyze_kasiski("AB", 3, 5).unwrap();
        assert!(record.is_empty());

        let record = analyze_kasiski("", 3, 5).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_no_repeats() {
        let record = analyze_kasiski("ABCDEFGH", 3, 5).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = analyze_kasiski("ABCABC", 5, 3).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfiguration(_)));

        let err = analyze_kasiski("ABCABC", 0, 5).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_factor_counts_rank_key_length() {
        // Distances 6, 12, 9: factor 3 divides all three
        let mut record = RepeatRecord::default();
        record.record("AAA", 6);
        record.record("BBB", 12);
        record.record("CCC", 9);

        let ranked = factor_counts(&record, 20);
        assert_eq!(ranked[0], (3, 3));
        assert!(ranked.contains(&(6, 2)));
        assert!(ranked.contains(&(2, 2)));
    }

    #[test]
    fn test_factor_counts_empty_record() {
        assert!(factor_counts(&RepeatRecord::default(), 20).is_empty());
    }
}
