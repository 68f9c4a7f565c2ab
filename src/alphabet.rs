//! Fixed 26-letter alphabet and ciphertext normalization.
//!
//! All analysis stages work over uppercase A–Z only. The alphabet mapping
//! (letter <-> index 0..=25) is a process-wide constant; every modular
//! shift in the crate goes through the helpers here.

/// The working alphabet, in index order.
pub const ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Index of 'E', the most frequent letter in English text.
/// Key recovery assumes each column's most frequent letter decrypts to it.
pub const INDEX_E: usize = 4;

/// Returns the 0-based alphabet index of an uppercase letter,
/// or `None` if the byte is outside A–Z.
pub fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Returns the uppercase letter at the given alphabet index (mod 26).
pub fn index_letter(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN] as char
}

/// Normalizes raw text to analysis form: uppercase, A–Z only,
/// original order preserved. Everything else (digits, punctuation,
/// whitespace, non-ASCII) is dropped.
///
/// Pure and total; applying it twice gives the same result as once.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
