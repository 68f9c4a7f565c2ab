//! Vigenère encryption and decryption with a known key.
//!
//! Both transforms work letter-wise over A–Z with a repeating key:
//! decryption subtracts the key letter's index mod 26, encryption adds it.
//! Encryption is not on the analysis path, but a solver that cannot produce
//! its own test ciphertexts is hard to trust.

use crate::alphabet::{index_letter, letter_index, ALPHABET_LEN};
use crate::error::AnalysisError;

/// Validates a key: non-empty, uppercase A–Z only. Returns the key
/// letters as alphabet indices.
fn key_indices(key: &str) -> Result<Vec<usize>, AnalysisError> {
    if key.is_empty() {
        return Err(AnalysisError::InvalidKey("key is empty".to_string()));
    }
    key.bytes()
        .map(|b| {
            letter_index(b).ok_or_else(|| {
                AnalysisError::InvalidKey(format!(
                    "key contains non-alphabet character '{}'",
                    b as char
                ))
            })
        })
        .collect()
}

fn transform(
    text: &str,
    key: &str,
    combine: impl Fn(usize, usize) -> usize,
) -> Result<String, AnalysisError> {
    let key = key_indices(key)?;
    let out = text
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            // text is normalized A–Z; anything else passes through untouched
            match letter_index(b) {
                Some(idx) => index_letter(combine(idx, key[i % key.len()])),
                None => b as char,
            }
        })
        .collect();
    Ok(out)
}

/// Decrypts a normalized ciphertext with the given key.
///
/// `plaintext[i] = (cipher[i] − key[i mod |key|]) mod 26`. The output has
/// the same length as the input. Fails with `InvalidKey` if the key is
/// empty or contains characters outside A–Z.
pub fn decrypt(cipher: &str, key: &str) -> Result<String, AnalysisError> {
    transform(cipher, key, |c, k| c + ALPHABET_LEN - k)
}

/// Encrypts a normalized plaintext with the given key: the inverse of
/// [`decrypt`]. Same key validation.
pub fn encrypt(plain: &str, key: &str) -> Result<String, AnalysisError> {
    transform(plain, key, |p, k| p + k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrypt_known_vector() {
        // "LXFOPVEFRNHR" is "ATTACKATDAWN" under key "LEMON"
        assert_eq!(decrypt("LXFOPVEFRNHR", "LEMON").unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_encrypt_known_vector() {
        assert_eq!(encrypt("ATTACKATDAWN", "LEMON").unwrap(), "LXFOPVEFRNHR");
    }

    #[test]
    fn test_round_trip() {
        let plain = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        for key in ["A", "KEY", "LEMON", "ZZZZZZZ"] {
            let cipher = encrypt(plain, key).unwrap();
            assert_eq!(decrypt(&cipher, key).unwrap(), plain);
        }
    }

    #[test]
    fn test_key_a_is_identity() {
        assert_eq!(decrypt("HELLO", "A").unwrap(), "HELLO");
        assert_eq!(encrypt("HELLO", "A").unwrap(), "HELLO");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            decrypt("ABC", "").unwrap_err(),
            AnalysisError::InvalidKey(_)
        ));
        assert!(matches!(
            encrypt("ABC", "").unwrap_err(),
            AnalysisError::InvalidKey(_)
        ));
    }

    #[test]
    fn test_lowercase_key_rejected() {
        assert!(matches!(
            decrypt("ABC", "key").unwrap_err(),
            AnalysisError::InvalidKey(_)
        ));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(decrypt("", "KEY").unwrap(), "");
    }
}
