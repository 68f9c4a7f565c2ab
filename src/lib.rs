//! # Vigsolve - Vigenère ciphertext-only cryptanalysis
//!
//! Vigsolve recovers the key of a Vigenère-encrypted text from the
//! ciphertext alone, using the classical attack chain:
//!
//! 1. **Normalize** the input to uppercase A–Z.
//! 2. **Kasiski examination**: repeated substrings and the distances
//!    between them (advisory; multiples of the key length dominate).
//! 3. **Friedman test**: average index of coincidence per candidate key
//!    length; the highest-scoring length wins.
//! 4. **Key recovery**: per-column frequency analysis, assuming each
//!    column's most frequent letter is 'E'.
//! 5. **Decryption** with the recovered key.
//!
//! ## Example
//!
//! ```rust
//! use vigsolve::{analyze, encrypt, SolverConfig};
//!
//! let plain: String = "THEREWEREELEVENGREENTREESNEARTHEEDGES".repeat(9);
//! let cipher = encrypt(&plain, "KEY").unwrap();
//!
//! let report = analyze(&cipher, &SolverConfig::default()).unwrap();
//! assert_eq!(report.key, "KEY");
//! assert_eq!(report.plaintext, plain);
//! ```
//!
//! The heuristic is the pen-and-paper one: it needs enough ciphertext per
//! column for English letter frequencies to show through, and it can be
//! wrong on short or non-English inputs. That is the nature of the attack,
//! not a bug.
//!
//! ## Modules
//!
//! - [`alphabet`]: the fixed A–Z alphabet and text normalization
//! - [`kasiski`]: repeated-substring distance analysis
//! - [`friedman`]: index-of-coincidence key-length estimation
//! - [`recover`]: per-column frequency-based key recovery
//! - [`cipher`]: encrypt/decrypt with a known key
//! - [`solver`]: the composed pipeline and its configuration

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod friedman;
pub mod kasiski;
pub mod recover;
pub mod solver;

pub use alphabet::normalize;
pub use cipher::{decrypt, encrypt};
pub use error::AnalysisError;
pub use friedman::{best_key_length, estimate_key_length, index_of_coincidence, IcTable};
pub use kasiski::{analyze_kasiski, factor_counts, RepeatRecord};
pub use recover::recover_key;
pub use solver::{analyze, AnalysisReport, SolverConfig};
