//! Vigsolve - Vigenère ciphertext-only cryptanalysis
//!
//! A CLI for the classical Vigenère attack chain: Kasiski examination,
//! Friedman (index of coincidence) key-length estimation, per-column
//! frequency key recovery, and decryption.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    AnalyzeCommand, CommandExecutor, DecryptCommand, EncryptCommand, IcCommand, KasiskiCommand,
};

/// Vigsolve - break Vigenère ciphers from ciphertext alone
///
/// Paste or pipe in a ciphertext; vigsolve estimates the key length,
/// recovers the key by frequency analysis, and prints the plaintext.
#[derive(Parser)]
#[command(name = "vigsolve")]
#[command(version = "0.1.0")]
#[command(about = "Classical cryptanalysis of Vigenère ciphers")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full attack and print the recovered key and plaintext
    Analyze(AnalyzeCommand),

    /// Decrypt with a known key
    Decrypt(DecryptCommand),

    /// Encrypt with a key (handy for producing test ciphertexts)
    Encrypt(EncryptCommand),

    /// Print the index-of-coincidence table and key-length estimate
    Ic(IcCommand),

    /// Print repeated substrings and their occurrence distances
    Kasiski(KasiskiCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(cmd) => cmd.execute(),
        Commands::Decrypt(cmd) => cmd.execute(),
        Commands::Encrypt(cmd) => cmd.execute(),
        Commands::Ic(cmd) => cmd.execute(),
        Commands::Kasiski(cmd) => cmd.execute(),
    }
}
