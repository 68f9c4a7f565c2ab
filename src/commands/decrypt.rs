//! Known-key decryption command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vigsolve::{decrypt, normalize};

use super::{read_input, write_output, CommandExecutor};

/// Decrypt a ciphertext with a known key.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    /// Path to the ciphertext file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The key, letters only (case-insensitive)
    #[arg(short, long)]
    pub key: String,

    /// Write the plaintext here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self) -> Result<()> {
        let cipher = normalize(&read_input(self.input.as_ref())?);
        let key = normalize(&self.key);

        let plain = decrypt(&cipher, &key).context("Decryption failed")?;
        write_output(self.output.as_ref(), &plain)
    }
}
