//! Known-key encryption command (useful for producing test ciphertexts).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vigsolve::{encrypt, normalize};

use super::{read_input, write_output, CommandExecutor};

/// Encrypt a plaintext with a key.
#[derive(Args, Debug)]
pub struct EncryptCommand {
    /// Path to the plaintext file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The key, letters only (case-insensitive)
    #[arg(short, long)]
    pub key: String,

    /// Write the ciphertext here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self) -> Result<()> {
        let plain = normalize(&read_input(self.input.as_ref())?);
        let key = normalize(&self.key);

        let cipher = encrypt(&plain, &key).context("Encryption failed")?;
        write_output(self.output.as_ref(), &cipher)
    }
}
