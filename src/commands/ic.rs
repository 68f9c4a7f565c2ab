//! Friedman-test command: IC table and key-length estimate only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vigsolve::friedman::DEFAULT_MAX_KEY_LENGTH;
use vigsolve::{best_key_length, estimate_key_length, normalize};

use super::{read_input, CommandExecutor};

/// Print the index-of-coincidence table and the estimated key length.
#[derive(Args, Debug)]
pub struct IcCommand {
    /// Path to the ciphertext file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Largest key length to consider
    #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
    pub max_key_length: usize,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for IcCommand {
    fn execute(&self) -> Result<()> {
        let cipher = normalize(&read_input(self.input.as_ref())?);

        let table = estimate_key_length(&cipher, self.max_key_length)
            .context("Key length estimation failed")?;
        let best = best_key_length(&table);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&table).context("Failed to serialize IC table")?
            );
        } else {
            for (k, score) in table.iter() {
                let marker = if k == best { " <-" } else { "" };
                println!("{:2} -> {:.4}{}", k, score, marker);
            }
        }
        println!("Estimated key length: {}", best);

        Ok(())
    }
}
