//! Kasiski-examination command: repeat table and factor counts only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vigsolve::friedman::DEFAULT_MAX_KEY_LENGTH;
use vigsolve::kasiski::{DEFAULT_MAX_WINDOW, DEFAULT_MIN_WINDOW};
use vigsolve::{analyze_kasiski, factor_counts, normalize};

use super::{read_input, CommandExecutor};

/// Print repeated substrings, their occurrence distances, and the
/// most common distance factors.
#[derive(Args, Debug)]
pub struct KasiskiCommand {
    /// Path to the ciphertext file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Shortest repeated substring to look for
    #[arg(long, default_value_t = DEFAULT_MIN_WINDOW)]
    pub min_window: usize,

    /// Longest repeated substring to look for
    #[arg(long, default_value_t = DEFAULT_MAX_WINDOW)]
    pub max_window: usize,

    /// Print the repeat record as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for KasiskiCommand {
    fn execute(&self) -> Result<()> {
        let cipher = normalize(&read_input(self.input.as_ref())?);

        let record = analyze_kasiski(&cipher, self.min_window, self.max_window)
            .context("Kasiski examination failed")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&record).context("Failed to serialize repeats")?
            );
            return Ok(());
        }

        if record.is_empty() {
            println!("No repeated sequences found.");
            return Ok(());
        }

        for entry in &record.entries {
            println!("{} -> distances {:?}", entry.substring, entry.distances);
        }

        println!();
        println!("Most common distance factors (candidate key lengths):");
        for (factor, count) in factor_counts(&record, DEFAULT_MAX_KEY_LENGTH).iter().take(10) {
            println!("{:2} -> count {}", factor, count);
        }

        Ok(())
    }
}
