//! Command module - Strategy pattern for CLI commands.
//!
//! Each subcommand is a separate module implementing the `CommandExecutor`
//! trait, keeping parsing (main.rs) separate from execution logic.

mod analyze;
mod decrypt;
mod encrypt;
mod ic;
mod kasiski;

pub use analyze::AnalyzeCommand;
pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;
pub use ic::IcCommand;
pub use kasiski::KasiskiCommand;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Reads command input from a file, or from stdin when no path is given.
fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {}", path.display())),
        None => {
            eprintln!("Reading text from stdin (Ctrl+D to finish):");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes command output to a file, or to stdout when no path is given.
fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Output written to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
