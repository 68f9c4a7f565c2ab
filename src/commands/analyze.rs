//! Full-pipeline analysis command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vigsolve::kasiski::{DEFAULT_MAX_WINDOW, DEFAULT_MIN_WINDOW};
use vigsolve::friedman::DEFAULT_MAX_KEY_LENGTH;
use vigsolve::{analyze, AnalysisReport, SolverConfig};

use super::{read_input, CommandExecutor};

/// Run the full attack: Kasiski examination, Friedman estimate,
/// key recovery, and decryption.
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Path to the ciphertext file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Largest key length the Friedman estimate considers
    #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
    pub max_key_length: usize,

    /// Shortest repeated substring the Kasiski stage looks for
    #[arg(long, default_value_t = DEFAULT_MIN_WINDOW)]
    pub min_window: usize,

    /// Longest repeated substring the Kasiski stage looks for
    #[arg(long, default_value_t = DEFAULT_MAX_WINDOW)]
    pub max_window: usize,

    /// Force this key length instead of the Friedman estimate
    #[arg(short, long)]
    pub key_length: Option<usize>,

    /// Reject inputs longer than this many letters (the Kasiski scan is
    /// quadratic in the input length)
    #[arg(long)]
    pub max_input_len: Option<usize>,

    /// Print the report as JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,

    /// Show the repeat table, factor counts, and IC table
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for AnalyzeCommand {
    fn execute(&self) -> Result<()> {
        let raw = read_input(self.input.as_ref())?;

        let config = SolverConfig {
            max_key_length: self.max_key_length,
            kasiski_min_window: self.min_window,
            kasiski_max_window: self.max_window,
            forced_key_length: self.key_length,
            max_input_len: self.max_input_len,
        };

        let report = analyze(&raw, &config).context("Analysis failed")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );
            return Ok(());
        }

        if self.verbose {
            print_diagnostics(&report);
        }

        println!("Ciphertext length: {} letters", report.cipher.len());
        println!("Estimated key length: {}", report.key_length);
        println!("Recovered key: {}", report.key);
        println!();
        println!("{}", report.plaintext);

        Ok(())
    }
}

/// Prints the advisory tables the way a manual Kasiski/Friedman worksheet
/// would lay them out.
fn print_diagnostics(report: &AnalysisReport) {
    eprintln!("Kasiski examination:");
    if report.repeats.is_empty() {
        eprintln!("  no repeated sequences found");
    } else {
        for entry in &report.repeats.entries {
            eprintln!("  {} -> distances {:?}", entry.substring, entry.distances);
        }
    }

    if !report.factor_counts.is_empty() {
        eprintln!("Most common distance factors (candidate key lengths):");
        for (factor, count) in report.factor_counts.iter().take(10) {
            eprintln!("  {:2} -> count {}", factor, count);
        }
    }

    eprintln!("Index of coincidence per key length:");
    for (k, score) in report.ic_table.iter() {
        let marker = if k == report.key_length { " <-" } else { "" };
        eprintln!("  {:2} -> {:.4}{}", k, score, marker);
    }
    eprintln!();
}
