// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands work to Layer 2, and owns
// every message the user sees on the console.
//
// Console contract:
//   success            → "Preprocessing completed."
//   input file missing → "Error: File '<path>' not found. ..."
//   anything else      → "Error: <underlying error>"
//
// Errors are reported, never propagated: the process exits
// normally after printing either error message.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, NormalizeArgs};

use crate::application::prepare_use_case::{PrepareConfig, PrepareSummary, PrepareUseCase};
use crate::data::preprocessor::Normalizer;
use crate::error::CorpusError;

#[derive(Parser, Debug)]
#[command(
    name = "corpus-prep",
    version,
    about = "Lowercase and strip punctuation from a parallel-sentence CSV, \
             writing each column to its own text file."
)]
pub struct Cli {
    /// Subcommand to run; defaults to `prepare` with default paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Prepare(args))   => run_prepare(args.into()),
            Some(Commands::Normalize(args)) => run_normalize(args),
            None                            => run_prepare(PrepareConfig::default()),
        }
    }
}

/// Handles the `prepare` subcommand (and the bare invocation).
fn run_prepare(config: PrepareConfig) -> Result<()> {
    tracing::debug!("Run configuration: {:?}", config);

    let outcome = PrepareUseCase::new(config).execute();
    match &outcome {
        Ok(summary) => tracing::info!(
            "{} rows → '{}' ({} bytes), '{}' ({} bytes)",
            summary.rows,
            summary.source_output.display(),
            summary.source_bytes,
            summary.target_output.display(),
            summary.target_bytes,
        ),
        Err(e) if e.is_input_not_found() => {
            tracing::debug!("Input missing, output files left untouched")
        }
        Err(e) => tracing::debug!("Run failed: {:?}", e),
    }

    println!("{}", outcome_message(&outcome));
    Ok(())
}

/// The single console line a `prepare` run ends with.
fn outcome_message(outcome: &Result<PrepareSummary, CorpusError>) -> String {
    match outcome {
        Ok(_) => "Preprocessing completed.".to_string(),
        // InputNotFound carries its own "not found" wording, every
        // other variant prints its underlying error text
        Err(e) => format!("Error: {e}"),
    }
}

/// Handles the `normalize` subcommand.
fn run_normalize(args: NormalizeArgs) -> Result<()> {
    let normalizer = Normalizer::new();
    for text in &args.text {
        println!("{}", normalizer.clean_field(text));
    }
    Ok(())
}
