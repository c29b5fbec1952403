// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `normalize`.
//
// Running the binary with no subcommand behaves exactly like
// `prepare` with every default, so the tool still works as a
// zero-argument script:
//
//   corpus-prep
//   corpus-prep prepare --input pairs.csv --report run.json
//   corpus-prep normalize "Salam, labas?"
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::prepare_use_case::PrepareConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean a two-column CSV into two aligned text files
    Prepare(PrepareArgs),

    /// Print the normalized form of each TEXT argument
    Normalize(NormalizeArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// CSV file with a header row and (source, target) columns
    #[arg(long, default_value = "sentences.csv")]
    pub input: PathBuf,

    /// Where the cleaned source-language lines go
    #[arg(long, default_value = "data/darija_clean.txt")]
    pub source_output: PathBuf,

    /// Where the cleaned target-language lines go
    #[arg(long, default_value = "data/english_clean.txt")]
    pub target_output: PathBuf,

    /// Also write a JSON summary of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input_path:    a.input,
            source_output: a.source_output,
            target_output: a.target_output,
            report_path:   a.report,
        }
    }
}

/// All arguments for the `normalize` command
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// One or more strings to normalize
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_prepare_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["corpus-prep", "prepare"]).unwrap();
        let Some(Commands::Prepare(args)) = cli.command else {
            panic!("expected prepare");
        };
        assert_eq!(PrepareConfig::from(args), PrepareConfig::default());
    }

    #[test]
    fn test_prepare_overrides() {
        let cli = Cli::try_parse_from([
            "corpus-prep", "prepare",
            "--input", "in.csv",
            "--source-output", "a.txt",
            "--target-output", "b.txt",
            "--report", "r.json",
        ])
        .unwrap();
        let Some(Commands::Prepare(args)) = cli.command else {
            panic!("expected prepare");
        };
        let cfg = PrepareConfig::from(args);
        assert_eq!(cfg.input_path,    PathBuf::from("in.csv"));
        assert_eq!(cfg.source_output, PathBuf::from("a.txt"));
        assert_eq!(cfg.target_output, PathBuf::from("b.txt"));
        assert_eq!(cfg.report_path,   Some(PathBuf::from("r.json")));
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["corpus-prep"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_normalize_requires_text() {
        assert!(Cli::try_parse_from(["corpus-prep", "normalize"]).is_err());
    }
}
