//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitae - a real person from history for every day.
#[derive(Debug, Parser)]
#[command(name = "vitae")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VITAE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve today's person (default)
    Today(ResolveArgs),

    /// Resolve the person for a given date
    Date(DateArgs),

    /// Check whether ad-hoc text describes a person
    Classify(ClassifyArgs),

    /// Run fact extraction over ad-hoc text
    Extract(ExtractArgs),
}

/// Arguments shared by the resolving commands.
#[derive(Debug, Default, Parser)]
pub struct ResolveArgs {
    /// Show which tier produced the person and why earlier tiers failed
    #[arg(short, long)]
    pub explain: bool,
}

/// Arguments for the date command.
#[derive(Debug, Parser)]
pub struct DateArgs {
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Article title
    #[arg(short, long)]
    pub title: String,

    /// Lead prose
    #[arg(short, long, default_value = "")]
    pub extract: String,

    /// Short descriptor
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Lead prose
    #[arg(short, long)]
    pub extract: String,

    /// Short descriptor
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Article title
    #[arg(short, long, default_value = "Unknown")]
    pub title: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["vitae"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_date_command() {
        let cli = Cli::parse_from(["vitae", "date", "2024-03-15", "--explain", "-f", "json"]);
        match cli.command {
            Some(Command::Date(args)) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
                assert!(args.resolve.explain);
            }
            _ => panic!("Expected Date command"),
        }
        assert_eq!(cli.format, Some(CliFormat::Json));
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(Cli::try_parse_from(["vitae", "date", "15/03/2024"]).is_err());
    }

    #[test]
    fn test_classify_command() {
        let cli = Cli::parse_from([
            "vitae",
            "classify",
            "--title",
            "Jane Doe",
            "--extract",
            "She was born in 1990.",
            "--description",
            "a Canadian politician",
        ]);
        match cli.command {
            Some(Command::Classify(args)) => {
                assert_eq!(args.title, "Jane Doe");
                assert_eq!(args.description, "a Canadian politician");
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::parse_from(["vitae", "extract", "-e", "Born in 1900."]);
        match cli.command {
            Some(Command::Extract(args)) => {
                assert_eq!(args.title, "Unknown");
                assert!(args.description.is_empty());
            }
            _ => panic!("Expected Extract command"),
        }
    }
}
