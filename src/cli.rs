use crate::core::{Category, Severity};
use crate::filter::Selection;
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smelldash")]
#[command(about = "Summarize and explore code smell analysis results", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a dashboard report for an analysis payload
    Report {
        /// Payload JSON file, or `-` for stdin
        payload: PathBuf,

        /// Output format (default: from config, else terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only list records of this severity (critical, high, medium, low or all)
        #[arg(long, default_value = "all")]
        severity: Selection<Severity>,

        /// Only list records of this category (security, performance,
        /// maintainability, complexity, style, other or all)
        #[arg(long, default_value = "all")]
        category: Selection<Category>,

        /// Case-insensitive text to look for in smell type and description
        #[arg(long, default_value = "")]
        search: String,

        /// Show only the first N listed records
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// List records by severity then line instead of received order
        #[arg(long)]
        ranked: bool,

        /// Configuration file (skips discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Increase log verbosity (-v debug, -vv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Fail when the quality score is below a threshold
    Validate {
        /// Payload JSON file, or `-` for stdin
        payload: PathBuf,

        /// Minimum acceptable quality score (default: from config, else 70)
        #[arg(long = "min-quality", value_parser = clap::value_parser!(u8).range(0..=100))]
        min_quality: Option<u8>,

        /// Configuration file (skips discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Increase log verbosity (-v debug, -vv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Report { verbosity, .. } | Commands::Validate { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_defaults() {
        let cli = Cli::try_parse_from(["smelldash", "report", "payload.json"]).unwrap();
        match cli.command {
            Commands::Report {
                payload,
                format,
                severity,
                category,
                search,
                top,
                ranked,
                plain,
                verbosity,
                ..
            } => {
                assert_eq!(payload, PathBuf::from("payload.json"));
                assert_eq!(format, None);
                assert_eq!(severity, Selection::All);
                assert_eq!(category, Selection::All);
                assert!(search.is_empty());
                assert_eq!(top, None);
                assert!(!ranked);
                assert!(!plain);
                assert_eq!(verbosity, 0);
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn report_filter_flags() {
        let cli = Cli::try_parse_from([
            "smelldash",
            "report",
            "-",
            "--format",
            "markdown",
            "--severity",
            "High",
            "--category",
            "security",
            "--search",
            "token",
            "--head",
            "3",
            "-vv",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                ref payload,
                format,
                severity,
                category,
                top,
                ..
            } => {
                assert_eq!(payload, &PathBuf::from("-"));
                assert_eq!(format, Some(OutputFormat::Markdown));
                assert_eq!(severity, Selection::Only(Severity::High));
                assert_eq!(category, Selection::Only(Category::Security));
                assert_eq!(top, Some(3));
            }
            _ => panic!("Expected Report command"),
        }
        assert_eq!(cli.command.verbosity(), 2);
    }

    #[test]
    fn unknown_severity_is_rejected() {
        assert!(Cli::try_parse_from(["smelldash", "report", "p.json", "--severity", "urgent"]).is_err());
    }

    #[test]
    fn validate_range_is_enforced() {
        assert!(Cli::try_parse_from(["smelldash", "validate", "p.json", "--min-quality", "101"]).is_err());
        let cli =
            Cli::try_parse_from(["smelldash", "validate", "p.json", "--min-quality", "85"]).unwrap();
        match cli.command {
            Commands::Validate { min_quality, .. } => assert_eq!(min_quality, Some(85)),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn init_force_flag() {
        let cli = Cli::try_parse_from(["smelldash", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
