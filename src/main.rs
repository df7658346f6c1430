use anyhow::Result;
use clap::Parser;
use smelldash::cli::{Cli, Commands};
use smelldash::commands::{self, ReportConfig, ValidateOptions};
use smelldash::filter::FilterPredicate;
use smelldash::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Report {
            payload,
            format,
            output,
            severity,
            category,
            search,
            top,
            ranked,
            config,
            plain,
            verbosity: _,
        } => {
            let report = ReportConfig {
                payload,
                format,
                output,
                predicate: FilterPredicate::all()
                    .with_severity(severity)
                    .with_category(category)
                    .with_search(search),
                top,
                ranked,
                config,
                plain,
            };
            commands::handle_report(report)
        }
        Commands::Validate {
            payload,
            min_quality,
            config,
            verbosity: _,
        } => {
            commands::validate_payload(ValidateOptions {
                payload,
                min_quality,
                config,
            })?;
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
