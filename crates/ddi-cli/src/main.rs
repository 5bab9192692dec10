//! faers-ddi CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::Level;

use ddi_cli::logging::{LogConfig, LogFormat, init_logging};
use ddi_cli::summary::print_summary;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, ResultFormatArg};
use crate::commands::{run_analyze, run_modes};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Analyze(args) => match run_analyze(&args) {
            Ok(report) => {
                match args.format {
                    ResultFormatArg::Table => print_summary(&report),
                    ResultFormatArg::Json => match serde_json::to_string_pretty(&report) {
                        Ok(json) => println!("{json}"),
                        Err(error) => eprintln!("error: {error}"),
                    },
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Modes => {
            run_modes();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli.verbosity.tracing_level().unwrap_or(Level::ERROR),
        ..LogConfig::default()
    };
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
