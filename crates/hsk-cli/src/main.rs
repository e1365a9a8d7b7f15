//! Health study field kit CLI.

use clap::{ColorChoice, Parser};
use hsk_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_color, run_date, run_storage, run_validate, run_value};
use crate::summary::{
    print_color_summary, print_date_summary, print_storage_summary, print_validate_summary,
    print_value_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: logging setup failed: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => {
            let report = run_validate(&args);
            print_validate_summary(&report);
            if report.accepted { 0 } else { 1 }
        }
        Command::Value(args) => match run_value(&args) {
            Ok(report) => {
                print_value_summary(&report);
                if report.accepted { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Date(args) => match run_date(&args) {
            Ok(report) => {
                print_date_summary(&report);
                if report.canonical.is_some() { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Color(args) => {
            let report = run_color(&args);
            print_color_summary(&report);
            0
        }
        Command::Storage(args) => match run_storage(&args) {
            Ok(report) => {
                print_storage_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Translate the global logging flags into subscriber settings.
/// An explicit `--log-level` beats the `-v` count.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
    }
}
