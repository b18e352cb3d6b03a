//! polishdict CLI.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pdict_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use pdict_cli::commands::{run_interpret, run_lookup, run_resolve};
use pdict_cli::logging::{LogConfig, LogFormat, init_logging};
use pdict_cli::render::{Styling, write_report, write_resolution, write_table_outcome};
use pdict_core::{LemmaResolution, LookupOutcome};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let styling = match cli.color.color {
        ColorChoice::Always => Styling::Always,
        ColorChoice::Never => Styling::Never,
        ColorChoice::Auto => Styling::Auto,
    };
    let exit_code = match run(&cli.command, styling) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Runs a subcommand and prints its result; returns the exit code.
fn run(command: &Command, styling: Styling) -> Result<i32> {
    let mut out = io::stdout().lock();
    match command {
        Command::Lookup(args) => {
            let outcome = run_lookup(args)?;
            if args.format == OutputFormatArg::Json {
                print_json(&mut out, &outcome)?;
            }
            match outcome {
                LookupOutcome::NoResults { query } => {
                    if args.format == OutputFormatArg::Table {
                        writeln!(out, "no results for {query}")?;
                    }
                    Ok(1)
                }
                LookupOutcome::Found(report) => {
                    if args.format == OutputFormatArg::Table {
                        write_report(&mut out, &report, styling)?;
                    }
                    Ok(0)
                }
            }
        }
        Command::Resolve(args) => {
            let resolution = run_resolve(args)?;
            match args.format {
                OutputFormatArg::Json => print_json(&mut out, &resolution)?,
                OutputFormatArg::Table => write_resolution(&mut out, &args.word, &resolution)?,
            }
            Ok(if resolution == LemmaResolution::NotFound { 1 } else { 0 })
        }
        Command::Interpret(args) => {
            let outcome = run_interpret(args)?;
            match args.format {
                OutputFormatArg::Json => print_json(&mut out, &outcome)?,
                OutputFormatArg::Table => write_table_outcome(&mut out, &outcome, styling)?,
            }
            Ok(0)
        }
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
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
