//! Binary entry point for pseudobank.
//!
//! This binary provides the CLI for sanitizing tabular reports.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow prints in the main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use pseudobank::commands::{InspectOutputFormat, RunArgs, cmd_inspect, cmd_run};
use pseudobank::config::PseudobankConfig;
use pseudobank::models::ColumnRule;
use pseudobank::observability::{self, InitOptions, LogFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Pseudobank - pseudonymize sensitive columns in tabular reports.
#[derive(Parser)]
#[command(name = "pseudobank")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log output format: pretty or json.
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Sanitize a report and write the clean copy.
    Run {
        /// Path to the file to sanitize.
        #[arg(short, long)]
        input: PathBuf,

        /// Output path (default: `<output_dir>/CLEAN_<name>`).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column to sanitize, as 'Column Name=Prefix'. Repeatable.
        #[arg(long = "column", value_name = "NAME=PREFIX")]
        columns: Vec<String>,

        /// Skip the interactive walkthrough; requires column rules.
        #[arg(short, long)]
        yes: bool,
    },

    /// List a report's columns with sample values.
    Inspect {
        /// Path to the file to inspect.
        #[arg(short, long)]
        input: PathBuf,

        /// Output format: table or json.
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init(InitOptions {
        verbose: cli.verbose,
        format: LogFormat::parse(&cli.log_format),
    }) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        },
    };

    match run_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(command: Commands, config: &PseudobankConfig) -> anyhow::Result<()> {
    match command {
        Commands::Run {
            input,
            output,
            columns,
            yes,
        } => {
            let rules = columns
                .iter()
                .map(|arg| ColumnRule::parse(arg))
                .collect::<pseudobank::Result<Vec<_>>>()?;
            cmd_run(
                config,
                RunArgs {
                    input,
                    output,
                    rules,
                    assume_yes: yes,
                },
            )?;
            Ok(())
        },

        Commands::Inspect { input, format } => {
            cmd_inspect(config, &input, InspectOutputFormat::parse(&format))?;
            Ok(())
        },
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> anyhow::Result<PseudobankConfig> {
    use anyhow::Context as _;

    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return PseudobankConfig::load_from_file(std::path::Path::new(config_path))
            .with_context(|| format!("loading config from '{config_path}'"));
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var("PSEUDOBANK_CONFIG_PATH") {
        if !config_path.trim().is_empty() {
            return PseudobankConfig::load_from_file(std::path::Path::new(&config_path))
                .with_context(|| format!("loading config from '{config_path}'"));
        }
    }

    // Otherwise, load from default location
    Ok(PseudobankConfig::load_default())
}
