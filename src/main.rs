// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::app_controller::Controller;
use crate::errors::AppError;
use crate::logging::CustomLogger;

mod app_controller;
mod csv_report;
mod errors;
mod file_utils;
mod gui;
mod logging;
mod subtitle_processor;
mod word_counter;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count word frequencies in a subtitle file (default command)
    Count(CountArgs),

    /// Generate shell completions for subfreq
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CountArgs {
    /// Input subtitle file (.srt or .ass)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output CSV file or directory (defaults to an auto-named file beside the input)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subfreq - Subtitle word-frequency counter
///
/// Reads an SRT or ASS subtitle file, strips timing and markup, counts
/// word frequencies and writes them as a two-column CSV.
#[derive(Parser, Debug)]
#[command(name = "subfreq")]
#[command(version = "1.0.0")]
#[command(about = "Count word frequencies in SRT/ASS subtitle files")]
#[command(long_about = "subfreq extracts spoken text from subtitle files and writes word
frequencies as a two-column CSV (word,count), sorted by descending count
with alphabetical tie-breaking.

EXAMPLES:
    subfreq episode.srt                      # episode_word_frequency.csv beside the input
    subfreq episode.srt counts.csv           # explicit output file
    subfreq episode.ass reports/             # auto-named file inside reports/
    subfreq                                  # interactive file picker
    subfreq completions bash > subfreq.bash  # generate bash completions

Run with no arguments to choose the input with a native file dialog;
dismissing the dialog exits cleanly without writing anything.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file (.srt or .ass); omit to pick interactively
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output CSV file or directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Dismissing the picker maps to a clean exit, not an error.
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            if code != 0 {
                log::error!("{:#}", e);
            }
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    // Initialize the logger once with info level by default
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subfreq", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Count(args)) => run_count(args),
        None => {
            match cli.input_path {
                // Default behavior - use top-level args for a bare invocation
                Some(input_path) => run_count(CountArgs {
                    input_path,
                    output: cli.output,
                    log_level: cli.log_level,
                }),
                // Zero arguments: fall back to the interactive picker
                None => {
                    if let Some(level) = cli.log_level {
                        log::set_max_level(level.into());
                    }
                    gui::run_interactive()
                }
            }
        }
    }
}

fn run_count(options: CountArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(level) = options.log_level {
        log::set_max_level(level.into());
    }

    let controller = Controller::new();
    controller.run(&options.input_path, options.output.as_deref())?;

    Ok(())
}
