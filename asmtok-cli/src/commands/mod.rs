//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use asmtok_core::Pipeline;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::io;
use std::path::PathBuf;

pub mod interactive;
pub mod tokenize;

pub use interactive::{InteractiveArgs, ReportFormat};
pub use tokenize::{BatchSummary, TokenizeArgs};

/// Rule-based tokenizer for Assamese text
#[derive(Debug, Parser)]
#[command(name = "asmtok", version, about, long_about = None)]
pub struct Cli {
    /// Operating mode
    #[arg(long, value_enum, default_value = "interactive")]
    pub mode: Mode,

    /// Text to analyze (interactive mode)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Source file, one sentence per line (tokenize mode)
    #[arg(long, value_name = "FILE")]
    pub src: Option<PathBuf>,

    /// Destination file (tokenize mode)
    #[arg(long, value_name = "FILE")]
    pub tgt: Option<PathBuf>,

    /// Report format for interactive mode
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep hyphens inside compound words
    #[arg(long)]
    pub join_compound_hyphens: bool,

    /// Process lines on a thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Tokenize a file line by line
    Tokenize,
    /// Print a tokenization report for one text
    Interactive,
}

/// Resolved command with its arguments
#[derive(Debug)]
pub enum Command {
    /// Batch file tokenization
    Tokenize(TokenizeArgs),
    /// Single-text analysis
    Interactive(InteractiveArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Configuration file
    pub config: Option<PathBuf>,
    /// Override for compound-hyphen joining
    pub join_compound_hyphens: bool,
    /// Override for parallel processing
    pub parallel: bool,
    /// Override for the worker count
    pub threads: Option<usize>,
    /// Suppress progress output and logging
    pub quiet: bool,
    /// Verbosity level
    pub verbose: u8,
}

/// A validated command line, ready to run
#[derive(Debug)]
pub struct Invocation {
    pub command: Command,
    pub settings: Settings,
}

impl Cli {
    /// Check mode-specific arguments
    ///
    /// Missing arguments are reported as clap usage errors so nothing is read
    /// or written for an incomplete command line.
    pub fn resolve(self) -> Result<Invocation, clap::Error> {
        let settings = Settings {
            config: self.config,
            join_compound_hyphens: self.join_compound_hyphens,
            parallel: self.parallel,
            threads: self.threads,
            quiet: self.quiet,
            verbose: self.verbose,
        };

        let command = match self.mode {
            Mode::Tokenize => match (self.src, self.tgt) {
                (Some(src), Some(tgt)) => Command::Tokenize(TokenizeArgs { src, tgt }),
                _ => {
                    return Err(missing_argument(
                        "--src and --tgt are required for 'tokenize' mode",
                    ))
                }
            },
            Mode::Interactive => match self.text.filter(|text| !text.is_empty()) {
                Some(text) => Command::Interactive(InteractiveArgs {
                    text,
                    format: self.format,
                }),
                None => return Err(missing_argument("--text is required for 'interactive' mode")),
            },
        };

        Ok(Invocation { command, settings })
    }
}

fn missing_argument(message: &str) -> clap::Error {
    Cli::command().error(ErrorKind::MissingRequiredArgument, message)
}

impl Settings {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Load the configuration file and apply command-line overrides
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if self.join_compound_hyphens {
            config.pipeline.join_compound_hyphens = true;
        }
        if self.parallel {
            config.performance.parallel = true;
        }
        if let Some(threads) = self.threads {
            config.performance.worker_threads = threads;
        }

        Ok(config)
    }
}

impl Invocation {
    /// Run the command
    pub fn execute(self) -> Result<()> {
        self.settings.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.settings.load_config()?;
        let pipeline = Pipeline::with_config(config.pipeline.clone());

        match &self.command {
            Command::Tokenize(args) => {
                args.execute(&pipeline, &config.performance, self.settings.quiet)?;
            }
            Command::Interactive(args) => {
                args.execute(&pipeline, io::stdout().lock())?;
            }
        }

        Ok(())
    }
}
