//! # wordify-cli
//!
//! Command-line front end for `wordify-core`.
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration (defaults → file → `WORDIFY_*`)
//! 3. Initialize tracing (stderr, so stdout stays pipe-friendly)
//! 4. Dispatch the command
//!
//! ## Usage
//! ```text
//! wordify convert 1234.56
//! wordify convert 1000 --register chinese
//! wordify convert 12.3 --register english --caps --no-copy
//! wordify interactive --json < amounts.txt
//! wordify config
//! ```

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::clipboard::SystemClipboard;
use crate::commands::OutputOptions;
use crate::config::{CliConfig, Selection};
use crate::error::CliResult;

/// Spell out cheque amounts in English words and Chinese financial numerals.
#[derive(Debug, Parser)]
#[command(name = "wordify", version, about)]
pub struct Cli {
    /// Config file (defaults to $WORDIFY_CONFIG, then ./wordify.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a single amount
    Convert(ConvertArgs),

    /// Convert amounts read from stdin, one per line
    Interactive(OutputArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Amount such as 1234.56 or 1,000
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Registers to print
    #[arg(short, long, value_enum)]
    pub register: Option<Selection>,

    /// Print English words in ALL CAPS
    #[arg(long)]
    pub caps: bool,

    /// Copy the result to the clipboard
    #[arg(long, conflicts_with = "no_copy")]
    pub copy: bool,

    /// Leave the clipboard alone
    #[arg(long)]
    pub no_copy: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    /// Merges flags over configuration.
    pub fn resolve(&self, config: &CliConfig) -> OutputOptions {
        OutputOptions {
            selection: self.register.unwrap_or(config.default_register),
            caps: self.caps,
            copy: !self.no_copy && (self.copy || config.auto_copy),
            copy_caps: config.copy_caps,
            json: self.json,
        }
    }
}

/// Runs the binary and maps failures to an exit status.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let err = error::CliError::from(err);
            eprintln!("error: {}", err);
            return ExitCode::from(err.code.exit_code());
        }
    };

    init_tracing(&config.log_filter);
    debug!(?config, "configuration loaded");

    match dispatch(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.code.exit_code())
        }
    }
}

fn dispatch(command: Command, config: &CliConfig) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut clipboard = clipboard_for(&command, config);

    let result = match command {
        Command::Convert(args) => {
            let options = args.output.resolve(config);
            commands::convert::convert(&args.amount, &options, &mut clipboard, &mut out)
        }
        Command::Interactive(args) => {
            let options = args.resolve(config);
            info!("reading amounts from stdin");
            let stdin = io::stdin();
            commands::interactive::session(stdin.lock(), &mut out, &options, &mut clipboard)
        }
        Command::Config => commands::config::show(config, &mut out),
    };

    result?;
    out.flush()?;
    Ok(())
}

/// One-shot conversions exit right after copying, so they hold clipboard
/// ownership; sessions stay alive and keep their handle open instead.
fn clipboard_for(command: &Command, config: &CliConfig) -> SystemClipboard {
    match command {
        Command::Convert(_) => SystemClipboard::holding(config.clipboard_hold()),
        Command::Interactive(_) | Command::Config => SystemClipboard::default(),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=wordify=trace` - Trace for this binary only
/// - Default: the configured `log_filter`
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
