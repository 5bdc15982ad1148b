//! Coursegate CLI - inspect what a rights snapshot grants.
//!
//! ```bash
//! coursegate check --rights alice.json --department dept-1 content:courses:manage
//! coursegate flags --rights alice.json --only-granted
//! coursegate validate "content:*" "content::read"
//! coursegate explain canViewPII
//! ```
//!
//! See `coursegate --help` for all available commands and options.

mod commands;

use clap::{Parser, Subcommand};
use commands::{check::CheckMode, Context};
use coursegate_core::config::{CoursegateConfig, DEFAULT_CONFIG_FILE};
use coursegate_core::logging::{init_logging, LogLevel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursegate", about = "Coursegate permission and feature-flag inspector", version)]
struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check capabilities against a rights snapshot (exit 0 granted, 2 denied)
    Check {
        /// Rights snapshot JSON file
        #[arg(long)]
        rights: PathBuf,

        /// Department to check in (defaults to the snapshot's active department)
        #[arg(long)]
        department: Option<String>,

        /// Whether any or all of the capabilities must be granted
        #[arg(long, value_enum, default_value_t = CheckMode::All)]
        mode: CheckMode,

        #[arg(required = true)]
        capabilities: Vec<String>,
    },

    /// Print the feature flags a rights snapshot derives
    Flags {
        /// Rights snapshot JSON file
        #[arg(long)]
        rights: PathBuf,

        /// Department to derive in (defaults to the snapshot's active department)
        #[arg(long)]
        department: Option<String>,

        /// Only list flags that are set
        #[arg(long)]
        only_granted: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate capability strings (exit 1 if any is malformed)
    Validate {
        #[arg(required = true)]
        capabilities: Vec<String>,
    },

    /// Print the rule that defines a feature flag
    Explain {
        /// Flag name, e.g. canViewPII
        flag: String,
    },
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = CoursegateConfig::load_from(&cli.config)?;

    let mut logging = config.logging.to_logging_config()?;
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    init_logging(&logging)?;
    log::debug!("Loaded configuration from {}", cli.config.display());

    let ctx = Context::new(config);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Check { rights, department, mode, capabilities } => {
            commands::check::run(&ctx, &rights, department.as_deref(), mode, &capabilities, &mut out)
        }
        Commands::Flags { rights, department, only_granted, json } => {
            commands::flags::run(&ctx, &rights, department.as_deref(), only_granted, json, &mut out)
        }
        Commands::Validate { capabilities } => commands::validate::run(&capabilities, &mut out),
        Commands::Explain { flag } => commands::explain::run(&flag, &mut out),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(i32::from(code)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
