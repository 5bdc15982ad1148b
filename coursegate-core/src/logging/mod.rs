//! Coursegate declarative logging
//!
//! A small structured logger behind the standard `log` facade. Configure it
//! once with a [`LoggingConfig`], then use `log::warn!`, `log::debug!` and
//! friends anywhere.
//!
//! # Example
//!
//! ```rust,no_run
//! use coursegate_core::logging::{LogFormat, LogLevel, LoggingConfig};
//!
//! let config = LoggingConfig::cli()
//!     .with_level(LogLevel::Debug)
//!     .with_context_field("service", "coursegate");
//!
//! coursegate_core::logging::init_logging(&config).unwrap();
//! log::debug!("Loaded {} rights", 12);
//! ```

pub mod config;
pub mod destinations;
pub mod formatter;

pub use config::{LogLevel, LoggingConfig, LoggingError};
pub use destinations::{LogEntry, LogOutput};
pub use formatter::LogFormat;

use std::io::Write;
use std::sync::OnceLock;

static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Install the global logger
///
/// Only the first call has an effect. Later calls keep the logger already in
/// place and return the outcome of that first installation, including its
/// error.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    install_once(&INIT, || install(config))
}

fn install_once(
    cell: &OnceLock<Result<(), String>>,
    install: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    match cell.get_or_init(|| install().map_err(|err| format!("{:#}", err))) {
        Ok(()) => Ok(()),
        Err(message) => Err(anyhow::anyhow!("Failed to install logger: {}", message)),
    }
}

fn install(config: &LoggingConfig) -> anyhow::Result<()> {
    let logger = CoursegateLogger::new(config.clone());
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(config.level.to_level_filter());
    Ok(())
}

/// `log::Log` implementation writing formatted entries to standard streams
struct CoursegateLogger {
    config: LoggingConfig,
    writers: Vec<StreamWriter>,
}

impl CoursegateLogger {
    fn new(config: LoggingConfig) -> Self {
        let mut writers: Vec<StreamWriter> = config
            .outputs
            .iter()
            .map(|output| match output {
                LogOutput::Stdout { format } => StreamWriter::Stdout(
                    format.clone().unwrap_or_else(|| config.format.clone()),
                ),
                LogOutput::Stderr { format } => StreamWriter::Stderr(
                    format.clone().unwrap_or_else(|| config.format.clone()),
                ),
            })
            .collect();

        if writers.is_empty() {
            writers.push(StreamWriter::Stderr(config.format.clone()));
        }

        Self { config, writers }
    }
}

impl log::Log for CoursegateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::from(self.config.level.clone())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry::from_log_record(record, &self.config);
        for writer in &self.writers {
            writer.write_entry(&entry);
        }
    }

    fn flush(&self) {
        for writer in &self.writers {
            writer.flush();
        }
    }
}

enum StreamWriter {
    Stdout(LogFormat),
    Stderr(LogFormat),
}

impl StreamWriter {
    fn write_entry(&self, entry: &LogEntry) {
        // A failed log write has nowhere to be reported.
        let _ = match self {
            StreamWriter::Stdout(format) => {
                writeln!(std::io::stdout().lock(), "{}", format.format_entry(entry))
            }
            StreamWriter::Stderr(format) => {
                writeln!(std::io::stderr().lock(), "{}", format.format_entry(entry))
            }
        };
    }

    fn flush(&self) {
        let _ = match self {
            StreamWriter::Stdout(_) => std::io::stdout().flush(),
            StreamWriter::Stderr(_) => std::io::stderr().flush(),
        };
    }
}
