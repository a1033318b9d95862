//! # Logger
//!
//! Process-wide `tracing` setup for the `japi` binaries and test harnesses.
//! Console output is compact and colourised on stderr; file output goes through a
//! non-blocking rolling appender and may be written as JSON lines.
//! `RUST_LOG` is honoured unless an explicit filter is given with
//! [`LoggerBuilder::env_filter`].
//!
//! ## Example
//!
//! ```rust
//! # use japi_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("japi")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}

/// Configures the global tracing subscriber. A name is required before
/// [`LoggerBuilder::init`] becomes available.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed> {
    name: N,
    config: LoggerConfig,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; the name prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { name: Named(name.into()), config: self.config }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    #[must_use = "The builder must be initialized to take effect"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Programmatic filter directives, e.g. `japi_dispatcher=debug,japi=info`.
    #[must_use = "The builder must be initialized to take effect"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be initialized to take effect"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes logs into `dir`, rotated daily by default.
    #[must_use = "The builder must be initialized to take effect"]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.file = Some(FileOutput {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Ignored unless [`LoggerBuilder::path`] was set.
    #[must_use = "The builder must be initialized to take effect"]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Ignored unless [`LoggerBuilder::path`] was set.
    #[must_use = "The builder must be initialized to take effect"]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Switches file output to JSON lines. Ignored unless [`LoggerBuilder::path`] was set.
    #[must_use = "The builder must be initialized to take effect"]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.config.file.as_mut() {
            file.json = true;
        }
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the whole program: it owns the
    /// worker that flushes file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero retained
    ///   files, a malformed filter, or when no output is enabled.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let LoggerBuilder { name: Named(name), config } = self;
        validate(&name, &config)?;

        let filter = env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console {
            let console = fmt::layer().compact().with_writer(std::io::stderr).with_ansi(true);
            layers.push(console.boxed());
        }

        let guard = match config.file {
            Some(file) => {
                fs::create_dir_all(&file.dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create {}", file.dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(file.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(file.max_files)
                    .build(&file.dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let layer = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(if file.json { layer.json().boxed() } else { layer.boxed() });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled; enable the console or set a log path".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, file = guard.is_some(), "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber. Dropping it flushes pending file output.
#[must_use = "Dropping this handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be initialized to take effect"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { name: Unnamed, config: LoggerConfig::default() }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

fn validate(name: &str, config: &LoggerConfig) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.file.as_ref().is_some_and(|f| f.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match config.env_filter.as_deref() {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}
