//! Logging for the `hsk` command line tool.
//!
//! Diagnostics go to stderr (or a file) through `tracing`; stdout is
//! reserved for the command summaries. Because the values this tool
//! inspects are passwords, personal dates, and phone numbers, events
//! never carry raw input directly. Call sites wrap anything a
//! participant typed in [`redact_value`], which only passes the text
//! through after `--log-data` was given on the command line.
//!
//! Levels in practice: `warn` marks rejected values and fallback
//! decodes, `info` tracks command progress, `debug` narrates
//! individual rule checks.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Shape of a rendered log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Full multi-line rendering for humans, the default.
    #[default]
    Pretty,
    /// One event per line for terse terminals and scripts.
    Compact,
    /// Newline-delimited JSON for log collectors.
    Json,
}

/// Subscriber settings assembled from the command line.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most detailed level that will be emitted.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when it is set.
    pub use_env_filter: bool,
    /// ANSI color in the rendered output.
    pub with_ansi: bool,
    /// Rendering applied to each event.
    pub format: LogFormat,
    /// Append events to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Permit participant-entered text to appear verbatim in events.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count onto a level: no flag stays at info, one `-v`
    /// opens debug, two or more open trace.
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level_filter = match verbosity {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self {
            level_filter,
            ..Self::default()
        }
    }
}

/// Install the global `tracing` subscriber. Call once, before the
/// first command runs.
///
/// # Errors
///
/// Fails when the log file cannot be opened for appending.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        install_subscriber(config, LogSink::new(file));
    } else {
        install_subscriber(config, io::stderr);
    }
    Ok(())
}

fn install_subscriber<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);

    let format_layer = match config.format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_ansi(config.with_ansi)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .without_time()
            .with_target(false)
            .with_ansi(config.with_ansi)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(level_directives(config))
        .with(format_layer)
        .init();
}

/// Filter for the configured level, or whatever `RUST_LOG` asks for
/// when no explicit level came from the command line.
fn level_directives(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    // Third-party crates stay at warn so rule traces remain readable
    let ours = format!(
        "warn,hsk={level},hsk_cli={level},hsk_model={level},\
         hsk_normalize={level},hsk_storage={level},hsk_validate={level}"
    );
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&ours))
    } else {
        EnvFilter::new(&ours)
    }
}

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Stands in for participant input while `--log-data` is off.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// True when `--log-data` asked for raw values in the log stream.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Passes `value` through when raw logging is on, otherwise the
/// [`REDACTED_VALUE`] placeholder.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Appends every event to one shared file handle.
#[derive(Clone)]
struct LogSink {
    file: Arc<Mutex<File>>,
}

impl LogSink {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = LogSinkHandle;

    fn make_writer(&'a self) -> Self::Writer {
        LogSinkHandle(Arc::clone(&self.file))
    }
}

struct LogSinkHandle(Arc<Mutex<File>>);

impl LogSinkHandle {
    fn file(&self) -> io::Result<MutexGuard<'_, File>> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))
    }
}

impl Write for LogSinkHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file()?.flush()
    }
}
