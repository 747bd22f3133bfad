//! Logging configuration.

use std::path::PathBuf;

use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::format::FmtSpan;

/// Line format of a log layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

/// Stream the console layer writes to.
///
/// Tools that print results on stdout log to stderr so their output stays
/// parseable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub target: ConsoleTarget,
    pub format: LogFormat,
    /// Span lifecycle events to emit. Defaults to `CLOSE`, which records
    /// span durations.
    pub span_events: FmtSpan,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            target: ConsoleTarget::default(),
            format: LogFormat::default(),
            span_events: FmtSpan::CLOSE,
        }
    }
}

/// Rolling log files under `directory`, named `<prefix>.<period>`.
#[derive(Debug, Clone)]
pub struct FileLoggingConfig {
    pub directory: PathBuf,
    pub file_name_prefix: String,
    pub rotation: Rotation,
    pub format: LogFormat,
}

impl FileLoggingConfig {
    /// Daily rotated compact logs.
    pub fn new(directory: PathBuf, file_name_prefix: String) -> Self {
        Self {
            directory,
            file_name_prefix,
            rotation: Rotation::DAILY,
            format: LogFormat::Compact,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Recorded on the first event after initialization.
    pub service_name: String,
    pub console: ConsoleConfig,
    pub file: Option<FileLoggingConfig>,
}

impl LoggerConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            console: ConsoleConfig::default(),
            file: None,
        }
    }

    pub fn with_console_format(mut self, format: LogFormat) -> Self {
        self.console.format = format;
        self
    }

    pub fn with_console_target(mut self, target: ConsoleTarget) -> Self {
        self.console.target = target;
        self
    }

    pub fn with_span_events(mut self, span_events: FmtSpan) -> Self {
        self.console.span_events = span_events;
        self
    }

    pub fn with_file_logging(mut self, file: FileLoggingConfig) -> Self {
        self.file = Some(file);
        self
    }
}
