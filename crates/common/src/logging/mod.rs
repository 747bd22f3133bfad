//! `tracing-subscriber` setup shared by the ferry binaries.
//!
//! A console layer is always installed. A daily-rolling file layer is added
//! when a log directory is configured. Both honour `RUST_LOG`.

mod manager;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use manager::{default_filter, init};
pub use service::{init_logging_from_config, LoggingInitConfig};
pub use tracing_appender::rolling::Rotation;
pub use types::{ConsoleConfig, ConsoleTarget, FileLoggingConfig, LogFormat, LoggerConfig};

/// `base%label`, or just `base` without a label.
pub fn format_service_name(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
