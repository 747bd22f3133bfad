//! Logging setup for binaries driven by the `[logging]` config table.

use std::path::Path;

use tracing::info;
use tracing_subscriber::util::TryInitError;

use super::{
    format_service_name, init, ConsoleTarget, FileLoggingConfig, LogFormat, LoggerConfig,
};

/// Logging settings as a binary sees them after reading its config.
#[derive(Debug)]
pub struct LoggingInitConfig<'a> {
    pub service_base_name: &'a str,
    /// Appended to the service name, e.g. `prod`.
    pub service_label: Option<&'a str>,
    /// File logging is enabled only when this is set.
    pub log_dir: Option<&'a Path>,
    pub log_file_prefix: Option<&'a str>,
    pub json_format: Option<bool>,
    /// Used when `log_file_prefix` is unset.
    pub default_log_prefix: &'a str,
    pub console_target: ConsoleTarget,
}

impl LoggingInitConfig<'_> {
    pub fn to_logger_config(&self) -> LoggerConfig {
        let format = LogFormat::from_json_flag(self.json_format.unwrap_or(false));
        let mut config =
            LoggerConfig::new(format_service_name(self.service_base_name, self.service_label))
                .with_console_format(format)
                .with_console_target(self.console_target);

        if let Some(dir) = self.log_dir {
            let prefix = self.log_file_prefix.unwrap_or(self.default_log_prefix);
            config = config.with_file_logging(
                FileLoggingConfig::new(dir.to_path_buf(), prefix.to_owned()).with_format(format),
            );
        }

        config
    }
}

/// Builds the logger config and installs it.
pub fn init_logging_from_config(config: LoggingInitConfig<'_>) -> Result<(), TryInitError> {
    let config = config.to_logger_config();
    let file = config.file.clone();

    init(config)?;

    if let Some(file) = file {
        info!(
            log_dir = %file.directory.display(),
            log_prefix = %file.file_name_prefix,
            "file logging enabled"
        );
    }
    Ok(())
}
