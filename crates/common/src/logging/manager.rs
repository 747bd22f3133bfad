//! Subscriber assembly.

use std::io;

use tracing::{info, Level, Subscriber};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    fmt::{format::FmtSpan, layer, writer::BoxMakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use super::types::{ConsoleTarget, LogFormat, LoggerConfig};

/// `INFO` unless `RUST_LOG` says otherwise.
pub fn default_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// Installs the global subscriber described by `config`.
///
/// Fails if a global subscriber is already set.
pub fn init(config: LoggerConfig) -> Result<(), TryInitError> {
    let console_writer = match config.console.target {
        ConsoleTarget::Stdout => BoxMakeWriter::new(io::stdout),
        ConsoleTarget::Stderr => BoxMakeWriter::new(io::stderr),
    };
    let console = fmt_layer(
        config.console.format,
        console_writer,
        true,
        config.console.span_events.clone(),
    );

    let file = config.file.as_ref().map(|file| {
        let appender = RollingFileAppender::new(
            file.rotation.clone(),
            &file.directory,
            &file.file_name_prefix,
        );
        fmt_layer(file.format, BoxMakeWriter::new(appender), false, FmtSpan::NONE)
    });

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()?;

    info!(service = %config.service_name, "logging initialized");
    Ok(())
}

/// One formatting layer with its own copy of the default filter.
fn fmt_layer<S>(
    format: LogFormat,
    writer: BoxMakeWriter,
    ansi: bool,
    span_events: FmtSpan,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let base = layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_span_events(span_events);
    match format {
        LogFormat::Compact => base.compact().with_filter(default_filter()).boxed(),
        LogFormat::Json => base.json().with_filter(default_filter()).boxed(),
    }
}
