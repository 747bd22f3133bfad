use std::path::{Path, PathBuf};

use tracing_subscriber::fmt::format::FmtSpan;

use super::*;

fn init_config<'a>(log_dir: Option<&'a Path>) -> LoggingInitConfig<'a> {
    LoggingInitConfig {
        service_base_name: "ferry-dbtool",
        service_label: None,
        log_dir,
        log_file_prefix: None,
        json_format: None,
        default_log_prefix: "dbtool",
        console_target: ConsoleTarget::Stderr,
    }
}

#[test]
fn test_format_service_name() {
    assert_eq!(format_service_name("ferry", None), "ferry");
    assert_eq!(format_service_name("ferry", Some("dev")), "ferry%dev");
}

#[test]
fn test_json_flag() {
    assert_eq!(LogFormat::from_json_flag(true), LogFormat::Json);
    assert_eq!(LogFormat::from_json_flag(false), LogFormat::Compact);
}

#[test]
fn test_builder() {
    let file = FileLoggingConfig::new(PathBuf::from("/var/log/ferry"), "ferry".to_owned())
        .with_rotation(Rotation::HOURLY)
        .with_format(LogFormat::Json);
    let config = LoggerConfig::new("bridge")
        .with_console_target(ConsoleTarget::Stderr)
        .with_span_events(FmtSpan::NONE)
        .with_file_logging(file);

    assert_eq!(config.service_name, "bridge");
    assert_eq!(config.console.target, ConsoleTarget::Stderr);
    assert_eq!(config.console.format, LogFormat::Compact);
    let file = config.file.unwrap();
    assert_eq!(file.file_name_prefix, "ferry");
    assert_eq!(file.format, LogFormat::Json);
}

#[test]
fn test_no_file_layer_without_dir() {
    let config = init_config(None).to_logger_config();
    assert_eq!(config.service_name, "ferry-dbtool");
    assert_eq!(config.console.target, ConsoleTarget::Stderr);
    assert!(config.file.is_none());
}

#[test]
fn test_file_layer_follows_console_format() {
    let dir = PathBuf::from("logs");
    let mut init = init_config(Some(&dir));
    init.service_label = Some("prod");
    init.json_format = Some(true);

    let config = init.to_logger_config();
    assert_eq!(config.service_name, "ferry-dbtool%prod");
    assert_eq!(config.console.format, LogFormat::Json);
    let file = config.file.unwrap();
    assert_eq!(file.directory, dir);
    assert_eq!(file.file_name_prefix, "dbtool");
    assert_eq!(file.format, LogFormat::Json);
}
