// src/logging.rs

use crate::{config::Config, constants::APP_NAME, errors::ChatResult};
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};
use std::time::Duration;

/// Details of one backend round trip.
#[derive(Debug)]
pub struct ApiCallLog {
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: Option<u16>,
    pub elapsed: Duration,
}

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. Keep the returned handle alive for the
/// lifetime of the program.
pub fn init_logging(config: &Config) -> ChatResult<LoggerHandle> {
    let handle = Logger::try_with_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.log_dir)
                .basename(APP_NAME)
                .suppress_timestamp(),
        )
        .append()
        .format(detailed_format)
        .start()?;

    Ok(handle)
}

/// Logs a backend call.
pub fn log_api_call(log: &ApiCallLog) {
    let status = log
        .response_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());

    log::info!(
        "{} - {} - Status: {} - Time: {}ms",
        log.endpoint,
        log.request_summary,
        status,
        log.elapsed.as_millis()
    );
}
