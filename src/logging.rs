use anyhow::Context;
use flexi_logger::{Logger, LoggerHandle};
use log::info;

const LOG_LEVEL_ENV: &str = "SCHOOLADMIND_LOG";

/// Starts a stderr logger. stdout belongs to the request/response protocol
/// and must never see a log line. The returned handle has to stay alive for
/// the life of the process.
pub fn init() -> anyhow::Result<LoggerHandle> {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());
    let handle = Logger::try_with_str(&level)
        .with_context(|| format!("invalid {LOG_LEVEL_ENV} level: {level}"))?
        .log_to_stderr()
        .start()
        .context("failed to start logger")?;
    info!(
        "schooladmind {} starting (log level {level})",
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
