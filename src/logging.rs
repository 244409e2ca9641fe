//! Logging setup
//!
//! The library only emits `tracing` events; embedders that want them on
//! stderr and in a rolling log file call `init_logging` once at startup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Directory for rolling log files
const LOG_DIR: &str = "logs";

/// Initialize the global tracing subscriber
///
/// Respects `RUST_LOG`, defaulting to `info`. Returns the guard for the
/// non-blocking file writer; dropping it stops the background flusher, so
/// callers keep it alive for the process lifetime.
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, "trainer-sessions.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}
