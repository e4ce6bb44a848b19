use crate::models::error::SError;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber writing to a daily rolling file in `log_dir`.
/// `RUST_LOG` overrides the default `info` level. Keep the guard alive for as long
/// as logs should be flushed.
pub fn init(log_dir: &Utf8Path, log_prefix: &str) -> Result<WorkerGuard, SError> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, log_prefix));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| SError::ConfigError(e.to_string()))?;

    tracing::info!("logging to {log_dir}/{log_prefix}");
    Ok(guard)
}
