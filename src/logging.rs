//! Log setup
//!
//! The TUI owns the terminal, so log output goes to a file under the base
//! directory instead of stdout. The filter comes from `COINSEND_LOG` and
//! defaults to `info`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::CoinSendPaths;
use crate::error::CoinSendError;

/// Environment variable holding the log filter directives
pub const LOG_FILTER_ENV: &str = "COINSEND_LOG";

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "coinsend.log";

/// Install the global subscriber
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the background writer.
pub fn init_logging(paths: &CoinSendPaths) -> Result<WorkerGuard, CoinSendError> {
    paths.ensure_directories()?;

    let appender = tracing_appender::rolling::never(paths.log_dir(), LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| CoinSendError::Config(format!("Failed to initialise logging: {}", e)))?;

    tracing::debug!(dir = %paths.log_dir().display(), "logging initialised");
    Ok(guard)
}
