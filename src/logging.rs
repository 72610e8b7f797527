use crate::errors::{AppError, AppResult};
use std::io::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Environment variable holding a tracing filter, e.g. `RBELLS_LOG=debug`.
pub const LOG_ENV: &str = "RBELLS_LOG";

/// Install the stderr tracing subscriber.
///
/// `--verbose` forces `debug`; otherwise `RBELLS_LOG` is honoured and the
/// default is `warn`, which keeps the board output clean.
pub fn init(verbose: bool) -> AppResult<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| AppError::Other(err.to_string()))
}
