use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber for the binaries.
///
/// The filter comes from `RUST_LOG`, defaulting to [`DEFAULT_FILTER`], so a
/// plain run leaves stderr to the diagnostic lines. Records emitted through
/// the `log` facade are forwarded to the same subscriber. Colour is only used
/// on a terminal. Calling this twice is harmless.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
