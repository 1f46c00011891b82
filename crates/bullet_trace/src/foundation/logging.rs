//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize logging with a default level, still overridable through `RUST_LOG`
///
/// Safe to call more than once; if a logger is already installed it is kept
/// and the failed attempt is reported through it at debug level.
pub fn init_with_level(level: log::LevelFilter) {
    if let Err(e) = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
    {
        debug!("Logger already initialized, keeping it: {}", e);
    }
}
