//! Logging configuration for libris.
//!
//! The subscriber is installed once at process start and lives for the whole
//! process; nothing else touches global logging state afterwards.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Normal output level (info and above).
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
}

impl Verbosity {
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Initialize the logging system.
///
/// Call once at application startup. The level can be controlled via the
/// `verbosity` parameter or the `RUST_LOG` environment variable, which takes
/// precedence.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("libris={}", verbosity.to_level_filter());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr),
    );

    // Ignore the error if a subscriber is already set (tests call this repeatedly)
    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(Verbosity::Quiet.to_level_filter(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level_filter(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level_filter(), Level::DEBUG);
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(Verbosity::Normal);
        init_logging(Verbosity::Verbose);
    }
}
