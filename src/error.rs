//! Error types for bt-sink-remote.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Errors returned while registering the sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A sink handle was missing.
    InvalidArgument,

    /// Sinks are already registered; they stay as they were.
    AlreadyInitialized,
}

/// Which sink a command was addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkKind {
    Transport,
    Display,
}

/// Failure reported by a sink implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// The sink could not accept the command (queue full, link gone).
    Unavailable,
}

/// Errors returned by [`Dispatcher::handle`](crate::dispatcher::Dispatcher::handle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// `handle` was called before `init` registered both sinks.
    NotConfigured,

    /// A registered sink could not take the command. Not retried.
    SinkUnavailable(SinkKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidArgument => f.write_str("missing sink handle"),
            ConfigError::AlreadyInitialized => f.write_str("sinks already registered"),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Transport => f.write_str("transport"),
            SinkKind::Display => f.write_str("display"),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Unavailable => f.write_str("sink unavailable"),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NotConfigured => f.write_str("dispatcher not initialised"),
            DispatchError::SinkUnavailable(kind) => write!(f, "{} sink unavailable", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_error_names_the_sink() {
        let err = DispatchError::SinkUnavailable(SinkKind::Display);
        assert_eq!(err.to_string(), "display sink unavailable");
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(ConfigError::InvalidArgument.to_string(), "missing sink handle");
        assert_eq!(
            ConfigError::AlreadyInitialized.to_string(),
            "sinks already registered"
        );
    }

    #[test]
    fn sink_error_message() {
        assert_eq!(SinkError::Unavailable.to_string(), "sink unavailable");
    }
}
