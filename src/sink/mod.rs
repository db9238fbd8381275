//! Command sinks - the two collaborators the dispatcher drives.
//!
//! - **Transport control**: play / pause / next / previous on the
//!   Bluetooth link.
//! - **Display pattern driver**: shows a pattern with an integer parameter.
//!
//! Calls are fire-and-forget; the only failure a sink reports is that it
//! could not take the command at all.

pub mod queue;
pub mod render;
pub mod transport;

use crate::error::SinkError;
use crate::event::LinkId;

pub use queue::{LinkStatus, QueuedTransport, SignalDisplay};
pub use transport::TransportCommand;

/// Playback transport on the Bluetooth link.
pub trait TransportControl {
    /// Link whose connection events belong to this transport.
    fn link(&self) -> LinkId;

    fn play(&mut self) -> Result<(), SinkError>;
    fn pause(&mut self) -> Result<(), SinkError>;
    fn next(&mut self) -> Result<(), SinkError>;
    fn previous(&mut self) -> Result<(), SinkError>;
}

/// Patterns the display driver can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayPattern {
    WakeupFinished,
    RecordingStart,
    RecordingStop,
    BtDisconnected,
    BtConnected,
    Unknown,
}

/// One `set_pattern` call, as queued for the display task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayRequest {
    pub pattern: DisplayPattern,
    pub param: i32,
}

impl Default for DisplayRequest {
    fn default() -> Self {
        Self {
            pattern: DisplayPattern::Unknown,
            param: 0,
        }
    }
}

/// Display pattern driver.
pub trait DisplayDriver {
    fn set_pattern(&mut self, pattern: DisplayPattern, param: i32) -> Result<(), SinkError>;
}

impl<T: TransportControl + ?Sized> TransportControl for &mut T {
    fn link(&self) -> LinkId {
        (**self).link()
    }

    fn play(&mut self) -> Result<(), SinkError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), SinkError> {
        (**self).pause()
    }

    fn next(&mut self) -> Result<(), SinkError> {
        (**self).next()
    }

    fn previous(&mut self) -> Result<(), SinkError> {
        (**self).previous()
    }
}

impl<D: DisplayDriver + ?Sized> DisplayDriver for &mut D {
    fn set_pattern(&mut self, pattern: DisplayPattern, param: i32) -> Result<(), SinkError> {
        (**self).set_pattern(pattern, param)
    }
}
