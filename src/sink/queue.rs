//! Sinks backed by Embassy sync primitives.
//!
//! The dispatcher task never awaits a sink. Transport commands go into a
//! bounded channel drained by the BLE link task, and display requests go
//! into a signal read by the display task (latest request wins).
//!
//! The link task raises a [`LinkStatus`] flag while a peer is connected;
//! commands issued while it is down are refused rather than queued.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Sender, TrySendError};
use embassy_sync::signal::Signal;

use super::{DisplayDriver, DisplayPattern, DisplayRequest, TransportCommand, TransportControl};
use crate::error::SinkError;
use crate::event::LinkId;

/// Whether the link task currently has a connected peer.
#[derive(Debug, Default)]
pub struct LinkStatus {
    up: AtomicBool,
}

impl LinkStatus {
    /// Starts down.
    pub const fn new() -> Self {
        Self {
            up: AtomicBool::new(false),
        }
    }

    pub fn set_up(&self, up: bool) {
        self.up.store(up, Ordering::Release);
    }

    pub fn is_up(&self) -> bool {
        self.up.load(Ordering::Acquire)
    }
}

/// Transport that queues commands for the link task.
pub struct QueuedTransport<'a, M: RawMutex, const N: usize> {
    link: LinkId,
    status: &'a LinkStatus,
    tx: Sender<'a, M, TransportCommand, N>,
}

impl<'a, M: RawMutex, const N: usize> QueuedTransport<'a, M, N> {
    pub fn new(
        link: LinkId,
        status: &'a LinkStatus,
        tx: Sender<'a, M, TransportCommand, N>,
    ) -> Self {
        Self { link, status, tx }
    }

    fn push(&self, cmd: TransportCommand) -> Result<(), SinkError> {
        if !self.status.is_up() {
            warn!("link down, dropping {:?}", cmd);
            return Err(SinkError::Unavailable);
        }
        match self.tx.try_send(cmd) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(cmd)) => {
                warn!("transport queue full, dropping {:?}", cmd);
                Err(SinkError::Unavailable)
            }
        }
    }
}

impl<M: RawMutex, const N: usize> TransportControl for QueuedTransport<'_, M, N> {
    fn link(&self) -> LinkId {
        self.link
    }

    fn play(&mut self) -> Result<(), SinkError> {
        self.push(TransportCommand::Play)
    }

    fn pause(&mut self) -> Result<(), SinkError> {
        self.push(TransportCommand::Pause)
    }

    fn next(&mut self) -> Result<(), SinkError> {
        self.push(TransportCommand::Next)
    }

    fn previous(&mut self) -> Result<(), SinkError> {
        self.push(TransportCommand::Previous)
    }
}

/// Display driver that hands the latest request to the display task.
pub struct SignalDisplay<'a, M: RawMutex> {
    signal: &'a Signal<M, DisplayRequest>,
}

impl<'a, M: RawMutex> SignalDisplay<'a, M> {
    pub fn new(signal: &'a Signal<M, DisplayRequest>) -> Self {
        Self { signal }
    }
}

impl<M: RawMutex> DisplayDriver for SignalDisplay<'_, M> {
    fn set_pattern(&mut self, pattern: DisplayPattern, param: i32) -> Result<(), SinkError> {
        self.signal.signal(DisplayRequest { pattern, param });
        Ok(())
    }
}
