//! Mode-aware event dispatcher.
//!
//! Interprets input and link events one at a time and drives the
//! transport and display sinks. The dispatcher owns the mode state and
//! both sinks; nothing else can touch them.
//!
//! ## Rules
//!
//! | Event                    | Action                                          |
//! |--------------------------|-------------------------------------------------|
//! | Play                     | `transport.play()`                              |
//! | Set                      | `transport.pause()`                             |
//! | Vol+                     | `transport.next()`                              |
//! | Vol-                     | `transport.previous()`                          |
//! | Mode                     | toggle mode, `WakeupFinished(new mode)`         |
//! | Rec                      | toggle recording, `RecordingStart/Stop(100)`    |
//! | link connected (ours)    | `BtConnected(mode)`                             |
//! | link disconnected (ours) | `BtDisconnected(mode)`                          |
//!
//! Everything else, including unknown buttons and other links, is ignored.
//! The volume buttons are wired to track skip; that is the observed
//! product behaviour and is kept as is.

use crate::config::RECORDING_PATTERN_PARAM;
use crate::error::{ConfigError, DispatchError, SinkError, SinkKind};
use crate::event::{ConnectionEvent, Event, LinkState, PeriphMessage};
use crate::input::{IdentityTable, InputEvent, LogicalButton};
use crate::mode::{Mode, ModeState, Snapshot};
use crate::sink::{DisplayDriver, DisplayPattern, TransportControl};

struct Sinks<T, D> {
    transport: T,
    display: D,
}

/// Event dispatcher.
///
/// Created unconfigured; [`init`](Self::init) registers the sinks once.
/// Re-initialisation is rejected with [`ConfigError::AlreadyInitialized`].
pub struct Dispatcher<T, D> {
    state: ModeState,
    sinks: Option<Sinks<T, D>>,
}

impl<T: TransportControl, D: DisplayDriver> Default for Dispatcher<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TransportControl, D: DisplayDriver> Dispatcher<T, D> {
    pub const fn new() -> Self {
        Self {
            state: ModeState::new(),
            sinks: None,
        }
    }

    /// Dispatcher with both sinks already registered.
    pub fn with_sinks(transport: T, display: D) -> Self {
        Self {
            state: ModeState::new(),
            sinks: Some(Sinks { transport, display }),
        }
    }

    /// Register the transport and display sinks.
    ///
    /// Both must be present. Fails without changing anything if either is
    /// missing or if sinks were registered before.
    pub fn init(&mut self, transport: Option<T>, display: Option<D>) -> Result<(), ConfigError> {
        if self.sinks.is_some() {
            warn!("dispatcher already initialised");
            return Err(ConfigError::AlreadyInitialized);
        }
        let (Some(transport), Some(display)) = (transport, display) else {
            return Err(ConfigError::InvalidArgument);
        };
        self.sinks = Some(Sinks { transport, display });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.sinks.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.current()
    }

    /// Decode a raw peripheral message and handle it.
    pub fn handle_message<I: IdentityTable>(
        &mut self,
        msg: &PeriphMessage,
        table: &I,
    ) -> Result<(), DispatchError> {
        self.handle(&Event::decode(msg, table))
    }

    /// Process one event to completion.
    ///
    /// State changes made before a failing sink call are kept.
    pub fn handle(&mut self, event: &Event) -> Result<(), DispatchError> {
        let Some(sinks) = self.sinks.as_mut() else {
            return Err(DispatchError::NotConfigured);
        };

        match event {
            Event::Input(input) => Self::on_input(&mut self.state, sinks, input),
            Event::Connection(conn) => Self::on_connection(&self.state, sinks, conn),
            Event::Other => Ok(()),
        }
    }

    fn on_input(
        state: &mut ModeState,
        sinks: &mut Sinks<T, D>,
        input: &InputEvent,
    ) -> Result<(), DispatchError> {
        let Some(button) = input.identity else {
            debug!("ignoring unmapped input from {:?}", input.source);
            return Ok(());
        };
        info!("[{}] activation", button.tag());

        match button {
            LogicalButton::Play => transport(sinks.transport.play()),
            LogicalButton::Set => transport(sinks.transport.pause()),
            LogicalButton::VolUp => transport(sinks.transport.next()),
            LogicalButton::VolDown => transport(sinks.transport.previous()),
            LogicalButton::Mode => {
                let mode = state.toggle_mode();
                match mode {
                    Mode::Primary => info!("switching to bluetooth mode"),
                    Mode::Secondary => info!("switching to shell mode"),
                }
                display(
                    sinks
                        .display
                        .set_pattern(DisplayPattern::WakeupFinished, mode.as_param()),
                )
            }
            LogicalButton::Record => {
                let pattern = if state.toggle_recording() {
                    DisplayPattern::RecordingStart
                } else {
                    DisplayPattern::RecordingStop
                };
                display(sinks.display.set_pattern(pattern, RECORDING_PATTERN_PARAM))
            }
        }
    }

    fn on_connection(
        state: &ModeState,
        sinks: &mut Sinks<T, D>,
        conn: &ConnectionEvent,
    ) -> Result<(), DispatchError> {
        if conn.origin != sinks.transport.link() {
            debug!("ignoring link event from {:?}", conn.origin);
            return Ok(());
        }

        let pattern = match conn.state {
            LinkState::Connected => {
                info!("Bluetooth connected");
                DisplayPattern::BtConnected
            }
            LinkState::Disconnected => {
                info!("Bluetooth disconnected");
                DisplayPattern::BtDisconnected
            }
        };
        let mode = state.current().mode;
        display(sinks.display.set_pattern(pattern, mode.as_param()))
    }
}

fn transport(res: Result<(), SinkError>) -> Result<(), DispatchError> {
    res.map_err(|_| DispatchError::SinkUnavailable(SinkKind::Transport))
}

fn display(res: Result<(), SinkError>) -> Result<(), DispatchError> {
    res.map_err(|_| DispatchError::SinkUnavailable(SinkKind::Display))
}
