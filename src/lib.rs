//! Input dispatch logic for the bt-sink-remote firmware.
//!
//! Everything here is pure logic that runs on the host as well as on the
//! nRF52840: decoding peripheral messages, resolving button identities,
//! tracking the operating mode and driving the transport and display
//! sinks.
//!
//! Usage: `cargo test --lib` / `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and wires these modules to Embassy tasks.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod input;
pub mod mode;
pub mod sink;

pub use dispatcher::Dispatcher;
pub use error::{ConfigError, DispatchError, SinkError, SinkKind};
pub use event::{ConnectionEvent, Event, LinkId, LinkState, PeriphMessage};
pub use input::{ButtonMap, IdentityTable, InputEvent, LogicalButton};
pub use mode::{Mode, Snapshot};
pub use sink::{DisplayDriver, DisplayPattern, DisplayRequest, TransportCommand, TransportControl};
