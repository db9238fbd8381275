//! Event source messages and their decoding.
//!
//! Peripheral tasks publish [`PeriphMessage`]s: a source type, a command
//! code, a data payload and the handle of the peripheral that sent it.
//! [`Event::decode`] turns them into the typed events the dispatcher
//! consumes, resolving input identities exactly once.

use crate::input::{IdentityTable, InputEvent, InputKind, InputSource};

/// Identity of a Bluetooth link handle.
///
/// Connection events carry the id of the link that produced them; the
/// dispatcher compares it with the link of its registered transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkId(pub u8);

impl LinkId {
    /// Origin used by messages that do not come from a link.
    pub const NONE: LinkId = LinkId(0);
}

/// Bluetooth link state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Connected,
    Disconnected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionEvent {
    pub state: LinkState,
    pub origin: LinkId,
}

/// Everything the dispatcher can be handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Input(InputEvent),
    Connection(ConnectionEvent),
    /// Any message shape the dispatcher does not act on.
    Other,
}

/// Peripheral family that published a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceType {
    Touch,
    Button,
    AdcButton,
    Bluetooth,
    Other(u8),
}

/// Command code carried by a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Tap,
    Pressed,
    Released,
    LongPressed,
    Connected,
    Disconnected,
    Other(u16),
}

/// Raw message as published by a peripheral task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriphMessage {
    pub source_type: SourceType,
    pub cmd: Command,
    /// Raw input id for input peripherals, unused otherwise.
    pub data: i32,
    pub origin: LinkId,
}

impl PeriphMessage {
    /// Activation of an input peripheral.
    pub const fn input(source_type: SourceType, cmd: Command, data: i32) -> Self {
        Self {
            source_type,
            cmd,
            data,
            origin: LinkId::NONE,
        }
    }

    /// Link state change reported by the Bluetooth peripheral `origin`.
    pub const fn link(state: LinkState, origin: LinkId) -> Self {
        let cmd = match state {
            LinkState::Connected => Command::Connected,
            LinkState::Disconnected => Command::Disconnected,
        };
        Self {
            source_type: SourceType::Bluetooth,
            cmd,
            data: 0,
            origin,
        }
    }
}

impl Event {
    /// Classify a raw message, resolving input identities through `table`.
    ///
    /// Any input source combined with any activation command is accepted,
    /// so a touch source reporting `Pressed` still counts as an activation.
    pub fn decode<T: IdentityTable>(msg: &PeriphMessage, table: &T) -> Event {
        let source = match msg.source_type {
            SourceType::Touch => Some(InputSource::Touch),
            SourceType::Button => Some(InputSource::Button),
            SourceType::AdcButton => Some(InputSource::AdcButton),
            SourceType::Bluetooth | SourceType::Other(_) => None,
        };

        if let Some(source) = source {
            let kind = match msg.cmd {
                Command::Tap => InputKind::Tap,
                Command::Pressed => InputKind::Pressed,
                _ => return Event::Other,
            };
            return Event::Input(InputEvent {
                source,
                kind,
                identity: table.resolve(msg.data),
            });
        }

        if msg.source_type == SourceType::Bluetooth {
            let state = match msg.cmd {
                Command::Connected => LinkState::Connected,
                Command::Disconnected => LinkState::Disconnected,
                _ => return Event::Other,
            };
            return Event::Connection(ConnectionEvent {
                state,
                origin: msg.origin,
            });
        }

        Event::Other
    }
}

impl From<InputEvent> for Event {
    fn from(ev: InputEvent) -> Self {
        Event::Input(ev)
    }
}

impl From<ConnectionEvent> for Event {
    fn from(ev: ConnectionEvent) -> Self {
        Event::Connection(ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonMap, LogicalButton};

    const MAP: ButtonMap = ButtonMap::new(1, 2, 3, 4, 5, 6);

    #[test]
    fn touch_tap_resolves_identity() {
        let msg = PeriphMessage::input(SourceType::Touch, Command::Tap, 5);
        assert_eq!(
            Event::decode(&msg, &MAP),
            Event::Input(InputEvent::new(
                InputSource::Touch,
                InputKind::Tap,
                LogicalButton::Mode
            ))
        );
    }

    #[test]
    fn mixed_source_and_activation_is_accepted() {
        let msg = PeriphMessage::input(SourceType::AdcButton, Command::Tap, 1);
        assert!(matches!(
            Event::decode(&msg, &MAP),
            Event::Input(InputEvent {
                source: InputSource::AdcButton,
                identity: Some(LogicalButton::Play),
                ..
            })
        ));
    }

    #[test]
    fn unknown_payload_keeps_input_shape() {
        let msg = PeriphMessage::input(SourceType::Button, Command::Pressed, 99);
        assert_eq!(
            Event::decode(&msg, &MAP),
            Event::Input(InputEvent::unknown(InputSource::Button, InputKind::Pressed))
        );
    }

    #[test]
    fn release_and_long_press_are_other() {
        for cmd in [Command::Released, Command::LongPressed, Command::Other(7)] {
            let msg = PeriphMessage::input(SourceType::Button, cmd, 1);
            assert_eq!(Event::decode(&msg, &MAP), Event::Other);
        }
    }

    #[test]
    fn bluetooth_link_changes_decode_with_origin() {
        let msg = PeriphMessage::link(LinkState::Disconnected, LinkId(3));
        assert_eq!(
            Event::decode(&msg, &MAP),
            Event::Connection(ConnectionEvent {
                state: LinkState::Disconnected,
                origin: LinkId(3),
            })
        );
    }

    #[test]
    fn bluetooth_activation_is_other() {
        let msg = PeriphMessage {
            source_type: SourceType::Bluetooth,
            cmd: Command::Pressed,
            data: 1,
            origin: LinkId(1),
        };
        assert_eq!(Event::decode(&msg, &MAP), Event::Other);
    }

    #[test]
    fn foreign_peripheral_is_other() {
        let msg = PeriphMessage {
            source_type: SourceType::Other(9),
            cmd: Command::Connected,
            data: 0,
            origin: LinkId(1),
        };
        assert_eq!(Event::decode(&msg, &MAP), Event::Other);
    }
}
