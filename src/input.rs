//! Input events and the board's input identity table.
//!
//! Upstream peripheral drivers report a raw payload per activation. The
//! [`IdentityTable`] turns that payload into a [`LogicalButton`]; the
//! dispatcher only ever sees the resolved identity.

use crate::config;

/// Logical buttons the dispatcher understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalButton {
    Play,
    Set,
    VolUp,
    VolDown,
    Mode,
    Record,
}

impl LogicalButton {
    /// Every logical button, in table priority order.
    pub const ALL: [LogicalButton; 6] = [
        LogicalButton::Play,
        LogicalButton::Set,
        LogicalButton::VolUp,
        LogicalButton::VolDown,
        LogicalButton::Mode,
        LogicalButton::Record,
    ];

    /// Short tag used in log lines.
    pub const fn tag(self) -> &'static str {
        match self {
            LogicalButton::Play => "Play",
            LogicalButton::Set => "Set",
            LogicalButton::VolUp => "Vol+",
            LogicalButton::VolDown => "Vol-",
            LogicalButton::Mode => "Mode",
            LogicalButton::Record => "Rec",
        }
    }
}

/// Peripheral family an input event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    Touch,
    Button,
    AdcButton,
}

/// How the input was activated. Both kinds are handled the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKind {
    Tap,
    Pressed,
}

/// A single, already debounced user activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub source: InputSource,
    pub kind: InputKind,
    /// `None` when the raw payload is not in the identity table.
    pub identity: Option<LogicalButton>,
}

impl InputEvent {
    /// Build an event whose identity is already known.
    pub const fn new(source: InputSource, kind: InputKind, identity: LogicalButton) -> Self {
        Self {
            source,
            kind,
            identity: Some(identity),
        }
    }

    /// Build an event for a payload the identity table did not recognise.
    pub const fn unknown(source: InputSource, kind: InputKind) -> Self {
        Self {
            source,
            kind,
            identity: None,
        }
    }
}

/// Resolves raw input payloads to logical buttons.
///
/// Implementations must be pure and total: unknown payloads map to `None`.
pub trait IdentityTable {
    fn resolve(&self, raw: i32) -> Option<LogicalButton>;
}

/// Fixed raw-id table supplied by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonMap {
    ids: [i32; 6],
}

impl ButtonMap {
    /// Default layout of the board this firmware ships on.
    pub const BOARD: ButtonMap = ButtonMap::new(
        config::INPUT_PLAY_ID,
        config::INPUT_SET_ID,
        config::INPUT_VOLUP_ID,
        config::INPUT_VOLDOWN_ID,
        config::INPUT_MODE_ID,
        config::INPUT_REC_ID,
    );

    pub const fn new(
        play: i32,
        set: i32,
        vol_up: i32,
        vol_down: i32,
        mode: i32,
        record: i32,
    ) -> Self {
        Self {
            ids: [play, set, vol_up, vol_down, mode, record],
        }
    }

    /// Raw id assigned to `button`.
    pub fn id_of(&self, button: LogicalButton) -> i32 {
        self.ids[button as usize]
    }
}

impl IdentityTable for ButtonMap {
    // First match wins when two buttons share an id.
    fn resolve(&self, raw: i32) -> Option<LogicalButton> {
        self.ids
            .iter()
            .zip(LogicalButton::ALL)
            .find_map(|(id, button)| (*id == raw).then_some(button))
    }
}

impl<T: IdentityTable + ?Sized> IdentityTable for &T {
    fn resolve(&self, raw: i32) -> Option<LogicalButton> {
        (**self).resolve(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_map_resolves_every_button() {
        let map = ButtonMap::BOARD;
        for button in LogicalButton::ALL {
            assert_eq!(map.resolve(map.id_of(button)), Some(button));
        }
    }

    #[test]
    fn unknown_payload_resolves_to_none() {
        let map = ButtonMap::new(1, 2, 3, 4, 5, 6);
        assert_eq!(map.resolve(0), None);
        assert_eq!(map.resolve(-1), None);
        assert_eq!(map.resolve(7), None);
    }

    #[test]
    fn shared_id_resolves_to_first_declared_button() {
        let map = ButtonMap::new(1, 2, 3, 4, 3, 6);
        assert_eq!(map.resolve(3), Some(LogicalButton::VolUp));
    }

    #[test]
    fn resolve_through_reference() {
        let map = ButtonMap::new(1, 2, 3, 4, 5, 6);
        let by_ref = &map;
        assert_eq!(by_ref.resolve(6), Some(LogicalButton::Record));
    }

    #[test]
    fn unknown_constructor_has_no_identity() {
        let ev = InputEvent::unknown(InputSource::Touch, InputKind::Tap);
        assert!(ev.identity.is_none());
    }

    #[test]
    fn board_ids_resolve_to_log_tags() {
        let map = ButtonMap::BOARD;
        let tag = |raw| map.resolve(raw).map(LogicalButton::tag);
        assert_eq!(tag(map.id_of(LogicalButton::Play)), Some("Play"));
        assert_eq!(tag(map.id_of(LogicalButton::VolUp)), Some("Vol+"));
        assert_eq!(tag(map.id_of(LogicalButton::Record)), Some("Rec"));
        assert_eq!(tag(-1), None);
    }
}
