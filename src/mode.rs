//! Operating mode and recording toggle.

/// Input-interpretation context of the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Bluetooth playback mode (power-on default).
    #[default]
    Primary = 0,
    /// Remote shell mode.
    Secondary = 1,
}

impl Mode {
    pub const fn toggled(self) -> Mode {
        match self {
            Mode::Primary => Mode::Secondary,
            Mode::Secondary => Mode::Primary,
        }
    }

    /// Value passed to the display alongside mode-dependent patterns.
    pub const fn as_param(self) -> i32 {
        self as i32
    }
}

/// Read-only view of [`ModeState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub mode: Mode,
    pub recording: bool,
}

/// Current mode plus the recording flag.
///
/// Only the dispatcher owns one of these.
#[derive(Debug, Default)]
pub struct ModeState {
    mode: Mode,
    recording: bool,
}

impl ModeState {
    /// Power-on state: primary mode, not recording.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Primary,
            recording: false,
        }
    }

    pub fn current(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            recording: self.recording,
        }
    }

    /// Flip primary and secondary, returning the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Flip the recording flag, returning the new value.
    pub fn toggle_recording(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }
}
