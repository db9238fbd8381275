//! Application-wide constants and compile-time configuration.
//!
//! Board button ids, queue depths, timing parameters and the display
//! parameters used by the dispatcher live here so they can be tuned in
//! one place.

use crate::event::LinkId;

// Display

/// Parameter passed with the recording start/stop display patterns.
pub const RECORDING_PATTERN_PARAM: i32 = 100;

// Board input ids
//
// Raw payload each physical button reports. On the nRF52840-DK build the
// payload is the GPIO pin number of the button:
//
//   Play   → P0.11
//   Set    → P0.12
//   Vol+   → P0.24
//   Vol-   → P0.25
//   Mode   → P1.08 (40)
//   Rec    → P1.07 (39)

pub const INPUT_PLAY_ID: i32 = 11;
pub const INPUT_SET_ID: i32 = 12;
pub const INPUT_VOLUP_ID: i32 = 24;
pub const INPUT_VOLDOWN_ID: i32 = 25;
pub const INPUT_MODE_ID: i32 = 40;
pub const INPUT_REC_ID: i32 = 39;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// Queues

/// Depth of the event channel feeding the dispatcher task.
pub const EVENT_QUEUE_DEPTH: usize = 8;

/// Depth of the transport command channel feeding the BLE link task.
pub const TRANSPORT_QUEUE_DEPTH: usize = 4;

// BLE

/// Link id the BLE link task stamps on its connection events.
///
/// There is a single Bluetooth link on this device; the dispatcher only
/// honours connection events carrying this id.
pub const BLE_LINK_ID: LinkId = LinkId(1);

/// Advertised device name.
pub const BLE_DEVICE_NAME: &str = "bt-sink-remote";

// OLED
//
//   I²C SDA → P0.26
//   I²C SCL → P0.27
//   SSD1306 at 0x3C
