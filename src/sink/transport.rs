//! Transport commands and their Consumer Control encoding.
//!
//! The BLE link forwards each command to the phone as a 2-byte HID
//! Consumer Control usage (usage page 0x0C), little-endian.

/// Consumer control report size (2 bytes for usage ID).
pub const CONSUMER_REPORT_SIZE: usize = 2;

/// Transport command queued for the Bluetooth link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportCommand {
    Play,
    Pause,
    Next,
    Previous,
}

impl TransportCommand {
    /// Consumer Control usage code.
    pub const fn usage(self) -> u16 {
        match self {
            TransportCommand::Play => 0x00B0,
            TransportCommand::Pause => 0x00B1,
            TransportCommand::Next => 0x00B5,
            TransportCommand::Previous => 0x00B6,
        }
    }

    /// Serialize to the report bytes sent over the link.
    pub const fn to_report(self) -> [u8; CONSUMER_REPORT_SIZE] {
        self.usage().to_le_bytes()
    }
}

/// Report that releases every usage.
pub const CONSUMER_RELEASE_REPORT: [u8; CONSUMER_REPORT_SIZE] = [0x00, 0x00];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_usages() {
        assert_eq!(TransportCommand::Play.usage(), 0x00B0);
        assert_eq!(TransportCommand::Pause.usage(), 0x00B1);
        assert_eq!(TransportCommand::Next.usage(), 0x00B5);
        assert_eq!(TransportCommand::Previous.usage(), 0x00B6);
    }

    #[test]
    fn report_is_little_endian() {
        assert_eq!(TransportCommand::Next.to_report(), [0xB5, 0x00]);
        assert_eq!(TransportCommand::Previous.to_report(), [0xB6, 0x00]);
    }
}
