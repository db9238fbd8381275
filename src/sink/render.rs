//! Text shown on the OLED for each display request.

use core::fmt::Write;

use heapless::String;

use super::{DisplayPattern, DisplayRequest};
use crate::mode::Mode;

/// Two text lines describing a display request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub title: &'static str,
    pub detail: String<20>,
}

fn mode_name(param: i32) -> &'static str {
    if param == Mode::Primary.as_param() {
        "Bluetooth"
    } else if param == Mode::Secondary.as_param() {
        "Shell"
    } else {
        "?"
    }
}

/// Lines the display task draws for `req`.
///
/// Mode-carrying patterns show the mode name; recording patterns show
/// their level as a percentage.
pub fn pattern_label(req: &DisplayRequest) -> Label {
    let mut detail: String<20> = String::new();

    let title = match req.pattern {
        DisplayPattern::WakeupFinished => {
            let _ = detail.push_str(mode_name(req.param));
            "Mode"
        }
        DisplayPattern::BtConnected => {
            let _ = detail.push_str(mode_name(req.param));
            "BT connected"
        }
        DisplayPattern::BtDisconnected => {
            let _ = detail.push_str(mode_name(req.param));
            "BT disconnected"
        }
        DisplayPattern::RecordingStart => {
            let _ = write!(detail, "{}%", req.param);
            "REC"
        }
        DisplayPattern::RecordingStop => {
            let _ = write!(detail, "{}%", req.param);
            "Stopped"
        }
        DisplayPattern::Unknown => "",
    };

    Label { title, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(pattern: DisplayPattern, param: i32) -> Label {
        pattern_label(&DisplayRequest { pattern, param })
    }

    #[test]
    fn mode_patterns_name_the_mode() {
        let l = label(DisplayPattern::WakeupFinished, 1);
        assert_eq!(l.title, "Mode");
        assert_eq!(l.detail.as_str(), "Shell");

        let l = label(DisplayPattern::BtConnected, 0);
        assert_eq!(l.title, "BT connected");
        assert_eq!(l.detail.as_str(), "Bluetooth");
    }

    #[test]
    fn out_of_range_mode_param() {
        assert_eq!(label(DisplayPattern::BtDisconnected, 5).detail.as_str(), "?");
    }

    #[test]
    fn recording_patterns_show_level() {
        let l = label(DisplayPattern::RecordingStart, 100);
        assert_eq!(l.title, "REC");
        assert_eq!(l.detail.as_str(), "100%");
        assert_eq!(label(DisplayPattern::RecordingStop, 100).title, "Stopped");
    }

    #[test]
    fn unknown_pattern_is_blank() {
        let l = label(DisplayPattern::Unknown, 0);
        assert!(l.title.is_empty());
        assert!(l.detail.is_empty());
    }
}
