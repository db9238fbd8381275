//! User-facing peripherals - OLED display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, renders display patterns
//! - **Buttons**: 6 tactile switches with debouncing (Play, Set, Vol+,
//!   Vol-, Mode, Rec)

pub mod buttons;
pub mod display;
