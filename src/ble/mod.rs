//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role.
//! The phone connects to us; transport commands reach it as Consumer
//! Control usages on a notify characteristic, and link state changes go
//! to the dispatcher as peripheral messages.
//!
//! Communication with other tasks is done via Embassy channels defined
//! in `main.rs`.

pub mod link;
