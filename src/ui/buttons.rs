//! GPIO button input with async debouncing.
//!
//! Six physical buttons (active-low with internal pull-up), one per
//! logical button. Each pin reports its own pin number as the raw input
//! id; [`ButtonMap::BOARD`](bt_sink_remote::ButtonMap::BOARD) turns that
//! into a logical button.
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and publishes a `PeriphMessage` on the event channel.

use bt_sink_remote::config::{BUTTON_DEBOUNCE_MS, EVENT_QUEUE_DEPTH};
use bt_sink_remote::event::{Command, PeriphMessage, SourceType};
use bt_sink_remote::{ButtonMap, IdentityTable, LogicalButton};
use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release before repeating.
pub async fn button_task(
    pin: AnyPin,
    raw_id: i32,
    tx: Sender<'static, CriticalSectionRawMutex, PeriphMessage, EVENT_QUEUE_DEPTH>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    let tag = ButtonMap::BOARD.resolve(raw_id).map_or("?", LogicalButton::tag);
    let settle = Duration::from_millis(BUTTON_DEBOUNCE_MS);
    let pressed = PeriphMessage::input(SourceType::Button, Command::Pressed, raw_id);

    loop {
        // Active-low: a press pulls the pin down.
        btn.wait_for_falling_edge().await;
        Timer::after(settle).await;
        if btn.is_high() {
            continue;
        }

        debug!("[{}] pressed (id {})", tag, raw_id);
        tx.send(pressed).await;

        // One message per press; wait out the release bounce too.
        btn.wait_for_rising_edge().await;
        Timer::after(settle).await;
    }
}
