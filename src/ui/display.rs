//! SSD1306 OLED display - the display pattern renderer.

use bt_sink_remote::sink::render::pattern_label;
use bt_sink_remote::DisplayRequest;
use defmt::{debug, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("OLED init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Render one display request: a large title and a detail line.
pub fn draw_request<I2C>(display: &mut Display<I2C>, req: &DisplayRequest)
where
    I2C: embedded_hal::i2c::I2c,
{
    let label = pattern_label(req);

    display.clear_buffer();

    let _ = Text::new(label.title, Point::new(0, 20), text_style(&FONT_10X20)).draw(display);
    let _ = Text::new(
        label.detail.as_str(),
        Point::new(0, 44),
        text_style(&FONT_6X10),
    )
    .draw(display);

    if display.flush().is_err() {
        warn!("OLED flush failed");
    }
}

/// Redraw whenever the dispatcher publishes a new request.
///
/// Requests published faster than the screen redraws are coalesced;
/// only the latest is drawn.
pub async fn display_task<I2C>(
    mut display: Display<I2C>,
    requests: &'static Signal<CriticalSectionRawMutex, DisplayRequest>,
) -> !
where
    I2C: embedded_hal::i2c::I2c,
{
    draw_request(&mut display, &DisplayRequest::default());

    loop {
        let req = requests.wait().await;
        debug!("Display: {}", req);
        draw_request(&mut display, &req);
    }
}
