//! bt-sink-remote firmware entry point (nRF52840).
//!
//! Task layout:
//!
//! - `button` ×6      → EVENTS
//! - `ble_link`       → EVENTS (link up/down), drains TRANSPORT_CMDS
//! - `dispatcher`     : EVENTS → TRANSPORT_CMDS / DISPLAY_REQ
//! - `display`        : DISPLAY_REQ → OLED
//! - `softdevice`     : SoftDevice event pump

#![no_std]
#![no_main]

mod ble;
mod ui;

use core::mem;

use bt_sink_remote::config::{
    BLE_DEVICE_NAME, BLE_LINK_ID, EVENT_QUEUE_DEPTH, TRANSPORT_QUEUE_DEPTH,
};
use bt_sink_remote::sink::{LinkStatus, QueuedTransport, SignalDisplay};
use bt_sink_remote::{
    ButtonMap, Dispatcher, DisplayRequest, LogicalButton, PeriphMessage, TransportCommand,
};
use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::interrupt::Priority;
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use nrf_softdevice::{raw, Softdevice};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use ble::link::Server;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type EventChannel = Channel<CriticalSectionRawMutex, PeriphMessage, EVENT_QUEUE_DEPTH>;
type TransportChannel = Channel<CriticalSectionRawMutex, TransportCommand, TRANSPORT_QUEUE_DEPTH>;
type BoardDispatcher = Dispatcher<
    QueuedTransport<'static, CriticalSectionRawMutex, TRANSPORT_QUEUE_DEPTH>,
    SignalDisplay<'static, CriticalSectionRawMutex>,
>;

static EVENTS: EventChannel = Channel::new();
static TRANSPORT_CMDS: TransportChannel = Channel::new();
static LINK_STATUS: LinkStatus = LinkStatus::new();
static DISPLAY_REQ: Signal<CriticalSectionRawMutex, DisplayRequest> = Signal::new();
static SERVER: StaticCell<Server> = StaticCell::new();

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::task(pool_size = 6)]
async fn button(pin: AnyPin, raw_id: i32) -> ! {
    ui::buttons::button_task(pin, raw_id, EVENTS.sender()).await
}

#[embassy_executor::task]
async fn ble_link(sd: &'static Softdevice, server: &'static Server) -> ! {
    ble::link::link_task(
        sd,
        server,
        &LINK_STATUS,
        EVENTS.sender(),
        TRANSPORT_CMDS.receiver(),
    )
    .await
}

#[embassy_executor::task]
async fn display(display: ui::display::Display<Twim<'static, TWISPI0>>) -> ! {
    ui::display::display_task(display, &DISPLAY_REQ).await
}

/// Owns the dispatcher; events are handled one at a time in arrival order.
#[embassy_executor::task]
async fn dispatcher(mut dispatcher: BoardDispatcher) -> ! {
    let table = ButtonMap::BOARD;
    loop {
        let msg = EVENTS.receive().await;
        if let Err(e) = dispatcher.handle_message(&msg, &table) {
            warn!("dispatch failed: {}", e);
        }
    }
}

fn softdevice_config() -> nrf_softdevice::Config {
    nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t { att_mtu: 64 }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: BLE_DEVICE_NAME.as_ptr() as _,
            current_len: BLE_DEVICE_NAME.len() as u16,
            max_len: BLE_DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("bt-sink-remote starting");

    // The SoftDevice reserves interrupt priorities 0, 1 and 4.
    let mut config = embassy_nrf::config::Config::default();
    config.gpiote_interrupt_priority = Priority::P2;
    config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(config);

    let sd = Softdevice::enable(&softdevice_config());
    let server = SERVER.init(unwrap!(Server::new(sd)));
    let sd: &'static Softdevice = sd;
    unwrap!(spawner.spawn(softdevice_task(sd)));

    // OLED on TWIM0 (SDA P0.26, SCL P0.27).
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = ui::display::init(i2c);
    unwrap!(spawner.spawn(display(oled)));

    let mut board = BoardDispatcher::new();
    unwrap!(board.init(
        Some(QueuedTransport::new(
            BLE_LINK_ID,
            &LINK_STATUS,
            TRANSPORT_CMDS.sender(),
        )),
        Some(SignalDisplay::new(&DISPLAY_REQ)),
    ));
    unwrap!(spawner.spawn(dispatcher(board)));

    let map = ButtonMap::BOARD;
    let pins: [(AnyPin, i32); 6] = [
        (p.P0_11.degrade(), map.id_of(LogicalButton::Play)),
        (p.P0_12.degrade(), map.id_of(LogicalButton::Set)),
        (p.P0_24.degrade(), map.id_of(LogicalButton::VolUp)),
        (p.P0_25.degrade(), map.id_of(LogicalButton::VolDown)),
        (p.P1_08.degrade(), map.id_of(LogicalButton::Mode)),
        (p.P1_07.degrade(), map.id_of(LogicalButton::Record)),
    ];
    for (pin, raw_id) in pins {
        unwrap!(spawner.spawn(button(pin, raw_id)));
    }

    unwrap!(spawner.spawn(ble_link(sd, server)));

    info!("All tasks spawned");
}
