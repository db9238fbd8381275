//! BLE peripheral link to the phone.
//!
//! Advertises as a connectable peripheral, reports connect/disconnect on
//! the event channel with [`BLE_LINK_ID`], and forwards queued transport
//! commands as Consumer Control notifications while connected. The shared
//! [`LinkStatus`] is up only between connect and disconnect.

use bt_sink_remote::config::{
    BLE_DEVICE_NAME, BLE_LINK_ID, EVENT_QUEUE_DEPTH, TRANSPORT_QUEUE_DEPTH,
};
use bt_sink_remote::event::{LinkState, PeriphMessage};
use bt_sink_remote::sink::transport::CONSUMER_RELEASE_REPORT;
use bt_sink_remote::sink::LinkStatus;
use bt_sink_remote::TransportCommand;
use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_time::{Duration, Timer};
use nrf_softdevice::ble::advertisement_builder::{
    Flag, LegacyAdvertisementBuilder, LegacyAdvertisementPayload,
};
use nrf_softdevice::ble::{gatt_server, peripheral, Connection};
use nrf_softdevice::Softdevice;

/// Delay between the usage report and its release report.
const KEY_RELEASE_DELAY_MS: u64 = 10;

/// Back-off after a failed advertising attempt.
const ADV_RETRY_DELAY_MS: u64 = 1000;

#[nrf_softdevice::gatt_service(uuid = "6e400010-b5a3-f393-e0a9-e50e24dcca9e")]
pub struct MediaControlService {
    /// Current Consumer Control usage, little-endian.
    #[characteristic(uuid = "6e400011-b5a3-f393-e0a9-e50e24dcca9e", read, notify)]
    pub control: [u8; 2],
}

#[nrf_softdevice::gatt_server]
pub struct Server {
    pub media: MediaControlService,
}

static ADV_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
    .flags(&[Flag::GeneralDiscovery, Flag::LE_Only])
    .full_name(BLE_DEVICE_NAME)
    .build();

static SCAN_DATA: [u8; 0] = [];

/// Run the link forever: advertise, serve one connection, repeat.
pub async fn link_task(
    sd: &'static Softdevice,
    server: &'static Server,
    status: &'static LinkStatus,
    event_tx: Sender<'static, CriticalSectionRawMutex, PeriphMessage, EVENT_QUEUE_DEPTH>,
    cmd_rx: Receiver<'static, CriticalSectionRawMutex, TransportCommand, TRANSPORT_QUEUE_DEPTH>,
) -> ! {
    loop {
        let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
            adv_data: &ADV_DATA,
            scan_data: &SCAN_DATA,
        };
        let conn = match peripheral::advertise_connectable(sd, adv, &peripheral::Config::default())
            .await
        {
            Ok(conn) => conn,
            Err(e) => {
                warn!("BLE advertising failed: {:?}", e);
                Timer::after(Duration::from_millis(ADV_RETRY_DELAY_MS)).await;
                continue;
            }
        };

        // Anything still queued predates this connection.
        while cmd_rx.try_receive().is_ok() {}
        status.set_up(true);
        info!("BLE link up");
        event_tx
            .send(PeriphMessage::link(LinkState::Connected, BLE_LINK_ID))
            .await;

        // The GATT server future completes when the peer disconnects.
        let serve = gatt_server::run(&conn, server, |_| {});
        match select(serve, forward_commands(&conn, server, &cmd_rx)).await {
            Either::First(_) => info!("BLE link down: peer disconnected"),
            Either::Second(()) => info!("BLE link down: notify failed"),
        }

        status.set_up(false);
        event_tx
            .send(PeriphMessage::link(LinkState::Disconnected, BLE_LINK_ID))
            .await;
    }
}

/// Send each queued command as a press + release notification pair.
///
/// Returns once a notification fails, which means the link is gone.
async fn forward_commands(
    conn: &Connection,
    server: &Server,
    cmd_rx: &Receiver<'static, CriticalSectionRawMutex, TransportCommand, TRANSPORT_QUEUE_DEPTH>,
) {
    loop {
        let cmd = cmd_rx.receive().await;
        info!("Transport: {}", cmd);

        if let Err(e) = server.media.control_notify(conn, &cmd.to_report()) {
            warn!("control notify failed: {:?}", e);
            return;
        }
        Timer::after(Duration::from_millis(KEY_RELEASE_DELAY_MS)).await;
        if let Err(e) = server.media.control_notify(conn, &CONSUMER_RELEASE_REPORT) {
            warn!("control release failed: {:?}", e);
            return;
        }
    }
}
