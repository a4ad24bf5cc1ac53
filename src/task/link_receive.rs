//! Driver station link receiver
//!
//! Reads state frames from the radio bridge and publishes them as the shared
//! driver station snapshot. The robot loop picks up mode transitions from the
//! snapshot on its next cycle.

use defmt::{info, warn};
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;
use hub_robot::system::driver_station;
use hub_robot::system::frame::{parse_frame, LineAssembler};

/// Link receiver task
#[embassy_executor::task]
pub async fn link_receive(mut rx: BufferedUartRx) {
    info!("Link receiver started");
    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; 32];

    loop {
        let count = match rx.read(&mut buf).await {
            Ok(count) => count,
            Err(e) => {
                warn!("Link read error: {}", e);
                continue;
            }
        };

        for &byte in &buf[..count] {
            let Some(line) = assembler.push(byte) else {
                continue;
            };

            match line.and_then(parse_frame) {
                Ok(data) => driver_station::publish(data),
                Err(e) => warn!("Dropping link frame: {}", e),
            }
        }
    }
}
