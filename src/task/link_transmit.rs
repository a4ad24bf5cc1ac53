//! Driver station link transmitter
//!
//! Drains the outbox onto the UART, one line per message.

use defmt::{info, warn};
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use hub_robot::system::outbox;

/// Link transmitter task
#[embassy_executor::task]
pub async fn link_transmit(mut tx: BufferedUartTx) {
    info!("Link transmitter started");
    loop {
        let message = outbox::receive().await;
        let line = match message.encode() {
            Ok(line) => line,
            Err(e) => {
                warn!("Cannot encode {}: {}", message, e);
                continue;
            }
        };

        let written = match tx.write_all(line.as_bytes()).await {
            Ok(()) => tx.write_all(b"\n").await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            warn!("Link write error: {}", e);
        }
    }
}
