//! Hardware Resource Management
//!
//! Assigns the RP2350 pins and peripherals used by the firmware.
//!
//! # Resource Groups
//! - Driver Station Link: UART0 to the radio bridge (GPIO 0 TX, GPIO 1 RX)

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{self, UART0};
use embassy_rp::uart::BufferedInterruptHandler;

assign_resources! {
    /// Driver station bridge UART
    link: LinkResources {
        uart: UART0,
        tx_pin: PIN_0,
        rx_pin: PIN_1,
    },
}

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});
