//! Robot firmware entry point
//!
//! Brings up the driver station link and spawns the robot tasks.

#![no_std]
#![no_main]

use crate::task::{
    link_receive::link_receive,
    link_transmit::link_transmit,
    resources::{AssignedResources, Irqs, LinkResources},
    robot_loop::robot_loop,
};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::uart::{BufferedUart, Config as UartConfig};
use hub_robot::system::config::{LINK_BAUD_RATE, LINK_BUFFER_SIZE};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());
    let r = split_resources!(p);

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = LINK_BAUD_RATE;

    static mut LINK_TX_BUF: [u8; LINK_BUFFER_SIZE] = [0; LINK_BUFFER_SIZE];
    static mut LINK_RX_BUF: [u8; LINK_BUFFER_SIZE] = [0; LINK_BUFFER_SIZE];

    let uart = BufferedUart::new(
        r.link.uart,
        r.link.tx_pin,
        r.link.rx_pin,
        Irqs,
        unsafe { &mut *core::ptr::addr_of_mut!(LINK_TX_BUF) },
        unsafe { &mut *core::ptr::addr_of_mut!(LINK_RX_BUF) },
        uart_config,
    );
    let (tx, rx) = uart.split();

    // The robot loop must be running before the first mode change arrives
    spawner.spawn(robot_loop()).unwrap();
    spawner.spawn(link_transmit(tx)).unwrap();
    spawner.spawn(link_receive(rx)).unwrap();
}
