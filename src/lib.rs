#![cfg_attr(not(test), no_std)]

//! Hub shift notifications and lifecycle glue for the competition robot
//!
//! Everything in here is hardware independent and runs on the host under
//! `cargo test`. The embassy tasks that wire it to the UART link live in the
//! firmware binary (`--features firmware`).

// Logging goes through defmt on the robot and compiles away on the host
#[cfg(feature = "defmt")]
macro_rules! info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}

/// Robot state, lifecycle and link protocol
pub mod system;
