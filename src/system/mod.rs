//! Core system components for robot operation
pub mod command;
pub mod config;
pub mod driver_station;
pub mod event;
pub mod frame;
pub mod hub_shift;
pub mod outbox;
pub mod robot;
pub mod telemetry;
pub mod vision;
