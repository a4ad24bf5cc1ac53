//! Robot Loop
//!
//! Owns the robot lifecycle and runs it on a fixed control period. Each cycle
//! reads the latest driver station snapshot once, runs the init callback of a
//! newly entered mode, then the periodic callback, so lifecycle state is only
//! ever touched from this task.

use defmt::info;
use embassy_time::{Duration, Ticker};
use hub_robot::system::config::{PERIODIC_INTERVAL_MS, ROBOT_CONFIG};
use hub_robot::system::driver_station;
use hub_robot::system::outbox::LinkOutbox;
use hub_robot::system::robot::Robot;

/// Control period
const PERIODIC_INTERVAL: Duration = Duration::from_millis(PERIODIC_INTERVAL_MS);

/// Main robot task
#[embassy_executor::task]
pub async fn robot_loop() {
    info!("Robot loop started");
    let mut robot = Robot::new(ROBOT_CONFIG, LinkOutbox, LinkOutbox, LinkOutbox);
    robot.robot_init();

    let mut ticker = Ticker::every(PERIODIC_INTERVAL);
    loop {
        ticker.next().await;
        let ds = driver_station::snapshot();
        robot.cycle(&ds);
    }
}
