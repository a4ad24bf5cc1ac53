//! Robot Configuration
//!
//! Compile-time settings for the robot and its driver station link.

use crate::system::command::AutoRoutine;
use crate::system::vision::CameraPose;

/// Robot loop period (ms)
pub const PERIODIC_INTERVAL_MS: u64 = 20;

/// Driver station link baud rate
pub const LINK_BAUD_RATE: u32 = 115_200;

/// UART ring buffer size per direction (bytes)
pub const LINK_BUFFER_SIZE: usize = 256;

/// Longest line accepted or emitted on the link, newline excluded (bytes)
pub const LINK_LINE_CAPACITY: usize = 96;

/// Lifecycle settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RobotConfig {
    /// Competition build
    /// - true: publish match telemetry and switch dashboard tabs
    /// - false: practice build, dashboard left alone
    pub competition: bool,
    /// Vision camera mounting pose
    pub camera: CameraPose,
    /// Routine scheduled when autonomous starts
    /// - None: sit still during autonomous
    pub autonomous: Option<AutoRoutine>,
}

/// Configuration the firmware runs with
pub const ROBOT_CONFIG: RobotConfig = RobotConfig {
    competition: true,
    camera: CameraPose {
        name: "limelight",
        x: 0.31,
        y: 0.0,
        z: 0.24,
        roll: 0.0,
        pitch: 20.0,
        yaw: 0.0,
    },
    autonomous: Some(AutoRoutine::new("LeaveStartingZone")),
};
