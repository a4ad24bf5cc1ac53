//! Driver Station State
//!
//! Holds the latest match state received from the driver station link:
//! - Robot mode and enable flag
//! - Alliance assignment
//! - Remaining match time
//! - Game-specific message from the field management system
//!
//! The link receiver task overwrites the snapshot whenever a frame arrives.
//! The robot loop copies it once per cycle and hands the copy to the
//! lifecycle callbacks, so a cycle always sees one consistent snapshot.
//!
//! # State Access Pattern
//! ```rust,ignore
//! driver_station::publish(data);          // link receiver
//! let ds = driver_station::snapshot();    // robot loop
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::String;

/// Maximum length of the game-specific message in bytes
pub const GAME_MESSAGE_CAPACITY: usize = 16;

/// Latest driver station snapshot shared between the link receiver and the robot loop
static DRIVER_STATION: Mutex<CriticalSectionRawMutex, RefCell<DriverStationData>> =
    Mutex::new(RefCell::new(DriverStationData::new()));

/// Replaces the shared driver station snapshot
pub fn publish(data: DriverStationData) {
    DRIVER_STATION.lock(|cell| {
        cell.replace(data);
    });
}

/// Returns a copy of the shared driver station snapshot
pub fn snapshot() -> DriverStationData {
    DRIVER_STATION.lock(|cell| cell.borrow().clone())
}

/// Competing side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alliance {
    Red,
    Blue,
}

impl Alliance {
    /// Single-letter code used by the field for this alliance
    pub fn code(self) -> char {
        match self {
            Alliance::Red => 'R',
            Alliance::Blue => 'B',
        }
    }

    /// Parses a single-letter alliance code
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(Alliance::Red),
            'B' => Some(Alliance::Blue),
            _ => None,
        }
    }
}

/// Match phase reported by the driver station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RobotMode {
    /// Robot is disabled, no actuation allowed
    Disabled,
    /// Autonomous period
    Autonomous,
    /// Driver-controlled period
    Teleop,
    /// Pit test mode
    Test,
}

/// Read access to the match state
///
/// Implemented by [`DriverStationData`] on the robot and by test doubles on
/// the host.
pub trait DriverStation {
    /// Seconds remaining in the current timed period
    fn match_time(&self) -> f32;

    /// Our alliance, if the driver station knows it yet
    fn alliance(&self) -> Option<Alliance>;

    /// Game-specific message from the field, if one was sent
    fn game_specific_message(&self) -> Option<&str>;

    /// Mode selected on the driver station
    fn mode(&self) -> RobotMode;

    /// Whether the robot is enabled
    fn is_enabled(&self) -> bool;

    /// Whether teleop is running with the robot enabled
    fn is_teleop_enabled(&self) -> bool {
        self.is_enabled() && self.mode() == RobotMode::Teleop
    }

    /// Mode the robot actually runs in; a disabled robot is always in
    /// [`RobotMode::Disabled`]
    fn effective_mode(&self) -> RobotMode {
        if self.is_enabled() {
            self.mode()
        } else {
            RobotMode::Disabled
        }
    }
}

/// Game message does not fit into [`GAME_MESSAGE_CAPACITY`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageTooLong;

/// Match state as last reported by the driver station
#[derive(Debug, Clone, PartialEq)]
pub struct DriverStationData {
    /// Selected mode
    pub mode: RobotMode,
    /// Enable flag
    pub enabled: bool,
    /// Alliance assignment
    /// - None: not yet known (no FMS connection or not reported)
    pub alliance: Option<Alliance>,
    /// Seconds remaining in the current timed period
    pub match_time: f32,
    /// Game-specific message, empty when none was sent
    game_message: String<GAME_MESSAGE_CAPACITY>,
}

impl DriverStationData {
    /// Disabled robot with no match information
    pub const fn new() -> Self {
        Self {
            mode: RobotMode::Disabled,
            enabled: false,
            alliance: None,
            match_time: 0.0,
            game_message: String::new(),
        }
    }

    /// Replaces the game-specific message
    pub fn set_game_message(&mut self, message: &str) -> Result<(), MessageTooLong> {
        let mut game_message = String::new();
        game_message.push_str(message).map_err(|_| MessageTooLong)?;
        self.game_message = game_message;
        Ok(())
    }
}

impl Default for DriverStationData {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverStation for DriverStationData {
    fn match_time(&self) -> f32 {
        self.match_time
    }

    fn alliance(&self) -> Option<Alliance> {
        self.alliance
    }

    fn game_specific_message(&self) -> Option<&str> {
        if self.game_message.is_empty() {
            None
        } else {
            Some(self.game_message.as_str())
        }
    }

    fn mode(&self) -> RobotMode {
        self.mode
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alliance_codes() {
        assert_eq!(Alliance::Red.code(), 'R');
        assert_eq!(Alliance::Blue.code(), 'B');
        assert_eq!(Alliance::from_code('R'), Some(Alliance::Red));
        assert_eq!(Alliance::from_code('B'), Some(Alliance::Blue));
        assert_eq!(Alliance::from_code('r'), None);
        assert_eq!(Alliance::from_code('-'), None);
    }

    #[test]
    fn test_default_snapshot() {
        let ds = DriverStationData::default();
        assert_eq!(ds.mode(), RobotMode::Disabled);
        assert!(!ds.is_enabled());
        assert_eq!(ds.alliance(), None);
        assert_eq!(ds.game_specific_message(), None);
        assert_eq!(ds.effective_mode(), RobotMode::Disabled);
    }

    #[test]
    fn test_teleop_enabled_requires_both() {
        let mut ds = DriverStationData::new();
        ds.mode = RobotMode::Teleop;
        assert!(!ds.is_teleop_enabled());
        assert_eq!(ds.effective_mode(), RobotMode::Disabled);

        ds.enabled = true;
        assert!(ds.is_teleop_enabled());
        assert_eq!(ds.effective_mode(), RobotMode::Teleop);

        ds.mode = RobotMode::Autonomous;
        assert!(!ds.is_teleop_enabled());
    }

    #[test]
    fn test_game_message_capacity() {
        let mut ds = DriverStationData::new();
        ds.set_game_message("R").unwrap();
        assert_eq!(ds.game_specific_message(), Some("R"));

        let too_long = "0123456789abcdefX";
        assert_eq!(ds.set_game_message(too_long), Err(MessageTooLong));
        assert_eq!(ds.game_specific_message(), Some("R"));

        ds.set_game_message("").unwrap();
        assert_eq!(ds.game_specific_message(), None);
    }

    #[test]
    fn test_publish_and_snapshot() {
        let mut ds = DriverStationData::new();
        ds.mode = RobotMode::Autonomous;
        ds.enabled = true;
        ds.alliance = Some(Alliance::Blue);
        ds.match_time = 12.5;
        publish(ds.clone());
        assert_eq!(snapshot(), ds);
    }
}
