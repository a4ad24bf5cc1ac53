//! System Events
//!
//! Lifecycle events derived from consecutive driver station snapshots.

use crate::system::driver_station::RobotMode;

/// System-wide events
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Events {
    /// The robot entered a new mode
    ModeChanged(RobotMode),
}

/// Tracks the effective robot mode across control cycles
///
/// Reports a mode only when it differs from the last one seen, so every
/// init callback runs once per transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeTracker {
    current: Option<RobotMode>,
}

impl ModeTracker {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Records the latest mode, returning the change event if it is new
    pub fn observe(&mut self, mode: RobotMode) -> Option<Events> {
        if self.current == Some(mode) {
            return None;
        }
        self.current = Some(mode);
        Some(Events::ModeChanged(mode))
    }
}

impl Default for ModeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tracker_reports_transitions_once() {
        let mut tracker = ModeTracker::new();
        assert_eq!(
            tracker.observe(RobotMode::Disabled),
            Some(Events::ModeChanged(RobotMode::Disabled))
        );
        assert_eq!(tracker.observe(RobotMode::Disabled), None);
        assert_eq!(
            tracker.observe(RobotMode::Autonomous),
            Some(Events::ModeChanged(RobotMode::Autonomous))
        );
        assert_eq!(
            tracker.observe(RobotMode::Teleop),
            Some(Events::ModeChanged(RobotMode::Teleop))
        );
        assert_eq!(tracker.observe(RobotMode::Teleop), None);
    }
}
