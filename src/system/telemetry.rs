//! Dashboard Telemetry
//!
//! Named values and tab switches published to the driver dashboard.

/// Whether our hub is currently active
pub const HUB_ACTIVE_KEY: &str = "Hub/IsActive";

/// Seconds until the next hub shift, one decimal place
pub const HUB_TIMER_KEY: &str = "Hub/Timer";

/// Remaining match time as reported by the driver station
pub const MATCH_TIME_KEY: &str = "Match Time";

/// Dashboard tab shown before the match
pub const PREMATCH_TAB: &str = "Prematch";

/// Dashboard tab shown during autonomous
pub const AUTONOMOUS_TAB: &str = "Autonomous";

/// Dashboard tab shown during teleop
pub const TELEOP_TAB: &str = "Teleop";

/// Key/value sink on the driver dashboard
pub trait Dashboard {
    /// Publishes a named boolean
    fn put_boolean(&mut self, key: &'static str, value: bool);

    /// Publishes a named number
    fn put_number(&mut self, key: &'static str, value: f32);

    /// Switches the dashboard to the named tab
    fn select_tab(&mut self, tab: &'static str);
}
