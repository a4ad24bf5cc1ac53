//! Hub Shift Notifications
//!
//! Derives whether our hub is currently active from the remaining teleop time,
//! our alliance and the parity letter broadcast by the field, and publishes the
//! result to the dashboard together with a countdown to the next shift.
//!
//! # Shift Schedule
//! ```text
//! seconds remaining   hub active
//! ----------------    -----------------------------------------
//!   t > 130           always (transition period)
//!   105 < t <= 130    unless we are the inactive-first alliance
//!   80  < t <= 105    only if we are the inactive-first alliance
//!   55  < t <= 80     unless we are the inactive-first alliance
//!   30  < t <= 55     only if we are the inactive-first alliance
//!   0   < t <= 30     always (endgame)
//!   t <= 0            never, countdown pinned to zero
//! ```
//!
//! Without a parity letter from the field every window reports the hub as
//! active.
//!
//! Alliance and parity are cached once by [`HubShiftNotifier::initialize`] at
//! the start of teleop and are not refreshed mid-period.

use crate::system::driver_station::{Alliance, DriverStation};
use crate::system::telemetry::{Dashboard, HUB_ACTIVE_KEY, HUB_TIMER_KEY};

/// Rule deciding hub activity inside a shift window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftRule {
    /// Hub is active regardless of alliance and parity
    AlwaysActive,
    /// Hub is active unless we are the inactive-first alliance
    ActiveUnlessInactiveFirst,
    /// Hub is active only if we are the inactive-first alliance
    ActiveIfInactiveFirst,
}

/// A contiguous range of remaining time with a fixed activity rule
///
/// A window matches when the remaining time is strictly greater than
/// `lower_bound`. Windows are checked in order, so the upper bound of each
/// window is the lower bound of the one before it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftWindow {
    /// Exclusive lower bound in seconds remaining
    pub lower_bound: f32,
    /// Activity rule applied inside the window
    pub rule: ShiftRule,
}

/// Teleop shift schedule, ordered from the start of teleop to the endgame
pub const SHIFT_WINDOWS: [ShiftWindow; 6] = [
    ShiftWindow {
        lower_bound: 130.0,
        rule: ShiftRule::AlwaysActive,
    },
    ShiftWindow {
        lower_bound: 105.0,
        rule: ShiftRule::ActiveUnlessInactiveFirst,
    },
    ShiftWindow {
        lower_bound: 80.0,
        rule: ShiftRule::ActiveIfInactiveFirst,
    },
    ShiftWindow {
        lower_bound: 55.0,
        rule: ShiftRule::ActiveUnlessInactiveFirst,
    },
    ShiftWindow {
        lower_bound: 30.0,
        rule: ShiftRule::ActiveIfInactiveFirst,
    },
    ShiftWindow {
        lower_bound: 0.0,
        rule: ShiftRule::AlwaysActive,
    },
];

/// Code compared against the parity letter while our alliance is unknown
pub const UNKNOWN_ALLIANCE_CODE: char = ' ';

/// Parity letter broadcast by the field management system
///
/// `first_inactive` names the alliance whose hub goes inactive in the first
/// alternating shift. It is only meaningful while `valid` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParitySignal {
    /// Uppercased first character of the game-specific message
    pub first_inactive: char,
    /// Whether a non-empty message was received
    pub valid: bool,
}

impl ParitySignal {
    /// Parity before any message has been seen
    pub const fn unknown() -> Self {
        Self {
            first_inactive: UNKNOWN_ALLIANCE_CODE,
            valid: false,
        }
    }
}

impl Default for ParitySignal {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Hub state for a single instant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftState {
    /// Whether our hub currently scores
    pub hub_active: bool,
    /// Seconds until the next window boundary
    pub seconds_until_next_shift: f32,
}

impl ShiftState {
    /// State reported once the period has elapsed
    pub const ELAPSED: Self = Self {
        hub_active: false,
        seconds_until_next_shift: 0.0,
    };
}

/// Cached alliance and parity context for the running teleop period
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HubShiftNotifier {
    own_alliance: Option<Alliance>,
    parity: ParitySignal,
}

impl HubShiftNotifier {
    /// Creates a notifier with unknown alliance and invalid parity
    pub const fn new() -> Self {
        Self {
            own_alliance: None,
            parity: ParitySignal::unknown(),
        }
    }

    /// Captures alliance and parity at the start of the timed period
    ///
    /// An absent or empty game message invalidates the parity but keeps the
    /// previously cached letter. An absent alliance keeps the previously
    /// cached alliance.
    pub fn initialize(&mut self, driver_station: &impl DriverStation) {
        self.parity.valid = false;
        if let Some(first) = driver_station
            .game_specific_message()
            .and_then(|message| message.chars().next())
        {
            self.parity = ParitySignal {
                first_inactive: first.to_ascii_uppercase(),
                valid: true,
            };
        }

        if let Some(alliance) = driver_station.alliance() {
            self.own_alliance = Some(alliance);
        }

        info!(
            "Hub shift context: alliance {}, parity {}",
            self.own_alliance, self.parity
        );
    }

    /// Cached own alliance
    pub fn own_alliance(&self) -> Option<Alliance> {
        self.own_alliance
    }

    /// Cached parity signal
    pub fn parity(&self) -> ParitySignal {
        self.parity
    }

    /// Computes the hub state for the given seconds remaining
    ///
    /// A non-finite time is treated like an elapsed period.
    pub fn evaluate(&self, time_remaining: f32) -> ShiftState {
        if !time_remaining.is_finite() || time_remaining <= 0.0 {
            return ShiftState::ELAPSED;
        }

        SHIFT_WINDOWS
            .iter()
            .find(|window| time_remaining > window.lower_bound)
            .map(|window| ShiftState {
                hub_active: self.is_active(window.rule),
                seconds_until_next_shift: time_remaining - window.lower_bound,
            })
            // the last window has a zero lower bound, so any positive time matches
            .unwrap_or(ShiftState {
                hub_active: true,
                seconds_until_next_shift: time_remaining,
            })
    }

    /// Publishes the hub state for the given seconds remaining
    pub fn update(&self, time_remaining: f32, dashboard: &mut impl Dashboard) {
        let state = self.evaluate(time_remaining);
        dashboard.put_boolean(HUB_ACTIVE_KEY, state.hub_active);
        dashboard.put_number(HUB_TIMER_KEY, round_tenths(state.seconds_until_next_shift));
    }

    fn is_active(&self, rule: ShiftRule) -> bool {
        match rule {
            ShiftRule::AlwaysActive => true,
            ShiftRule::ActiveUnlessInactiveFirst => !self.parity.valid || !self.inactive_first(),
            ShiftRule::ActiveIfInactiveFirst => !self.parity.valid || self.inactive_first(),
        }
    }

    /// Whether our alliance is the one named by the parity letter.
    /// An unknown alliance compares as [`UNKNOWN_ALLIANCE_CODE`].
    fn inactive_first(&self) -> bool {
        let own = self.own_alliance.map_or(UNKNOWN_ALLIANCE_CODE, Alliance::code);
        own == self.parity.first_inactive
    }
}

/// Rounds to one decimal place, halves away from zero
pub fn round_tenths(value: f32) -> f32 {
    libm::roundf(value * 10.0) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::driver_station::DriverStationData;
    use crate::system::telemetry::Dashboard;

    #[derive(Default)]
    struct RecordingDashboard {
        booleans: Vec<(&'static str, bool)>,
        numbers: Vec<(&'static str, f32)>,
    }

    impl Dashboard for RecordingDashboard {
        fn put_boolean(&mut self, key: &'static str, value: bool) {
            self.booleans.push((key, value));
        }

        fn put_number(&mut self, key: &'static str, value: f32) {
            self.numbers.push((key, value));
        }

        fn select_tab(&mut self, _tab: &'static str) {}
    }

    fn notifier(alliance: Option<Alliance>, message: Option<&str>) -> HubShiftNotifier {
        let mut ds = DriverStationData::new();
        ds.alliance = alliance;
        if let Some(message) = message {
            ds.set_game_message(message).unwrap();
        }
        let mut notifier = HubShiftNotifier::new();
        notifier.initialize(&ds);
        notifier
    }

    fn activity(notifier: &HubShiftNotifier, time: f32) -> bool {
        notifier.evaluate(time).hub_active
    }

    #[test]
    fn test_windows_are_ordered_and_end_at_zero() {
        for pair in SHIFT_WINDOWS.windows(2) {
            assert!(pair[0].lower_bound > pair[1].lower_bound);
        }
        assert_eq!(SHIFT_WINDOWS[SHIFT_WINDOWS.len() - 1].lower_bound, 0.0);
    }

    #[test]
    fn test_red_alliance_red_inactive_first_scenarios() {
        let n = notifier(Some(Alliance::Red), Some("R"));
        let cases = [
            (140.0, true, 10.0),
            (120.0, false, 15.0),
            (100.0, true, 20.0),
            (60.0, false, 5.0),
            (40.0, true, 10.0),
            (20.0, true, 20.0),
            (0.0, false, 0.0),
        ];
        for (time, active, countdown) in cases {
            let state = n.evaluate(time);
            assert_eq!(state.hub_active, active, "activity at t={}", time);
            assert_eq!(
                round_tenths(state.seconds_until_next_shift),
                countdown,
                "countdown at t={}",
                time
            );
        }
    }

    #[test]
    fn test_other_alliance_inactive_first_inverts_pattern() {
        let n = notifier(Some(Alliance::Blue), Some("R"));
        assert!(activity(&n, 120.0));
        assert!(!activity(&n, 100.0));
        assert!(activity(&n, 60.0));
        assert!(!activity(&n, 40.0));
        assert!(activity(&n, 140.0));
        assert!(activity(&n, 20.0));
    }

    #[test]
    fn test_elapsed_period_is_inactive_regardless_of_context() {
        for n in [
            notifier(None, None),
            notifier(Some(Alliance::Red), Some("R")),
            notifier(Some(Alliance::Blue), Some("R")),
        ] {
            for time in [0.0, -0.1, -1.0, -150.0] {
                assert_eq!(n.evaluate(time), ShiftState::ELAPSED);
            }
        }
    }

    #[test]
    fn test_missing_parity_fails_open() {
        for alliance in [Some(Alliance::Red), Some(Alliance::Blue), None] {
            let n = notifier(alliance, None);
            assert!(!n.parity().valid);
            for time in [150.0, 130.0, 129.9, 105.0, 100.0, 80.0, 60.0, 55.0, 40.0, 30.0, 0.1] {
                assert!(activity(&n, time), "expected active at t={}", time);
            }
        }
    }

    #[test]
    fn test_empty_message_is_invalid() {
        let n = notifier(Some(Alliance::Red), Some(""));
        assert!(!n.parity().valid);
        assert!(activity(&n, 120.0));
    }

    #[test]
    fn test_parity_letter_is_case_insensitive() {
        let n = notifier(Some(Alliance::Blue), Some("blue"));
        assert_eq!(n.parity().first_inactive, 'B');
        assert!(n.parity().valid);
        assert!(!activity(&n, 120.0));
        assert!(activity(&n, 100.0));
    }

    #[test]
    fn test_window_bounds_are_open_at_top() {
        let n = notifier(Some(Alliance::Red), Some("R"));
        // exactly on a bound belongs to the window above it
        assert_eq!(n.evaluate(130.0).hub_active, false);
        assert_eq!(n.evaluate(130.0).seconds_until_next_shift, 25.0);
        assert_eq!(n.evaluate(105.0).hub_active, true);
        assert_eq!(n.evaluate(105.0).seconds_until_next_shift, 25.0);
        assert_eq!(n.evaluate(80.0).hub_active, false);
        assert_eq!(n.evaluate(55.0).hub_active, true);
        assert_eq!(n.evaluate(30.0).hub_active, true);
        assert_eq!(n.evaluate(30.0).seconds_until_next_shift, 30.0);
    }

    #[test]
    fn test_transition_and_endgame_countdowns() {
        let n = notifier(Some(Alliance::Red), Some("B"));
        let state = n.evaluate(135.25);
        assert!(state.hub_active);
        assert_eq!(round_tenths(state.seconds_until_next_shift), round_tenths(135.25 - 130.0));

        let state = n.evaluate(12.34);
        assert!(state.hub_active);
        assert_eq!(round_tenths(state.seconds_until_next_shift), 12.3);
    }

    #[test]
    fn test_unknown_alliance_never_matches_alliance_letter() {
        let n = notifier(None, Some("R"));
        assert!(n.parity().valid);
        assert!(activity(&n, 120.0));
        assert!(!activity(&n, 100.0));
        assert!(activity(&n, 60.0));
        assert!(!activity(&n, 40.0));
    }

    #[test]
    fn test_unknown_alliance_matches_blank_parity_letter() {
        let n = notifier(None, Some(" R"));
        assert!(n.parity().valid);
        assert_eq!(n.parity().first_inactive, ' ');
        assert!(!activity(&n, 120.0));
        assert!(activity(&n, 100.0));
    }

    #[test]
    fn test_non_finite_time_is_elapsed() {
        let n = notifier(Some(Alliance::Red), Some("R"));
        for time in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(n.evaluate(time), ShiftState::ELAPSED);
        }

        let mut dashboard = RecordingDashboard::default();
        n.update(f32::NAN, &mut dashboard);
        assert_eq!(dashboard.booleans, vec![(HUB_ACTIVE_KEY, false)]);
        assert_eq!(dashboard.numbers, vec![(HUB_TIMER_KEY, 0.0)]);
    }

    #[test]
    fn test_initialize_keeps_previous_alliance_when_absent() {
        let mut n = notifier(Some(Alliance::Blue), Some("R"));
        let mut ds = DriverStationData::new();
        ds.alliance = None;
        n.initialize(&ds);
        assert_eq!(n.own_alliance(), Some(Alliance::Blue));
        assert!(!n.parity().valid);
        assert_eq!(n.parity().first_inactive, 'R');
    }

    #[test]
    fn test_update_publishes_rounded_state() {
        let n = notifier(Some(Alliance::Red), Some("R"));
        let mut dashboard = RecordingDashboard::default();
        n.update(119.96, &mut dashboard);
        assert_eq!(dashboard.booleans, vec![(HUB_ACTIVE_KEY, false)]);
        assert_eq!(dashboard.numbers, vec![(HUB_TIMER_KEY, 15.0)]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let n = notifier(Some(Alliance::Blue), Some("R"));
        let mut dashboard = RecordingDashboard::default();
        for _ in 0..3 {
            n.update(77.7, &mut dashboard);
        }
        assert_eq!(dashboard.booleans, vec![(HUB_ACTIVE_KEY, true); 3]);
        assert_eq!(dashboard.numbers, vec![(HUB_TIMER_KEY, round_tenths(77.7 - 55.0)); 3]);
    }

    #[test]
    fn test_update_after_period_publishes_zero() {
        let n = notifier(Some(Alliance::Red), Some("R"));
        let mut dashboard = RecordingDashboard::default();
        n.update(0.0, &mut dashboard);
        assert_eq!(dashboard.booleans, vec![(HUB_ACTIVE_KEY, false)]);
        assert_eq!(dashboard.numbers, vec![(HUB_TIMER_KEY, 0.0)]);
    }
}
