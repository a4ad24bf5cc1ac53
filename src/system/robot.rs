//! Robot Lifecycle
//!
//! Callbacks run by the robot loop when the robot boots, every control cycle,
//! and whenever the driver station switches modes. They hand work off to the
//! command scheduler, the vision coprocessor and the dashboard, and drive the
//! hub shift notifier during teleop.

use crate::system::command::{AutoRoutine, CommandScheduler};
use crate::system::config::RobotConfig;
use crate::system::driver_station::{DriverStation, RobotMode};
use crate::system::event::{Events, ModeTracker};
use crate::system::hub_shift::HubShiftNotifier;
use crate::system::telemetry::{
    Dashboard, AUTONOMOUS_TAB, MATCH_TIME_KEY, PREMATCH_TAB, TELEOP_TAB,
};
use crate::system::vision::Vision;

/// Robot lifecycle state and its collaborators
pub struct Robot<D, S, V> {
    config: RobotConfig,
    dashboard: D,
    scheduler: S,
    vision: V,
    notifier: HubShiftNotifier,
    autonomous_command: Option<AutoRoutine>,
    modes: ModeTracker,
}

impl<D, S, V> Robot<D, S, V>
where
    D: Dashboard,
    S: CommandScheduler,
    V: Vision,
{
    /// Creates the robot with the given configuration and collaborators
    pub fn new(config: RobotConfig, dashboard: D, scheduler: S, vision: V) -> Self {
        Self {
            config,
            dashboard,
            scheduler,
            vision,
            notifier: HubShiftNotifier::new(),
            autonomous_command: None,
            modes: ModeTracker::new(),
        }
    }

    /// Runs once after boot
    pub fn robot_init(&mut self) {
        info!("Robot init");
        self.vision.set_camera_pose(&self.config.camera);
        if self.config.competition {
            self.dashboard.select_tab(PREMATCH_TAB);
        }
    }

    /// Runs one control cycle against a driver station snapshot
    ///
    /// The init callback of a newly entered mode always runs before the
    /// periodic callback of the same cycle, so the hub notifier is never
    /// updated with context from a previous period.
    pub fn cycle(&mut self, driver_station: &impl DriverStation) {
        let change = self.modes.observe(driver_station.effective_mode());
        if let Some(Events::ModeChanged(mode)) = change {
            info!("Entering {} mode", mode);
            self.mode_init(mode, driver_station);
        }
        self.robot_periodic(driver_station);
    }

    /// Runs every control cycle regardless of mode
    pub fn robot_periodic(&mut self, driver_station: &impl DriverStation) {
        self.scheduler.run();

        let match_time = driver_station.match_time();
        if self.config.competition {
            self.dashboard.put_number(MATCH_TIME_KEY, match_time);

            if driver_station.is_teleop_enabled() {
                self.notifier.update(match_time, &mut self.dashboard);
            }
        }
    }

    /// Runs the init callback for a newly entered mode
    pub fn mode_init(&mut self, mode: RobotMode, driver_station: &impl DriverStation) {
        match mode {
            RobotMode::Disabled => self.disabled_init(),
            RobotMode::Autonomous => self.autonomous_init(),
            RobotMode::Teleop => self.teleop_init(driver_station),
            RobotMode::Test => self.test_init(),
        }
    }

    /// Runs when the robot becomes disabled
    pub fn disabled_init(&mut self) {
        info!("Disabled init");
    }

    /// Runs when autonomous starts
    pub fn autonomous_init(&mut self) {
        info!("Autonomous init");
        self.autonomous_command = self.config.autonomous;
        if let Some(routine) = self.autonomous_command {
            info!("Scheduling autonomous routine {}", routine.name());
            self.scheduler.schedule(routine);
        }
        if self.config.competition {
            self.dashboard.select_tab(AUTONOMOUS_TAB);
        }
    }

    /// Runs when teleop starts
    pub fn teleop_init(&mut self, driver_station: &impl DriverStation) {
        info!("Teleop init");
        if let Some(routine) = self.autonomous_command {
            self.scheduler.cancel(routine);
        }

        // alliance and FMS data are cached once per teleop period
        self.notifier.initialize(driver_station);

        if self.config.competition {
            self.dashboard.select_tab(TELEOP_TAB);
        }
    }

    /// Runs when test mode starts
    pub fn test_init(&mut self) {
        info!("Test init");
        self.scheduler.cancel_all();
    }

    /// Hub shift notifier driven during teleop
    pub fn notifier(&self) -> &HubShiftNotifier {
        &self.notifier
    }
}
