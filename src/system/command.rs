//! Command Scheduling
//!
//! Interface to the command framework that runs robot routines. The routines
//! themselves are executed elsewhere; the robot only schedules and cancels them.

/// Named autonomous routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AutoRoutine(&'static str);

impl AutoRoutine {
    /// Creates a routine handle from its registered name
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Registered name of the routine
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Command framework
pub trait CommandScheduler {
    /// Runs one scheduler iteration
    fn run(&mut self);

    /// Schedules a routine
    fn schedule(&mut self, routine: AutoRoutine);

    /// Cancels a routine if it is scheduled
    fn cancel(&mut self, routine: AutoRoutine);

    /// Cancels every scheduled routine
    fn cancel_all(&mut self);
}
