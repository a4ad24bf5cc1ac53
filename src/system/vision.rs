//! Vision Camera Setup
//!
//! Camera mounting pose handed to the vision coprocessor at startup.

/// Camera mounting pose in robot space
///
/// Translation in meters from the robot center, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CameraPose {
    /// Camera name on the vision coprocessor
    pub name: &'static str,
    /// Forward offset (m)
    pub x: f32,
    /// Left offset (m)
    pub y: f32,
    /// Up offset (m)
    pub z: f32,
    /// Roll (deg)
    pub roll: f32,
    /// Pitch (deg)
    pub pitch: f32,
    /// Yaw (deg)
    pub yaw: f32,
}

/// Vision subsystem configuration interface
pub trait Vision {
    /// Tells the coprocessor where its camera sits on the robot
    fn set_camera_pose(&mut self, pose: &CameraPose);
}
