//! Driver Station Link Frames
//!
//! Newline-terminated ASCII frames exchanged with the driver station bridge.
//!
//! # Inbound
//! ```text
//! DS,<mode>,<enabled>,<alliance>,<match_time>,<game_message>
//!
//! mode:         D disabled, A autonomous, T teleop, X test
//! enabled:      0 or 1
//! alliance:     R, B, or - when unknown
//! match_time:   seconds remaining, decimal
//! game_message: rest of the line, may be empty
//! ```
//!
//! # Outbound
//! ```text
//! NT,B,<key>,<0|1>
//! NT,N,<key>,<value>
//! TAB,<name>
//! CAM,<name>,<x>,<y>,<z>,<roll>,<pitch>,<yaw>
//! CMD,S,<routine>    schedule
//! CMD,C,<routine>    cancel
//! CMD,X,*            cancel all
//! ```

use core::fmt::Write;

use heapless::{String, Vec};

use crate::system::command::AutoRoutine;
use crate::system::config::LINK_LINE_CAPACITY;
use crate::system::driver_station::{Alliance, DriverStationData, RobotMode};
use crate::system::vision::CameraPose;

/// One line of link text, newline excluded
pub type Line = String<LINK_LINE_CAPACITY>;

/// Errors raised while reading or writing link frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame does not start with a known tag
    UnknownTag,
    /// Frame ended before all fields were read
    MissingField,
    /// Mode field is not one of D, A, T, X
    InvalidMode,
    /// Enable field is not 0 or 1
    InvalidFlag,
    /// Alliance field is not R, B or -
    InvalidAlliance,
    /// Match time is not a finite number
    InvalidMatchTime,
    /// Game message exceeds the supported length
    MessageTooLong,
    /// Line exceeds [`LINK_LINE_CAPACITY`]
    LineTooLong,
    /// Line is not valid UTF-8
    InvalidEncoding,
}

/// Parses a driver station state frame
pub fn parse_frame(line: &str) -> Result<DriverStationData, FrameError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.splitn(6, ',');

    if fields.next() != Some("DS") {
        return Err(FrameError::UnknownTag);
    }

    let mode = match next_field(&mut fields)? {
        "D" => RobotMode::Disabled,
        "A" => RobotMode::Autonomous,
        "T" => RobotMode::Teleop,
        "X" => RobotMode::Test,
        _ => return Err(FrameError::InvalidMode),
    };

    let enabled = match next_field(&mut fields)? {
        "0" => false,
        "1" => true,
        _ => return Err(FrameError::InvalidFlag),
    };

    let alliance = match next_field(&mut fields)? {
        "-" => None,
        code => {
            let mut chars = code.chars();
            match (chars.next().and_then(Alliance::from_code), chars.next()) {
                (Some(alliance), None) => Some(alliance),
                _ => return Err(FrameError::InvalidAlliance),
            }
        }
    };

    let match_time = next_field(&mut fields)?
        .trim()
        .parse::<f32>()
        .map_err(|_| FrameError::InvalidMatchTime)?;
    if !match_time.is_finite() {
        return Err(FrameError::InvalidMatchTime);
    }

    let message = next_field(&mut fields)?;

    let mut data = DriverStationData::new();
    data.mode = mode;
    data.enabled = enabled;
    data.alliance = alliance;
    data.match_time = match_time;
    data.set_game_message(message)
        .map_err(|_| FrameError::MessageTooLong)?;
    Ok(data)
}

fn next_field<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, FrameError> {
    fields.next().ok_or(FrameError::MissingField)
}

/// Collects received bytes into lines
///
/// Overlong lines are discarded up to the next newline and reported once.
pub struct LineAssembler {
    buffer: Vec<u8, LINK_LINE_CAPACITY>,
    overflowed: bool,
    complete: bool,
}

impl LineAssembler {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
            complete: false,
        }
    }

    /// Feeds one byte, returning the finished line when `byte` is a newline
    pub fn push(&mut self, byte: u8) -> Option<Result<&str, FrameError>> {
        if self.complete {
            self.buffer.clear();
            self.complete = false;
        }

        if byte != b'\n' {
            if !self.overflowed && self.buffer.push(byte).is_err() {
                self.overflowed = true;
            }
            return None;
        }

        self.complete = true;
        if self.overflowed {
            self.overflowed = false;
            return Some(Err(FrameError::LineTooLong));
        }
        Some(core::str::from_utf8(&self.buffer).map_err(|_| FrameError::InvalidEncoding))
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Message sent from the robot to the driver station bridge
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outbound {
    /// Boolean dashboard value
    Boolean { key: &'static str, value: bool },
    /// Numeric dashboard value
    Number { key: &'static str, value: f32 },
    /// Dashboard tab switch
    SelectTab(&'static str),
    /// Vision camera mounting pose
    CameraPose(CameraPose),
    /// Start a routine
    Schedule(AutoRoutine),
    /// Stop a routine
    Cancel(AutoRoutine),
    /// Stop every routine
    CancelAll,
}

impl Outbound {
    /// Renders the message as one link line, newline excluded
    pub fn encode(&self) -> Result<Line, FrameError> {
        let mut line = Line::new();
        let written = match self {
            Outbound::Boolean { key, value } => {
                write!(line, "NT,B,{},{}", key, u8::from(*value))
            }
            Outbound::Number { key, value } => write!(line, "NT,N,{},{:.1}", key, value),
            Outbound::SelectTab(tab) => write!(line, "TAB,{}", tab),
            Outbound::CameraPose(pose) => write!(
                line,
                "CAM,{},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
                pose.name, pose.x, pose.y, pose.z, pose.roll, pose.pitch, pose.yaw
            ),
            Outbound::Schedule(routine) => write!(line, "CMD,S,{}", routine.name()),
            Outbound::Cancel(routine) => write!(line, "CMD,C,{}", routine.name()),
            Outbound::CancelAll => write!(line, "CMD,X,*"),
        };
        written.map_err(|_| FrameError::LineTooLong)?;
        Ok(line)
    }
}
