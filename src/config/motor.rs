//! Motor configuration from TOML.

use serde::Deserialize;

use crate::latch::{MotorHeader, PortId};
use crate::motion::MicrostepCurve;

/// Stepper motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct StepperConfig {
    /// Shield port (1 = M1/M2, 2 = M3/M4).
    pub port: PortId,

    /// Full steps per revolution (typically 200 for 1.8° motors).
    pub steps_per_revolution: u32,

    /// Microstep resolution (8 or 16).
    #[serde(default)]
    pub microsteps: MicrostepCurve,

    /// Optional initial speed in revolutions per minute.
    #[serde(default)]
    pub rpm: Option<u32>,
}

impl StepperConfig {
    /// Latch lines this stepper claims.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.port.mask()
    }
}

/// DC motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct DcMotorConfig {
    /// Shield header (1-4).
    pub header: MotorHeader,

    /// Initial speed in percent (0-100).
    #[serde(default)]
    pub speed_percent: u8,
}

impl DcMotorConfig {
    /// Latch lines this motor claims.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.header.mask()
    }
}
