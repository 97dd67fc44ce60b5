//! Shield configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::motor::{DcMotorConfig, StepperConfig};

/// Root configuration structure from TOML: the motors wired to one shield.
#[derive(Debug, Clone, Deserialize)]
pub struct ShieldConfig {
    /// Named stepper motors.
    #[serde(default)]
    pub steppers: FnvIndexMap<String<32>, StepperConfig, 4>,

    /// Named DC motors.
    #[serde(default)]
    pub dc_motors: FnvIndexMap<String<32>, DcMotorConfig, 4>,
}

impl ShieldConfig {
    /// Get a stepper configuration by name.
    pub fn stepper(&self, name: &str) -> Option<&StepperConfig> {
        self.steppers
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a DC motor configuration by name.
    pub fn dc_motor(&self, name: &str) -> Option<&DcMotorConfig> {
        self.dc_motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all stepper names.
    pub fn stepper_names(&self) -> impl Iterator<Item = &str> {
        self.steppers.keys().map(|s| s.as_str())
    }

    /// List all DC motor names.
    pub fn dc_motor_names(&self) -> impl Iterator<Item = &str> {
        self.dc_motors.keys().map(|s| s.as_str())
    }

    /// Every configured motor with the latch lines it claims.
    pub fn claims(&self) -> impl Iterator<Item = (&str, u8)> {
        self.steppers
            .iter()
            .map(|(k, v)| (k.as_str(), v.mask()))
            .chain(self.dc_motors.iter().map(|(k, v)| (k.as_str(), v.mask())))
    }
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            steppers: FnvIndexMap::new(),
            dc_motors: FnvIndexMap::new(),
        }
    }
}
