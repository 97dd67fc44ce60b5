//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{DcMotorConfig, ShieldConfig, StepperConfig};

/// Validate a shield configuration.
///
/// Checks:
/// - Steppers have a non-zero resolution and speed
/// - DC motor speeds are within 0-100%
/// - No two motors share a latch line
pub fn validate_config(config: &ShieldConfig) -> Result<()> {
    for (_, stepper) in config.steppers.iter() {
        validate_stepper(stepper)?;
    }

    for (_, motor) in config.dc_motors.iter() {
        validate_dc_motor(motor)?;
    }

    validate_claims(config)
}

fn validate_stepper(config: &StepperConfig) -> Result<()> {
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::ZeroStepsPerRevolution));
    }

    if config.rpm == Some(0) {
        return Err(Error::Config(ConfigError::ZeroSpeed));
    }

    Ok(())
}

fn validate_dc_motor(config: &DcMotorConfig) -> Result<()> {
    if config.speed_percent > 100 {
        return Err(Error::Config(ConfigError::InvalidSpeedPercent(
            config.speed_percent,
        )));
    }

    Ok(())
}

fn validate_claims(config: &ShieldConfig) -> Result<()> {
    for (i, (first, first_mask)) in config.claims().enumerate() {
        for (second, second_mask) in config.claims().skip(i + 1) {
            if first_mask & second_mask != 0 {
                return Err(Error::Config(ConfigError::PortConflict {
                    first: heapless::String::try_from(first).unwrap_or_default(),
                    second: heapless::String::try_from(second).unwrap_or_default(),
                }));
            }
        }
    }

    Ok(())
}
