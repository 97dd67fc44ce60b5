//! Stepping rules.
//!
//! Pure functions of the phase position: how far one call moves it, and which
//! coil lines and duty cycles a position corresponds to.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::latch::CoilBits;

use super::curve::MicrostepCurve;

/// Direction of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing phase position.
    Forward,
    /// Decreasing phase position.
    Backward,
}

impl TryFrom<u8> for Direction {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Forward),
            2 => Ok(Direction::Backward),
            other => Err(ConfigError::UnknownDirection(other)),
        }
    }
}

/// Coil energization pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepStyle {
    /// One coil on at a time (A, B, C, D).
    #[default]
    Single,
    /// Two coils on at a time (AB, BC, CD, DA); more torque.
    Double,
    /// Alternates single and double states: half steps.
    Interleave,
    /// Sine-weighted currents on both coils.
    Microstep,
}

impl StepStyle {
    /// Phase units one call moves from `position`.
    ///
    /// `Single` and `Double` take a half step when the position sits on the
    /// other style's states, which realigns the sequence.
    pub fn phase_delta(self, position: u32, microsteps: u32) -> u32 {
        let half = microsteps / 2;
        let on_double_state = (position / half) % 2 == 1;
        match self {
            StepStyle::Single if on_double_state => half,
            StepStyle::Single => microsteps,
            StepStyle::Double if on_double_state => microsteps,
            StepStyle::Double => half,
            StepStyle::Interleave => half,
            StepStyle::Microstep => 1,
        }
    }

    /// One-step calls per requested step.
    #[inline]
    pub fn calls_per_step(self, microsteps: u32) -> u32 {
        match self {
            StepStyle::Microstep => microsteps,
            _ => 1,
        }
    }

    /// Divisor applied to the full-step interval for each call.
    #[inline]
    pub fn interval_divisor(self, microsteps: u32) -> u32 {
        match self {
            StepStyle::Interleave => 2,
            StepStyle::Microstep => microsteps,
            _ => 1,
        }
    }
}

impl TryFrom<u8> for StepStyle {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StepStyle::Single),
            2 => Ok(StepStyle::Double),
            3 => Ok(StepStyle::Interleave),
            4 => Ok(StepStyle::Microstep),
            other => Err(ConfigError::UnknownStyle(other)),
        }
    }
}

/// Output state for one phase position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilDrive {
    /// Coil-enable bits to set within the port mask.
    pub enable: u8,
    /// Duty (0-255) of the first coil's PWM channel.
    pub duty_a: u8,
    /// Duty (0-255) of the second coil's PWM channel.
    pub duty_b: u8,
}

impl CoilDrive {
    /// Compute the drive for a wrapped `position` (`< curve.cycle()`).
    pub fn at(position: u32, style: StepStyle, curve: MicrostepCurve, bits: CoilBits) -> Self {
        let microsteps = curve.microsteps();

        if style == StepStyle::Microstep {
            let q = quadrant(position, microsteps);
            let offset = position - q * microsteps;
            let (rising, falling) = (curve.duty(offset), curve.duty(microsteps - offset));
            let (duty_a, duty_b) = if q % 2 == 0 {
                (falling, rising)
            } else {
                (rising, falling)
            };
            let enable = match q {
                0 => bits.a | bits.b,
                1 => bits.b | bits.c,
                2 => bits.c | bits.d,
                _ => bits.d | bits.a,
            };
            Self {
                enable,
                duty_a,
                duty_b,
            }
        } else {
            let enable = match (position / (microsteps / 2)) % 8 {
                0 => bits.a,
                1 => bits.a | bits.b,
                2 => bits.b,
                3 => bits.b | bits.c,
                4 => bits.c,
                5 => bits.c | bits.d,
                6 => bits.d,
                _ => bits.d | bits.a,
            };
            Self {
                enable,
                duty_a: 255,
                duty_b: 255,
            }
        }
    }
}

/// Quadrant (0-3) of a wrapped position.
#[inline]
pub fn quadrant(position: u32, microsteps: u32) -> u32 {
    (position / microsteps).min(3)
}
