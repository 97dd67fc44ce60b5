//! Microstep current curves.
//!
//! Each table samples a quarter sine wave from 0 to 255; the stepper engine
//! reads it forwards for one coil and backwards for the other.

use serde::Deserialize;

use crate::error::ConfigError;

const CURVE_8: [u8; 9] = [0, 50, 98, 142, 180, 212, 236, 250, 255];

const CURVE_16: [u8; 17] = [
    0, 25, 50, 74, 98, 120, 141, 162, 180, 197, 212, 225, 236, 244, 250, 253, 255,
];

/// Microstep resolution, selected per motor at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u16")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MicrostepCurve {
    /// 8 microsteps per full step (9-point table).
    Eighth,
    /// 16 microsteps per full step (17-point table).
    #[default]
    Sixteenth,
}

impl MicrostepCurve {
    /// Duty-cycle table, including both end points.
    #[inline]
    pub const fn table(self) -> &'static [u8] {
        match self {
            MicrostepCurve::Eighth => &CURVE_8,
            MicrostepCurve::Sixteenth => &CURVE_16,
        }
    }

    /// Microsteps per full step (table intervals, one less than its length).
    #[inline]
    pub const fn microsteps(self) -> u32 {
        match self {
            MicrostepCurve::Eighth => 8,
            MicrostepCurve::Sixteenth => 16,
        }
    }

    /// Length of one electrical cycle in microsteps (four full steps).
    #[inline]
    pub const fn cycle(self) -> u32 {
        self.microsteps() * 4
    }

    /// Duty value at `index`; indices past the end read the final 255.
    #[inline]
    pub fn duty(self, index: u32) -> u8 {
        let table = self.table();
        table
            .get(index as usize)
            .copied()
            .unwrap_or(table[table.len() - 1])
    }
}

impl TryFrom<u16> for MicrostepCurve {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(MicrostepCurve::Eighth),
            16 => Ok(MicrostepCurve::Sixteenth),
            other => Err(ConfigError::InvalidMicrosteps(other)),
        }
    }
}
