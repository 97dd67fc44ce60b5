//! Latch bit assignments for the shield's motor terminals.
//!
//! The shield fans one 8-bit latch word out to eight H-bridge inputs. A DC
//! motor header owns two of them; a stepper port spans two headers and owns
//! four.

use serde::Deserialize;

use crate::error::ConfigError;

// Latch bit index of each H-bridge input.
const M1_A: u8 = 2;
const M1_B: u8 = 3;
const M2_A: u8 = 1;
const M2_B: u8 = 4;
const M3_A: u8 = 5;
const M3_B: u8 = 7;
const M4_A: u8 = 0;
const M4_B: u8 = 6;

/// The four coil-enable bits of a stepper port.
///
/// `a`/`c` drive one coil and `b`/`d` the other, ordered so the stepping
/// cycle walks A → AB → B → BC → C → CD → D → DA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilBits {
    /// Bit value of coil line A.
    pub a: u8,
    /// Bit value of coil line B.
    pub b: u8,
    /// Bit value of coil line C.
    pub c: u8,
    /// Bit value of coil line D.
    pub d: u8,
}

impl CoilBits {
    const fn from_indices(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            a: 1 << a,
            b: 1 << b,
            c: 1 << c,
            d: 1 << d,
        }
    }

    /// All four bits of the port.
    #[inline]
    pub const fn mask(self) -> u8 {
        self.a | self.b | self.c | self.d
    }
}

/// A stepper port: a pair of adjacent motor headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortId {
    /// Headers M1 and M2.
    M1M2,
    /// Headers M3 and M4.
    M3M4,
}

impl PortId {
    /// Coil-enable bit assignment for this port.
    pub const fn coil_bits(self) -> CoilBits {
        match self {
            PortId::M1M2 => CoilBits::from_indices(M1_A, M2_A, M1_B, M2_B),
            PortId::M3M4 => CoilBits::from_indices(M3_A, M4_A, M3_B, M4_B),
        }
    }

    /// Latch mask covering every line of this port.
    #[inline]
    pub const fn mask(self) -> u8 {
        self.coil_bits().mask()
    }

    /// The two DC headers this port spans.
    pub const fn headers(self) -> (MotorHeader, MotorHeader) {
        match self {
            PortId::M1M2 => (MotorHeader::M1, MotorHeader::M2),
            PortId::M3M4 => (MotorHeader::M3, MotorHeader::M4),
        }
    }
}

impl TryFrom<u8> for PortId {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PortId::M1M2),
            2 => Ok(PortId::M3M4),
            other => Err(ConfigError::UnknownPort(other)),
        }
    }
}

/// A single two-terminal motor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorHeader {
    /// Header M1.
    M1,
    /// Header M2.
    M2,
    /// Header M3.
    M3,
    /// Header M4.
    M4,
}

impl MotorHeader {
    /// Bit values of the header's (A, B) direction lines.
    pub const fn direction_bits(self) -> (u8, u8) {
        let (a, b) = match self {
            MotorHeader::M1 => (M1_A, M1_B),
            MotorHeader::M2 => (M2_A, M2_B),
            MotorHeader::M3 => (M3_A, M3_B),
            MotorHeader::M4 => (M4_A, M4_B),
        };
        (1 << a, 1 << b)
    }

    /// Latch mask covering both lines of this header.
    #[inline]
    pub const fn mask(self) -> u8 {
        let (a, b) = self.direction_bits();
        a | b
    }
}

impl TryFrom<u8> for MotorHeader {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MotorHeader::M1),
            2 => Ok(MotorHeader::M2),
            3 => Ok(MotorHeader::M3),
            4 => Ok(MotorHeader::M4),
            other => Err(ConfigError::UnknownHeader(other)),
        }
    }
}
