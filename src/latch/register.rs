//! Bit-banged 74HC595-style latch register.
//!
//! Holds the shadow copy of the 8-bit latch word and shifts it out over three
//! GPIO lines (serial data, clock, latch). A fourth, active-low line gates the
//! register outputs.

use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};

/// Shift-register latch driven over data/clock/latch GPIO lines.
///
/// Every change retransmits the whole word; the outputs only change on the
/// final latch edge, so downstream lines never observe a partial update.
pub struct LatchRegister<DATA, CLOCK, LATCH, ENABLE>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
    ENABLE: OutputPin,
{
    /// Serial data line.
    data: DATA,

    /// Shift clock line (bits are sampled on the rising edge).
    clock: CLOCK,

    /// Storage latch line (outputs commit on the rising edge).
    latch: LATCH,

    /// Active-low output enable line.
    enable: ENABLE,

    /// Shadow copy of the word last transmitted.
    word: u8,
}

impl<DATA, CLOCK, LATCH, ENABLE> LatchRegister<DATA, CLOCK, LATCH, ENABLE>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
    ENABLE: OutputPin,
{
    /// Wrap the four control lines. No line is driven until the first
    /// transmission.
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH, enable: ENABLE) -> Self {
        Self {
            data,
            clock,
            latch,
            enable,
            word: 0,
        }
    }

    /// Current shadow word.
    #[inline]
    pub fn word(&self) -> u8 {
        self.word
    }

    /// Clear every motor line, then switch the register outputs on.
    pub fn enable(&mut self) -> Result<()> {
        self.write(0)?;
        self.enable.set_low().map_err(|_| MotorError::PinError)?;
        Ok(())
    }

    /// Replace the whole word and transmit it.
    pub fn write(&mut self, word: u8) -> Result<()> {
        self.word = word;
        self.transmit()
    }

    /// Clear the bits in `mask`, set `bits & mask`, and transmit the result.
    ///
    /// Bits outside `mask` keep their current value.
    pub fn update(&mut self, mask: u8, bits: u8) -> Result<()> {
        self.write((self.word & !mask) | (bits & mask))
    }

    /// Shift the shadow word out MSB first and commit it to the outputs.
    pub fn transmit(&mut self) -> Result<()> {
        self.latch.set_low().map_err(|_| MotorError::PinError)?;
        self.data.set_low().map_err(|_| MotorError::PinError)?;

        for i in 0..8 {
            self.clock.set_low().map_err(|_| MotorError::PinError)?;

            if self.word & (1 << (7 - i)) != 0 {
                self.data.set_high().map_err(|_| MotorError::PinError)?;
            } else {
                self.data.set_low().map_err(|_| MotorError::PinError)?;
            }

            self.clock.set_high().map_err(|_| MotorError::PinError)?;
        }

        self.latch.set_high().map_err(|_| MotorError::PinError)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("latch <- {=u8:b}", self.word);

        Ok(())
    }

    /// Give back the control lines.
    pub fn release(self) -> (DATA, CLOCK, LATCH, ENABLE) {
        (self.data, self.clock, self.latch, self.enable)
    }
}
