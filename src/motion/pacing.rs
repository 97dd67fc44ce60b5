//! Step pacing with a millisecond-granularity delay.

use embedded_hal::delay::DelayNs;

use crate::error::MotionError;

use super::style::StepStyle;

/// Microseconds in one minute.
const US_PER_MINUTE: u64 = 60_000_000;

/// Spaces one-step calls using whole-millisecond sleeps.
///
/// The sub-millisecond part of each interval is accumulated and paid back as
/// an extra 1 ms sleep whenever it reaches a full millisecond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepPacer {
    /// Full-step interval in microseconds (0 until a speed is set).
    us_per_step: u32,

    /// Accumulated sub-millisecond remainder, always < 1000.
    remainder_us: u32,
}

impl StepPacer {
    /// Create a pacer with no speed set; every pause is zero-length.
    #[inline]
    pub const fn new() -> Self {
        Self {
            us_per_step: 0,
            remainder_us: 0,
        }
    }

    /// Derive the full-step interval from a motor resolution and speed.
    ///
    /// Resets the accumulated remainder.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::InvalidSpeed` if either argument is zero.
    pub fn set_speed(&mut self, steps_per_revolution: u32, rpm: u32) -> Result<u32, MotionError> {
        let steps_per_minute = steps_per_revolution as u64 * rpm as u64;
        if steps_per_minute == 0 {
            return Err(MotionError::InvalidSpeed {
                steps_per_revolution,
                rpm,
            });
        }

        let us = US_PER_MINUTE / steps_per_minute;
        self.us_per_step = u32::try_from(us).unwrap_or(u32::MAX);
        self.remainder_us = 0;
        Ok(self.us_per_step)
    }

    /// Full-step interval in microseconds.
    #[inline]
    pub fn us_per_step(&self) -> u32 {
        self.us_per_step
    }

    /// Sub-millisecond time owed to the next pauses.
    #[inline]
    pub fn remainder_us(&self) -> u32 {
        self.remainder_us
    }

    /// Interval between one-step calls for `style`.
    #[inline]
    pub fn interval_us(&self, style: StepStyle, microsteps: u32) -> u32 {
        self.us_per_step / style.interval_divisor(microsteps)
    }

    /// Sleep for `interval_us`, rounded down to whole milliseconds, paying
    /// back the accumulated remainder when it reaches 1 ms.
    pub fn pause<D: DelayNs>(&mut self, interval_us: u32, delay: &mut D) {
        let whole_ms = interval_us / 1000;
        if whole_ms > 0 {
            delay.delay_ms(whole_ms);
        }

        self.remainder_us += interval_us % 1000;
        if self.remainder_us >= 1000 {
            delay.delay_ms(1);
            self.remainder_us -= 1000;
        }
    }
}
