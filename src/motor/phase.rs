//! Electrical phase tracking for stepper motors.
//!
//! Tracks the position within one four-full-step electrical cycle, in
//! microstep units.

use crate::motion::{Direction, MicrostepCurve};

/// Wrapped phase position.
///
/// Always in `[0, cycle)`; every update wraps in a single expression so no
/// intermediate out-of-range value is ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Current position in microsteps.
    position: u32,
    /// Cycle length (four full steps) in microsteps.
    cycle: u32,
}

impl Phase {
    /// Create a phase tracker at position 0.
    #[inline]
    pub fn new(curve: MicrostepCurve) -> Self {
        Self {
            position: 0,
            cycle: curve.cycle(),
        }
    }

    /// Current position in microsteps.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Cycle length in microsteps.
    #[inline]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Move by `delta` microsteps and return the wrapped position.
    #[inline]
    pub fn advance(&mut self, direction: Direction, delta: u32) -> u32 {
        let delta = delta % self.cycle;
        self.position = match direction {
            Direction::Forward => (self.position + delta) % self.cycle,
            Direction::Backward => (self.position + self.cycle - delta) % self.cycle,
        };
        self.position
    }

    /// Reset to position 0.
    #[inline]
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_wraps_at_cycle() {
        let mut phase = Phase::new(MicrostepCurve::Sixteenth);
        assert_eq!(phase.cycle(), 64);

        assert_eq!(phase.advance(Direction::Forward, 48), 48);
        assert_eq!(phase.advance(Direction::Forward, 16), 0);
        assert_eq!(phase.advance(Direction::Forward, 8), 8);
    }

    #[test]
    fn test_backward_crosses_zero() {
        let mut phase = Phase::new(MicrostepCurve::Eighth);
        assert_eq!(phase.advance(Direction::Backward, 1), 31);
        assert_eq!(phase.advance(Direction::Backward, 8), 23);

        phase.reset();
        assert_eq!(phase.advance(Direction::Backward, 32), 0);
    }
}
