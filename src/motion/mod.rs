//! Motion module for motor-shield.
//!
//! Provides the microstep curves, stepping rules, and step pacing.

mod curve;
mod pacing;
mod style;

pub use curve::MicrostepCurve;
pub use pacing::StepPacer;
pub use style::{quadrant, CoilDrive, Direction, StepStyle};
