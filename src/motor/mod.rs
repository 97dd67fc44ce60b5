//! Motor module for motor-shield.
//!
//! Provides the shield controller, the stepper engine, and the DC motor driver.

mod builder;
mod dc;
mod phase;
mod shield;
mod stepper;

pub use builder::StepperMotorBuilder;
pub use dc::{DcCommand, DcMotor};
pub use phase::Phase;
pub use shield::MotorShield;
pub use stepper::{StepOutcome, StepperMotor};
