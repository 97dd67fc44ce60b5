//! # motor-shield
//!
//! Driver for shift-register motor shields: eight H-bridge inputs multiplexed
//! through one 8-bit latch, plus PWM channels for coil current and motor
//! speed.
//!
//! ## Features
//!
//! - **Stepper engine**: single, double, interleaved and microstepped drive
//!   with 8- or 16-step sine-weighted current curves
//! - **Shared latch**: one [`MotorShield`] owns the latch word; motors claim
//!   their lines and only ever rewrite their own bits
//! - **embedded-hal 1.0**: `OutputPin` for the latch lines, `SetDutyCycle` for
//!   coil/speed PWM, `DelayNs` for step pacing
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: describe the wiring of a shield in TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use motor_shield::{Direction, MotorShield, StepStyle, StepperMotorBuilder};
//!
//! let shield = MotorShield::new(data_pin, clock_pin, latch_pin, enable_pin);
//! shield.enable()?;
//!
//! let mut stepper = StepperMotorBuilder::new()
//!     .port_number(2)
//!     .steps_per_revolution(200)
//!     .rpm(60)
//!     .pwm(pwm_a, pwm_b)
//!     .delay(delay)
//!     .build(&shield)?;
//!
//! stepper.step(100, Direction::Forward, StepStyle::Microstep)?;
//! stepper.release()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod latch;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, DcMotorConfig, ShieldConfig, StepperConfig};
pub use error::{Error, Result};
pub use latch::{CoilBits, LatchBus, LatchRegister, MotorHeader, PortId};
pub use motion::{Direction, MicrostepCurve, StepStyle};
pub use motor::{DcCommand, DcMotor, MotorShield, StepOutcome, StepperMotor, StepperMotorBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
