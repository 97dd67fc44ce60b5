//! Configuration module for motor-shield.
//!
//! Describes which motors are wired to which shield terminals, loaded from
//! TOML files (with `std` feature) or pre-parsed data.

#[cfg(feature = "std")]
mod loader;
mod motor;
mod system;
mod validation;

pub use motor::{DcMotorConfig, StepperConfig};
pub use system::ShieldConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
