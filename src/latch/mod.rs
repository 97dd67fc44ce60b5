//! Latch module for motor-shield.
//!
//! Provides the shift-register protocol, the line-sharing contract, and the
//! bit assignments of each motor terminal.

mod bus;
mod port;
mod register;

pub use bus::LatchBus;
pub use port::{CoilBits, MotorHeader, PortId};
pub use register::LatchRegister;
