//! The shield: single owner of the latch register.

use core::cell::{Cell, RefCell};

use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};
use crate::latch::{LatchBus, LatchRegister};

/// Motor shield controller.
///
/// Owns the latch register and hands out shared access through [`LatchBus`].
/// Motors borrow the shield and only ever touch the lines they claimed.
///
/// Access is single-threaded: the register lives in a `RefCell`, and a
/// re-entrant update reports `MotorError::LatchBusy` instead of panicking.
///
/// # Example
///
/// ```rust,ignore
/// use motor_shield::{MotorShield, PortId, StepperMotor, MicrostepCurve, Direction, StepStyle};
///
/// let shield = MotorShield::new(data, clock, latch, output_enable);
/// shield.enable()?;
///
/// let mut stepper = StepperMotor::new(
///     &shield, PortId::M3M4, 200, MicrostepCurve::Sixteenth, pwm_a, pwm_b, delay,
/// )?;
/// stepper.set_speed(60)?;
/// stepper.step(200, Direction::Forward, StepStyle::Double)?;
/// stepper.release()?;
/// ```
pub struct MotorShield<DATA, CLOCK, LATCH, ENABLE>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
    ENABLE: OutputPin,
{
    /// The latch register and its shadow word.
    register: RefCell<LatchRegister<DATA, CLOCK, LATCH, ENABLE>>,

    /// Lines reserved by live motors.
    claimed: Cell<u8>,
}

impl<DATA, CLOCK, LATCH, ENABLE> MotorShield<DATA, CLOCK, LATCH, ENABLE>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
    ENABLE: OutputPin,
{
    /// Create a shield from its four latch control lines.
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH, enable: ENABLE) -> Self {
        Self::from_register(LatchRegister::new(data, clock, latch, enable))
    }

    /// Create a shield around an existing register.
    pub fn from_register(register: LatchRegister<DATA, CLOCK, LATCH, ENABLE>) -> Self {
        Self {
            register: RefCell::new(register),
            claimed: Cell::new(0),
        }
    }

    /// Zero all motor lines and switch the latch outputs on.
    pub fn enable(&self) -> Result<()> {
        let mut register = self
            .register
            .try_borrow_mut()
            .map_err(|_| MotorError::LatchBusy)?;
        register.enable()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("shield enabled");

        Ok(())
    }

    /// Lines currently reserved by motors.
    #[inline]
    pub fn claimed(&self) -> u8 {
        self.claimed.get()
    }

    /// Take the register back out of the shield.
    pub fn into_register(self) -> LatchRegister<DATA, CLOCK, LATCH, ENABLE> {
        self.register.into_inner()
    }
}

impl<DATA, CLOCK, LATCH, ENABLE> LatchBus for MotorShield<DATA, CLOCK, LATCH, ENABLE>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
    ENABLE: OutputPin,
{
    fn word(&self) -> u8 {
        // Only fails while an update on this thread is mid-transmission
        self.register
            .try_borrow()
            .map(|register| register.word())
            .unwrap_or(0)
    }

    fn update(&self, mask: u8, bits: u8) -> Result<()> {
        let mut register = self
            .register
            .try_borrow_mut()
            .map_err(|_| MotorError::LatchBusy)?;
        register.update(mask, bits)
    }

    fn claim(&self, mask: u8) -> bool {
        let claimed = self.claimed.get();
        if claimed & mask != 0 {
            return false;
        }
        self.claimed.set(claimed | mask);

        #[cfg(feature = "defmt")]
        defmt::debug!("claimed latch lines {=u8:b}", mask);

        true
    }

    fn unclaim(&self, mask: u8) {
        self.claimed.set(self.claimed.get() & !mask);
    }
}
