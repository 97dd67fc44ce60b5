//! DC motor on a single shield header.
//!
//! Direction is two latch lines of the header (H-bridge inputs); speed is one
//! PWM channel driven 0-100%.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::{DcMotorConfig, ShieldConfig};
use crate::error::{ConfigError, Error, MotorError, Result};
use crate::latch::{LatchBus, MotorHeader};

/// DC motor run command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DcCommand {
    /// Line A high, line B low.
    Forward,
    /// Line A low, line B high.
    Backward,
    /// Both lines low; the motor coasts.
    #[default]
    Release,
}

impl TryFrom<u8> for DcCommand {
    type Error = ConfigError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(DcCommand::Forward),
            2 => Ok(DcCommand::Backward),
            4 => Ok(DcCommand::Release),
            other => Err(ConfigError::UnknownCommand(other)),
        }
    }
}

/// DC motor driver.
pub struct DcMotor<'a, BUS, PWM>
where
    BUS: LatchBus,
    PWM: SetDutyCycle,
{
    bus: &'a BUS,
    header: MotorHeader,
    pwm: PWM,
    command: DcCommand,
    speed: u8,
}

impl<'a, BUS, PWM> DcMotor<'a, BUS, PWM>
where
    BUS: LatchBus,
    PWM: SetDutyCycle,
{
    /// Create a DC motor on `header`, claiming its two latch lines.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PortInUse` if another motor holds either line.
    pub fn new(bus: &'a BUS, header: MotorHeader, pwm: PWM) -> Result<Self> {
        if !bus.claim(header.mask()) {
            return Err(ConfigError::PortInUse(header.mask()).into());
        }

        Ok(Self {
            bus,
            header,
            pwm,
            command: DcCommand::Release,
            speed: 0,
        })
    }

    /// Create a DC motor from a named configuration entry and apply its
    /// initial speed.
    pub fn from_config(bus: &'a BUS, config: &ShieldConfig, name: &str, pwm: PWM) -> Result<Self> {
        let entry: &DcMotorConfig = config.dc_motor(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(name).unwrap_or_default(),
            ))
        })?;

        let mut motor = Self::new(bus, entry.header, pwm)?;
        motor.set_speed(entry.speed_percent)?;
        Ok(motor)
    }

    /// Get the header.
    #[inline]
    pub fn header(&self) -> MotorHeader {
        self.header
    }

    /// Last command applied.
    #[inline]
    pub fn command(&self) -> DcCommand {
        self.command
    }

    /// Current speed in percent.
    #[inline]
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Drive the header's direction lines.
    pub fn run(&mut self, command: DcCommand) -> Result<()> {
        let (a, b) = self.header.direction_bits();
        let bits = match command {
            DcCommand::Forward => a,
            DcCommand::Backward => b,
            DcCommand::Release => 0,
        };
        self.bus.update(a | b, bits)?;
        self.command = command;

        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {}", self.header, command);

        Ok(())
    }

    /// Set the speed in percent; values above 100 are clamped.
    pub fn set_speed(&mut self, percent: u8) -> Result<()> {
        let percent = percent.min(100);
        self.pwm
            .set_duty_cycle_percent(percent)
            .map_err(|_| MotorError::PwmError)?;
        self.speed = percent;
        Ok(())
    }
}

impl<BUS, PWM> Drop for DcMotor<'_, BUS, PWM>
where
    BUS: LatchBus,
    PWM: SetDutyCycle,
{
    fn drop(&mut self) {
        self.bus.unclaim(self.header.mask());
    }
}
