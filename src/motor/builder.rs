//! Builder pattern for StepperMotor.

use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::{ShieldConfig, StepperConfig};
use crate::error::{ConfigError, Error, Result};
use crate::latch::{LatchBus, PortId};
use crate::motion::MicrostepCurve;

use super::stepper::StepperMotor;

/// Builder for creating StepperMotor instances.
///
/// Selectors may be given as raw numbers; they are decoded in
/// [`build`](Self::build), before any line is claimed or driven.
pub struct StepperMotorBuilder<PWMA, PWMB, DELAY>
where
    PWMA: SetDutyCycle,
    PWMB: SetDutyCycle,
    DELAY: DelayNs,
{
    pwm_a: Option<PWMA>,
    pwm_b: Option<PWMB>,
    delay: Option<DELAY>,
    port: Option<core::result::Result<PortId, ConfigError>>,
    steps_per_revolution: Option<u32>,
    curve: MicrostepCurve,
    rpm: Option<u32>,
}

impl<PWMA, PWMB, DELAY> Default for StepperMotorBuilder<PWMA, PWMB, DELAY>
where
    PWMA: SetDutyCycle,
    PWMB: SetDutyCycle,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PWMA, PWMB, DELAY> StepperMotorBuilder<PWMA, PWMB, DELAY>
where
    PWMA: SetDutyCycle,
    PWMB: SetDutyCycle,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pwm_a: None,
            pwm_b: None,
            delay: None,
            port: None,
            steps_per_revolution: None,
            curve: MicrostepCurve::default(),
            rpm: None,
        }
    }

    /// Set both coil PWM channels.
    pub fn pwm(mut self, coil_a: PWMA, coil_b: PWMB) -> Self {
        self.pwm_a = Some(coil_a);
        self.pwm_b = Some(coil_b);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the port.
    pub fn port(mut self, port: PortId) -> Self {
        self.port = Some(Ok(port));
        self
    }

    /// Set the port by number (1 = M1/M2, 2 = M3/M4).
    pub fn port_number(mut self, port: u8) -> Self {
        self.port = Some(PortId::try_from(port));
        self
    }

    /// Set full steps per revolution (typically 200 for 1.8° motors).
    pub fn steps_per_revolution(mut self, steps: u32) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set the microstep curve.
    pub fn curve(mut self, curve: MicrostepCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Set an initial speed in revolutions per minute.
    pub fn rpm(mut self, rpm: u32) -> Self {
        self.rpm = Some(rpm);
        self
    }

    /// Configure from a StepperConfig.
    pub fn from_stepper_config(mut self, config: &StepperConfig) -> Self {
        self.port = Some(Ok(config.port));
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self.curve = config.microsteps;
        self.rpm = config.rpm;
        self
    }

    /// Configure from ShieldConfig by motor name.
    pub fn from_config(self, config: &ShieldConfig, name: &str) -> Result<Self> {
        let stepper = config.stepper(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_stepper_config(stepper))
    }

    /// Build the StepperMotor on `bus`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required part is missing, a selector is invalid,
    /// the speed is zero, or the port is already in use. No latch line is
    /// driven in any case.
    pub fn build<BUS: LatchBus>(self, bus: &BUS) -> Result<StepperMotor<'_, BUS, PWMA, PWMB, DELAY>> {
        let port = self.port.ok_or(ConfigError::MissingField("port"))??;

        let steps_per_revolution = self
            .steps_per_revolution
            .ok_or(ConfigError::MissingField("steps_per_revolution"))?;

        if self.rpm == Some(0) {
            return Err(ConfigError::ZeroSpeed.into());
        }

        let pwm_a = self.pwm_a.ok_or(ConfigError::MissingField("pwm"))?;
        let pwm_b = self.pwm_b.ok_or(ConfigError::MissingField("pwm"))?;
        let delay = self.delay.ok_or(ConfigError::MissingField("delay"))?;

        let mut motor = StepperMotor::new(
            bus,
            port,
            steps_per_revolution,
            self.curve,
            pwm_a,
            pwm_b,
            delay,
        )?;

        if let Some(rpm) = self.rpm {
            motor.set_speed(rpm)?;
        }

        Ok(motor)
    }
}
