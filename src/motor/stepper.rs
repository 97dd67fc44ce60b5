//! Stepper motor engine.
//!
//! Generic over the shared latch bus, two embedded-hal 1.0 PWM channels (one
//! per coil) and a delay provider for pacing.

use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;

use crate::error::{ConfigError, MotorError, Result};
use crate::latch::{CoilBits, LatchBus, PortId};
use crate::motion::{CoilDrive, Direction, MicrostepCurve, StepPacer, StepStyle};

use super::phase::Phase;

/// Result of a (possibly cancelled) multi-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutcome {
    /// One-step calls executed, including cycle-completion calls.
    pub calls: u32,
    /// Phase position after the last call.
    pub position: u32,
    /// Whether the move stopped early on request.
    pub cancelled: bool,
}

/// Two-coil stepper motor on one shield port.
///
/// Generic over:
/// - `BUS`: shared latch word (usually a [`MotorShield`](super::MotorShield))
/// - `PWMA`/`PWMB`: coil current channels (must implement `SetDutyCycle`)
/// - `DELAY`: delay provider for step pacing (must implement `DelayNs`)
///
/// The port's latch lines are claimed on construction and returned on drop.
pub struct StepperMotor<'a, BUS, PWMA, PWMB, DELAY>
where
    BUS: LatchBus,
    PWMA: SetDutyCycle,
    PWMB: SetDutyCycle,
    DELAY: DelayNs,
{
    /// Shared latch word.
    bus: &'a BUS,

    /// Port the coils are wired to.
    port: PortId,

    /// Coil-enable bits of `port`.
    coils: CoilBits,

    /// First coil's current channel.
    pwm_a: PWMA,

    /// Second coil's current channel.
    pwm_b: PWMB,

    /// Delay provider for pacing.
    delay: DELAY,

    /// Microstep resolution.
    curve: MicrostepCurve,

    /// Full steps per mechanical revolution.
    steps_per_revolution: u32,

    /// Electrical phase position.
    phase: Phase,

    /// Step interval and sub-millisecond carry.
    pacer: StepPacer,

    /// Duty pair last programmed.
    duty: (u8, u8),
}

impl<'a, BUS, PWMA, PWMB, DELAY> StepperMotor<'a, BUS, PWMA, PWMB, DELAY>
where
    BUS: LatchBus,
    PWMA: SetDutyCycle,
    PWMB: SetDutyCycle,
    DELAY: DelayNs,
{
    /// Create a stepper on `port`, claiming its latch lines.
    ///
    /// Nothing is transmitted until the first step or release.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ZeroStepsPerRevolution` if `steps_per_revolution` is 0
    /// - `ConfigError::PortInUse` if another motor holds any of the port's lines
    pub fn new(
        bus: &'a BUS,
        port: PortId,
        steps_per_revolution: u32,
        curve: MicrostepCurve,
        pwm_a: PWMA,
        pwm_b: PWMB,
        delay: DELAY,
    ) -> Result<Self> {
        if steps_per_revolution == 0 {
            return Err(ConfigError::ZeroStepsPerRevolution.into());
        }

        if !bus.claim(port.mask()) {
            return Err(ConfigError::PortInUse(port.mask()).into());
        }

        Ok(Self {
            bus,
            port,
            coils: port.coil_bits(),
            pwm_a,
            pwm_b,
            delay,
            curve,
            steps_per_revolution,
            phase: Phase::new(curve),
            pacer: StepPacer::new(),
            duty: (0, 0),
        })
    }

    /// Get the port.
    #[inline]
    pub fn port(&self) -> PortId {
        self.port
    }

    /// Get the microstep curve.
    #[inline]
    pub fn curve(&self) -> MicrostepCurve {
        self.curve
    }

    /// Microsteps per full step.
    #[inline]
    pub fn microsteps(&self) -> u32 {
        self.curve.microsteps()
    }

    /// Get steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Current phase position, in `[0, 4 * microsteps)`.
    #[inline]
    pub fn position(&self) -> u32 {
        self.phase.position()
    }

    /// Duty pair (coil A, coil B) last programmed.
    #[inline]
    pub fn duty(&self) -> (u8, u8) {
        self.duty
    }

    /// Full-step interval in microseconds (0 until a speed is set).
    #[inline]
    pub fn us_per_step(&self) -> u32 {
        self.pacer.us_per_step()
    }

    /// This port's bits of the shared latch word.
    #[inline]
    pub fn enabled_coils(&self) -> u8 {
        self.bus.word() & self.coils.mask()
    }

    /// Set the speed in revolutions per minute.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::InvalidSpeed` if `rpm` is 0.
    pub fn set_speed(&mut self, rpm: u32) -> Result<()> {
        let _us = self.pacer.set_speed(self.steps_per_revolution, rpm)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{} at {} rpm: {} us/step", self.port, rpm, _us);

        Ok(())
    }

    /// Advance the phase by one call of `style` and drive the coils.
    ///
    /// Returns the new phase position.
    pub fn one_step(&mut self, direction: Direction, style: StepStyle) -> Result<u32> {
        let delta = style.phase_delta(self.phase.position(), self.curve.microsteps());
        let position = self.phase.advance(direction, delta);

        let drive = CoilDrive::at(position, style, self.curve, self.coils);
        self.bus.update(self.coils.mask(), drive.enable)?;
        self.set_duty(drive.duty_a, drive.duty_b)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("{} step -> {}", self.port, position);

        Ok(position)
    }

    /// Move `steps` full steps (blocking), paced by the configured speed.
    ///
    /// In `Microstep` style each step is `microsteps` calls, and the move then
    /// continues to the next full-step rest position.
    pub fn step(&mut self, steps: u32, direction: Direction, style: StepStyle) -> Result<()> {
        self.step_cancellable(steps, direction, style, || false)
            .map(|_| ())
    }

    /// Like [`step`](Self::step), but polls `cancel` before every call and
    /// stops immediately once it returns `true`.
    pub fn step_cancellable<F>(
        &mut self,
        steps: u32,
        direction: Direction,
        style: StepStyle,
        mut cancel: F,
    ) -> Result<StepOutcome>
    where
        F: FnMut() -> bool,
    {
        let microsteps = self.curve.microsteps();
        let interval_us = self.pacer.interval_us(style, microsteps);
        let calls = steps.saturating_mul(style.calls_per_step(microsteps));

        let mut outcome = StepOutcome {
            calls: 0,
            position: self.phase.position(),
            cancelled: false,
        };
        // Position returned by the last call; 0 when nothing ran
        let mut last = 0;

        for _ in 0..calls {
            if cancel() {
                outcome.cancelled = true;
                return Ok(outcome);
            }
            last = self.paced_step(direction, style, interval_us)?;
            outcome.calls += 1;
            outcome.position = last;
        }

        if style == StepStyle::Microstep {
            while last != 0 && last != microsteps {
                if cancel() {
                    outcome.cancelled = true;
                    return Ok(outcome);
                }
                last = self.paced_step(direction, style, interval_us)?;
                outcome.calls += 1;
                outcome.position = last;
            }
        }

        Ok(outcome)
    }

    /// De-energize both coils so the shaft turns freely.
    pub fn release(&mut self) -> Result<()> {
        self.bus.update(self.coils.mask(), 0)?;
        self.set_duty(0, 0)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{} released", self.port);

        Ok(())
    }

    fn paced_step(&mut self, direction: Direction, style: StepStyle, interval_us: u32) -> Result<u32> {
        let position = self.one_step(direction, style)?;
        self.pacer.pause(interval_us, &mut self.delay);
        Ok(position)
    }

    fn set_duty(&mut self, duty_a: u8, duty_b: u8) -> Result<()> {
        self.pwm_a
            .set_duty_cycle_fraction(duty_a as u16, 255)
            .map_err(|_| MotorError::PwmError)?;
        self.pwm_b
            .set_duty_cycle_fraction(duty_b as u16, 255)
            .map_err(|_| MotorError::PwmError)?;
        self.duty = (duty_a, duty_b);
        Ok(())
    }
}

impl<BUS, PWMA, PWMB, DELAY> Drop for StepperMotor<'_, BUS, PWMA, PWMB, DELAY>
where
    BUS: LatchBus,
    PWMA: SetDutyCycle,
    PWMB: SetDutyCycle,
    DELAY: DelayNs,
{
    fn drop(&mut self) {
        self.bus.unclaim(self.coils.mask());
    }
}
