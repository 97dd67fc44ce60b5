//! Recording fakes for the hardware seams.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use motor_shield::{LatchBus, Result};

/// Latch bus that records every transmitted word.
#[derive(Default)]
pub struct RecordingBus {
    word: Cell<u8>,
    claimed: Cell<u8>,
    transmitted: RefCell<Vec<u8>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus whose outputs already hold `word` (no transmission recorded).
    pub fn with_word(word: u8) -> Self {
        let bus = Self::default();
        bus.word.set(word);
        bus
    }

    pub fn transmitted(&self) -> Vec<u8> {
        self.transmitted.borrow().clone()
    }

    pub fn transmit_count(&self) -> usize {
        self.transmitted.borrow().len()
    }

    pub fn claimed(&self) -> u8 {
        self.claimed.get()
    }
}

impl LatchBus for RecordingBus {
    fn word(&self) -> u8 {
        self.word.get()
    }

    fn update(&self, mask: u8, bits: u8) -> Result<()> {
        let word = (self.word.get() & !mask) | (bits & mask);
        self.word.set(word);
        self.transmitted.borrow_mut().push(word);
        Ok(())
    }

    fn claim(&self, mask: u8) -> bool {
        if self.claimed.get() & mask != 0 {
            return false;
        }
        self.claimed.set(self.claimed.get() | mask);
        true
    }

    fn unclaim(&self, mask: u8) {
        self.claimed.set(self.claimed.get() & !mask);
    }
}

/// PWM channel with an 8-bit range that records each duty written.
#[derive(Clone, Default)]
pub struct RecordingPwm {
    duties: Rc<RefCell<Vec<u16>>>,
}

impl RecordingPwm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duties(&self) -> Vec<u16> {
        self.duties.borrow().clone()
    }

    pub fn last(&self) -> Option<u16> {
        self.duties.borrow().last().copied()
    }
}

impl pwm::ErrorType for RecordingPwm {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for RecordingPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> core::result::Result<(), Self::Error> {
        self.duties.borrow_mut().push(duty);
        Ok(())
    }
}

/// Delay that records millisecond sleeps instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    ms: Rc<RefCell<Vec<u32>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.ms.borrow().clone()
    }

    pub fn total_ms(&self) -> u32 {
        self.ms.borrow().iter().sum()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ms.borrow_mut().push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms.borrow_mut().push(ms);
    }
}

/// Which latch control line a pin event happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Latch,
    Enable,
}

/// Output pin that appends `(line, level)` to a log shared by all lines.
#[derive(Clone)]
pub struct LoggedPin {
    line: Line,
    log: Rc<RefCell<Vec<(Line, bool)>>>,
}

impl LoggedPin {
    /// Four pins (data, clock, latch, enable) sharing one log.
    pub fn set() -> (Rc<RefCell<Vec<(Line, bool)>>>, [LoggedPin; 4]) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let pin = |line| LoggedPin {
            line,
            log: Rc::clone(&log),
        };
        let pins = [pin(Line::Data), pin(Line::Clock), pin(Line::Latch), pin(Line::Enable)];
        (log, pins)
    }
}

impl digital::ErrorType for LoggedPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for LoggedPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.log.borrow_mut().push((self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.log.borrow_mut().push((self.line, true));
        Ok(())
    }
}

/// Pin events one transmission of `word` must produce, in order.
pub fn expected_frame(word: u8) -> Vec<(Line, bool)> {
    let mut events = vec![(Line::Latch, false), (Line::Data, false)];
    for i in 0..8 {
        events.push((Line::Clock, false));
        events.push((Line::Data, word & (1 << (7 - i)) != 0));
        events.push((Line::Clock, true));
    }
    events.push((Line::Latch, true));
    events
}
