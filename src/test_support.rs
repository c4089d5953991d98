//! Mock peripherals shared by the unit tests: scriptable button lines,
//! a recording LED pin, a manually advanced clock and a capturing
//! serial sink.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::clock::MillisClock;

/// Button line whose level the test scripts. Active-low, like the
/// board's pull-up inputs.
#[derive(Clone, Default)]
pub struct TestPin {
    pressed: Rc<Cell<bool>>,
}

impl TestPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
    }
}

impl ErrorType for TestPin {
    type Error = Infallible;
}

impl InputPin for TestPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed.get())
    }
}

/// Output pin remembering the last level written.
#[derive(Clone, Default)]
pub struct TestLed {
    level: Rc<Cell<bool>>,
}

impl TestLed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.level.get()
    }
}

impl ErrorType for TestLed {
    type Error = Infallible;
}

impl OutputPin for TestLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// Manually advanced millisecond clock.
#[derive(Clone, Default)]
pub struct TestClock {
    now_ms: Rc<Cell<u64>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl MillisClock for TestClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

/// Serial sink capturing everything written to it.
#[derive(Clone, Default)]
pub struct TestSerial {
    data: Rc<RefCell<Vec<u8>>>,
}

impl TestSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the captured bytes as text.
    pub fn take_string(&self) -> String {
        let bytes = core::mem::take(&mut *self.data.borrow_mut());
        String::from_utf8(bytes).expect("terminal output is ASCII")
    }
}

impl embedded_io::ErrorType for TestSerial {
    type Error = Infallible;
}

impl embedded_io::Write for TestSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.data.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
