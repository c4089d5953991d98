//! Status LED control: a steady level or a background blink cadence,
//! never both.

use embedded_hal::digital::OutputPin;

use crate::blink::Blinker;
use crate::errors::Error;

/// Drives the status LED pin, high = on.
///
/// A steady write disables any armed cadence; arming a cadence
/// overrides the steady level and forces the LED on immediately.
pub struct LedController<P> {
    pin: P,
    blinker: Blinker,
}

impl<P: OutputPin> LedController<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            blinker: Blinker::new(),
        }
    }

    pub fn set_steady(&mut self, on: bool) -> Result<(), Error> {
        self.blinker.stop();
        self.write(on)
    }

    pub fn set_blinking(&mut self, interval_ms: u32) -> Result<(), Error> {
        self.blinker.set_interval(interval_ms);
        self.write(self.blinker.level())
    }

    pub fn is_blinking(&self) -> bool {
        self.blinker.is_active()
    }

    /// Apply any blink toggles owed for `elapsed_ms` to the pin.
    pub fn advance(&mut self, elapsed_ms: u32) -> Result<(), Error> {
        if let Some(level) = self.blinker.advance(elapsed_ms) {
            self.write(level)?;
        }
        Ok(())
    }

    fn write(&mut self, on: bool) -> Result<(), Error> {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|_| Error::LedWrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestLed;

    #[test]
    fn steady_levels_reach_the_pin() {
        let led = TestLed::new();
        let mut ctl = LedController::new(led.clone());
        ctl.set_steady(true).unwrap();
        assert!(led.is_on());
        ctl.set_steady(false).unwrap();
        assert!(!led.is_on());
    }

    #[test]
    fn blinking_starts_on_and_toggles() {
        let led = TestLed::new();
        let mut ctl = LedController::new(led.clone());
        ctl.set_blinking(250).unwrap();
        assert!(led.is_on());
        ctl.advance(250).unwrap();
        assert!(!led.is_on());
        ctl.advance(250).unwrap();
        assert!(led.is_on());
    }

    #[test]
    fn steady_write_kills_the_cadence() {
        let led = TestLed::new();
        let mut ctl = LedController::new(led.clone());
        ctl.set_blinking(100).unwrap();
        ctl.set_steady(false).unwrap();
        assert!(!ctl.is_blinking());
        ctl.advance(1_000).unwrap();
        assert!(!led.is_on());
    }

    #[test]
    fn rearming_overrides_steady_level() {
        let led = TestLed::new();
        let mut ctl = LedController::new(led.clone());
        ctl.set_steady(false).unwrap();
        ctl.set_blinking(100).unwrap();
        assert!(ctl.is_blinking());
        assert!(led.is_on());
    }
}
