//! Blink cadence bookkeeping: interval, elapsed-time accumulator and
//! the current LED level.

/// Accumulates elapsed milliseconds and toggles a logical LED level
/// each time the configured interval is reached. An interval of zero
/// means disabled.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Blinker {
    interval_ms: u32,
    acc_ms: u32,
    level: bool,
}

impl Blinker {
    pub const fn new() -> Self {
        Self {
            interval_ms: 0,
            acc_ms: 0,
            level: false,
        }
    }

    /// Arm the cadence: the accumulator restarts and the level is
    /// forced on so the first visible toggle is a full interval away.
    /// A zero interval disables instead.
    pub fn set_interval(&mut self, interval_ms: u32) {
        if interval_ms == 0 {
            self.stop();
            return;
        }
        self.interval_ms = interval_ms;
        self.acc_ms = 0;
        self.level = true;
    }

    /// Disable toggling and force the level off.
    pub fn stop(&mut self) {
        self.interval_ms = 0;
        self.acc_ms = 0;
        self.level = false;
    }

    pub fn is_active(&self) -> bool {
        self.interval_ms != 0
    }

    pub fn level(&self) -> bool {
        self.level
    }

    /// Account for `elapsed_ms` of wall time. Returns the new level
    /// when it toggled; late calls catch up across several intervals.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<bool> {
        if self.interval_ms == 0 {
            return None;
        }
        self.acc_ms = self.acc_ms.saturating_add(elapsed_ms);
        let mut toggled = false;
        while self.acc_ms >= self.interval_ms {
            self.acc_ms -= self.interval_ms;
            self.level = !self.level;
            toggled = true;
        }
        if toggled {
            Some(self.level)
        } else {
            None
        }
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arming_forces_level_on() {
        let mut b = Blinker::new();
        assert!(!b.level());
        b.set_interval(500);
        assert!(b.level());
        assert!(b.is_active());
    }

    #[test]
    fn toggles_once_per_interval() {
        let mut b = Blinker::new();
        b.set_interval(500);
        assert_eq!(b.advance(499), None);
        assert_eq!(b.advance(1), Some(false));
        assert_eq!(b.advance(500), Some(true));
    }

    #[test]
    fn late_advance_catches_up() {
        let mut b = Blinker::new();
        b.set_interval(100);
        // Three full intervals in one call: odd count of toggles.
        assert_eq!(b.advance(300), Some(false));
        assert_eq!(b.advance(200), Some(false));
    }

    #[test]
    fn rearming_restarts_the_accumulator() {
        let mut b = Blinker::new();
        b.set_interval(500);
        b.advance(499);
        b.set_interval(500);
        assert_eq!(b.advance(499), None);
        assert_eq!(b.advance(1), Some(false));
    }

    #[test]
    fn stop_forces_level_off() {
        let mut b = Blinker::new();
        b.set_interval(500);
        b.stop();
        assert!(!b.level());
        assert!(!b.is_active());
        assert_eq!(b.advance(10_000), None);
    }

    #[test]
    fn zero_interval_disables() {
        let mut b = Blinker::new();
        b.set_interval(0);
        assert!(!b.is_active());
        assert!(!b.level());
        assert_eq!(b.advance(1_000), None);
    }
}
