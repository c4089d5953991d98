//! Direct button sampling plus the small timing helpers built on it:
//! press tracking for long-press gestures and a non-blocking
//! auto-repeat gate.

use embedded_hal::digital::InputPin;

use crate::errors::Error;

/// Instantaneous pressed/released levels of the three buttons.
///
/// The lines are active-low with pull-ups; a field reads `true` while
/// its button is held.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ButtonSample {
    pub pb1: bool,
    pub pb2: bool,
    pub pb3: bool,
}

/// Samples the three input lines as they are, once per pass.
///
/// There is no software debounce; the pull-ups are trusted for noise
/// immunity.
pub struct Buttons<P1, P2, P3> {
    pb1: P1,
    pb2: P2,
    pb3: P3,
}

impl<P1, P2, P3> Buttons<P1, P2, P3>
where
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
{
    pub fn new(pb1: P1, pb2: P2, pb3: P3) -> Self {
        Self { pb1, pb2, pb3 }
    }

    pub fn sample(&mut self) -> Result<ButtonSample, Error> {
        Ok(ButtonSample {
            pb1: self.pb1.is_low().map_err(|_| Error::ButtonRead)?,
            pb2: self.pb2.is_low().map_err(|_| Error::ButtonRead)?,
            pb3: self.pb3.is_low().map_err(|_| Error::ButtonRead)?,
        })
    }
}

/// Tracks one button's press timestamps.
///
/// The completed press duration is reported exactly once, on the
/// release edge; [`held_ms`](Self::held_ms) answers how long the
/// current press has lasted so far.
#[derive(Debug, Default, Clone, Copy)]
pub struct PressTracker {
    pressed: bool,
    since_ms: u64,
}

impl PressTracker {
    pub const fn new() -> Self {
        Self {
            pressed: false,
            since_ms: 0,
        }
    }

    /// Feed one sample. Returns the completed press duration on the
    /// release edge, `None` otherwise.
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> Option<u64> {
        if pressed {
            if !self.pressed {
                self.pressed = true;
                self.since_ms = now_ms;
            }
            None
        } else if self.pressed {
            self.pressed = false;
            Some(now_ms.saturating_sub(self.since_ms))
        } else {
            None
        }
    }

    /// Duration of the press in progress, `None` while released.
    pub fn held_ms(&self, now_ms: u64) -> Option<u64> {
        if self.pressed {
            Some(now_ms.saturating_sub(self.since_ms))
        } else {
            None
        }
    }
}

/// Paces a held button to at most one event per period.
///
/// The first poll fires immediately; later polls fire once the period
/// has elapsed since the previous event, no matter how often the line
/// is sampled in between.
#[derive(Debug, Clone, Copy)]
pub struct RepeatGate {
    period_ms: u64,
    next_ms: u64,
}

impl RepeatGate {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            next_ms: 0,
        }
    }

    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_ms {
            return false;
        }
        self.next_ms = now_ms.saturating_add(self.period_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestPin;

    #[test]
    fn sample_reads_active_low() {
        let (pb1, pb2, pb3) = (TestPin::new(), TestPin::new(), TestPin::new());
        let mut buttons = Buttons::new(pb1.clone(), pb2.clone(), pb3.clone());

        assert_eq!(buttons.sample().unwrap(), ButtonSample::default());

        pb2.press();
        let sample = buttons.sample().unwrap();
        assert!(!sample.pb1);
        assert!(sample.pb2);
        assert!(!sample.pb3);
    }

    #[test]
    fn press_duration_reported_on_release_only() {
        let mut tracker = PressTracker::new();
        assert_eq!(tracker.update(true, 100), None);
        assert_eq!(tracker.update(true, 2_000), None);
        assert_eq!(tracker.update(false, 3_400), Some(3_300));
        // released, nothing further
        assert_eq!(tracker.update(false, 3_500), None);
    }

    #[test]
    fn held_duration_while_pressed() {
        let mut tracker = PressTracker::new();
        assert_eq!(tracker.held_ms(50), None);
        tracker.update(true, 100);
        assert_eq!(tracker.held_ms(100), Some(0));
        assert_eq!(tracker.held_ms(3_100), Some(3_000));
        tracker.update(false, 3_200);
        assert_eq!(tracker.held_ms(3_300), None);
    }

    #[test]
    fn long_press_threshold_boundary() {
        let mut tracker = PressTracker::new();
        tracker.update(true, 0);
        assert_eq!(tracker.update(false, 2_999), Some(2_999));
        tracker.update(true, 10_000);
        assert_eq!(tracker.update(false, 13_000), Some(3_000));
    }

    #[test]
    fn repeat_gate_fires_once_per_period() {
        let mut gate = RepeatGate::new(300);
        assert!(gate.ready(1_000));
        assert!(!gate.ready(1_010));
        assert!(!gate.ready(1_299));
        assert!(gate.ready(1_300));
        assert!(!gate.ready(1_599));
        assert!(gate.ready(1_600));
    }

    #[test]
    fn repeat_gate_first_poll_is_immediate() {
        let mut gate = RepeatGate::new(300);
        assert!(gate.ready(0));
        assert!(!gate.ready(299));
    }
}
