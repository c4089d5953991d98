//! The foreground control loop: one pass per scheduling quantum, the
//! only place shared state is mutated.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_io::Write;

use crate::buttons::{ButtonSample, Buttons, PressTracker, RepeatGate};
use crate::clock::MillisClock;
use crate::combos::{ButtonCombo, ComboTracker};
use crate::countdown::{Countdown, TimerState};
use crate::display::Display;
use crate::errors::Error;
use crate::led::LedController;
use crate::{debug, info};

/// Which product behavior the loop runs.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Minutes/seconds countdown with set/start/pause/reset gestures.
    Countdown,
    /// Report every change of the three buttons' combined state.
    Combination,
}

/// Gesture thresholds and pacing, owned by the loop.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub mode: Mode,
    /// Holding PB3 at least this long resets instead of toggling
    /// run/pause.
    pub long_press_ms: u64,
    /// Minimum spacing between repeated increments while a setting
    /// button stays held.
    pub repeat_ms: u64,
    /// Continuous PB2 hold after which seconds advance in bigger steps.
    pub accel_after_ms: u64,
    /// Seconds added per increment once accelerated.
    pub accel_step: u8,
    /// Countdown tick period.
    pub tick_ms: u64,
    /// Blink cadence while the countdown runs.
    pub run_blink_ms: u32,
}

impl Config {
    pub const fn countdown() -> Self {
        Self {
            mode: Mode::Countdown,
            long_press_ms: 3_000,
            repeat_ms: 300,
            accel_after_ms: 3_000,
            accel_step: 5,
            tick_ms: 1_000,
            run_blink_ms: 1_000,
        }
    }

    pub const fn combination() -> Self {
        Self {
            mode: Mode::Combination,
            ..Self::countdown()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::countdown()
    }
}

/// Per-variant loop state. Only one variant is live per loop instance.
enum Variant {
    Countdown(CountdownVariant),
    Combination(ComboTracker),
}

struct CountdownVariant {
    timer: Countdown,
    pb1_gate: RepeatGate,
    pb2_gate: RepeatGate,
    pb2_hold: PressTracker,
    pb3: PressTracker,
    next_tick_ms: u64,
}

impl CountdownVariant {
    fn new(cfg: &Config) -> Self {
        Self {
            timer: Countdown::new(),
            pb1_gate: RepeatGate::new(cfg.repeat_ms),
            pb2_gate: RepeatGate::new(cfg.repeat_ms),
            pb2_hold: PressTracker::new(),
            pb3: PressTracker::new(),
            next_tick_ms: 0,
        }
    }
}

/// Ties sampler, state machines, LED and terminal together.
///
/// Not reentrant: the caller paces `poll` so one pass completes before
/// the next begins, one pass per quantum.
pub struct ControlLoop<P1, P2, P3, L, W, C> {
    buttons: Buttons<P1, P2, P3>,
    led: LedController<L>,
    display: Display<W>,
    clock: C,
    cfg: Config,
    variant: Variant,
    last_pass_ms: u64,
}

impl<P1, P2, P3, L, W, C> ControlLoop<P1, P2, P3, L, W, C>
where
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
    L: OutputPin,
    W: Write,
    C: MillisClock,
{
    pub fn new(cfg: Config, buttons: Buttons<P1, P2, P3>, led: L, serial: W, clock: C) -> Self {
        let variant = match cfg.mode {
            Mode::Countdown => Variant::Countdown(CountdownVariant::new(&cfg)),
            Mode::Combination => Variant::Combination(ComboTracker::new()),
        };
        let last_pass_ms = clock.now_ms();
        Self {
            buttons,
            led: LedController::new(led),
            display: Display::new(serial),
            clock,
            cfg,
            variant,
            last_pass_ms,
        }
    }

    pub fn mode(&self) -> Mode {
        self.cfg.mode
    }

    /// The countdown, when running in [`Mode::Countdown`].
    pub fn countdown(&self) -> Option<&Countdown> {
        match &self.variant {
            Variant::Countdown(v) => Some(&v.timer),
            Variant::Combination(_) => None,
        }
    }

    /// The current combination, when running in [`Mode::Combination`].
    pub fn combination(&self) -> Option<ButtonCombo> {
        match &self.variant {
            Variant::Countdown(_) => None,
            Variant::Combination(t) => Some(t.current()),
        }
    }

    /// Print the initial status line and settle the LED. Call once
    /// before the first `poll`.
    pub fn announce(&mut self) -> Result<(), Error> {
        info!("control loop up");
        match &self.variant {
            Variant::Countdown(v) => {
                let timer = v.timer;
                self.display
                    .show_set(&timer)
                    .map_err(|_| Error::DisplayWrite)?;
            }
            Variant::Combination(t) => {
                let current = t.current();
                self.display
                    .show_combo(current)
                    .map_err(|_| Error::DisplayWrite)?;
            }
        }
        self.led.set_steady(false)
    }

    /// One sampling pass: read the clock and the buttons, feed the
    /// active state machine, drive LED and terminal.
    pub fn poll(&mut self) -> Result<(), Error> {
        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.last_pass_ms) as u32;
        self.last_pass_ms = now;
        self.led.advance(elapsed)?;

        let sample = self.buttons.sample()?;
        let Self {
            variant,
            led,
            display,
            cfg,
            ..
        } = self;
        match variant {
            Variant::Countdown(v) => Self::countdown_pass(v, led, display, cfg, sample, now),
            Variant::Combination(t) => Self::combination_pass(t, led, display, sample),
        }
    }

    fn countdown_pass(
        v: &mut CountdownVariant,
        led: &mut LedController<L>,
        display: &mut Display<W>,
        cfg: &Config,
        sample: ButtonSample,
        now: u64,
    ) -> Result<(), Error> {
        v.pb2_hold.update(sample.pb2, now);

        // Setting gestures only while the count is not running.
        if matches!(v.timer.state(), TimerState::Idle | TimerState::Paused) {
            if sample.pb1 && v.pb1_gate.ready(now) {
                v.timer.increment_minutes();
                display
                    .show_set(&v.timer)
                    .map_err(|_| Error::DisplayWrite)?;
            }
            if sample.pb2 && v.pb2_gate.ready(now) {
                let accelerated = v
                    .pb2_hold
                    .held_ms(now)
                    .is_some_and(|held| held >= cfg.accel_after_ms);
                let step = if accelerated { cfg.accel_step } else { 1 };
                v.timer.increment_seconds(step);
                display
                    .show_set(&v.timer)
                    .map_err(|_| Error::DisplayWrite)?;
            }
        }

        if v.timer.is_running() {
            if now >= v.next_tick_ms {
                v.next_tick_ms = v.next_tick_ms.saturating_add(cfg.tick_ms);
                v.timer.tick();
                if v.timer.is_finished() {
                    info!("countdown finished");
                    display.show_alarm().map_err(|_| Error::DisplayWrite)?;
                    led.set_steady(true)?;
                } else {
                    display
                        .show_count(&v.timer)
                        .map_err(|_| Error::DisplayWrite)?;
                }
            }
        } else if !v.timer.is_finished() {
            // Idle and paused counts show a dark LED; the alarm level
            // set at finish time is left alone.
            led.set_steady(false)?;
        }

        match v.pb3.update(sample.pb3, now) {
            Some(held) if held >= cfg.long_press_ms => {
                info!("reset after {} ms hold", held);
                v.timer.reset();
                display.show_reset().map_err(|_| Error::DisplayWrite)?;
                led.set_steady(false)?;
            }
            Some(_) => {
                if v.timer.is_running() {
                    debug!("paused");
                    v.timer.pause();
                    display
                        .show_set(&v.timer)
                        .map_err(|_| Error::DisplayWrite)?;
                    led.set_steady(false)?;
                } else {
                    debug!("running");
                    v.timer.start();
                    v.next_tick_ms = now.saturating_add(cfg.tick_ms);
                    display
                        .show_count(&v.timer)
                        .map_err(|_| Error::DisplayWrite)?;
                    led.set_blinking(cfg.run_blink_ms)?;
                }
            }
            None => {}
        }

        Ok(())
    }

    fn combination_pass(
        tracker: &mut ComboTracker,
        led: &mut LedController<L>,
        display: &mut Display<W>,
        sample: ButtonSample,
    ) -> Result<(), Error> {
        let Some((previous, current)) = tracker.update(sample) else {
            return Ok(());
        };
        debug!("combo {} -> {}", previous.label(), current.label());
        display
            .show_combo(current)
            .map_err(|_| Error::DisplayWrite)?;
        match combo_cadence(current) {
            Cadence::Off => led.set_steady(false),
            Cadence::Solid => led.set_steady(true),
            Cadence::Blink(interval_ms) => led.set_blinking(interval_ms),
        }
    }
}

enum Cadence {
    Off,
    Solid,
    Blink(u32),
}

/// LED cadence per combination: nothing held is dark, singles blink at
/// descending periods, chords faster, everything held is solid on.
fn combo_cadence(combo: ButtonCombo) -> Cadence {
    match combo {
        ButtonCombo::Idle => Cadence::Off,
        ButtonCombo::Pb1 => Cadence::Blink(1_000),
        ButtonCombo::Pb2 => Cadence::Blink(500),
        ButtonCombo::Pb3 => Cadence::Blink(250),
        ButtonCombo::Pb1Pb2 => Cadence::Blink(200),
        ButtonCombo::Pb1Pb3 => Cadence::Blink(150),
        ButtonCombo::Pb2Pb3 => Cadence::Blink(100),
        ButtonCombo::All => Cadence::Solid,
    }
}
