#![cfg_attr(not(test), no_std)]

//! Core of a three-button countdown timer panel.
//!
//! Everything hardware-shaped arrives as a trait: buttons and LED as
//! `embedded-hal` digital pins, the serial terminal as an
//! `embedded-io` writer, time as a [`MillisClock`]. The same loop runs
//! on the board and, with substitutes, on a host.
//!
//! Two product behaviors share the loop, selected by [`control::Mode`]:
//!
//! - **Countdown**: PB1/PB2 adjust a minutes/seconds count (holding
//!   PB2 accelerates), a PB3 tap starts or pauses, a 3 s PB3 hold
//!   resets. While running the count ticks down once per second, the
//!   LED blinks, and reaching zero raises the terminal alarm with a
//!   solid LED.
//! - **Combination**: the three lines' combined state is classified
//!   into one of eight buckets; every change, and only a change,
//!   prints a status line and retunes the LED cadence.
//!
//! The loop is paced externally, one [`poll`](control::ControlLoop::poll)
//! per scheduling quantum; see the `demos` and `feather` crates for the
//! host and board harnesses.

pub mod blink;
pub mod buttons;
pub mod clock;
pub mod combos;
pub mod control;
pub mod countdown;
pub mod display;
pub mod errors;
pub mod led;

pub use blink::Blinker;
pub use buttons::{ButtonSample, Buttons, PressTracker, RepeatGate};
pub use clock::MillisClock;
pub use combos::{ButtonCombo, ComboTracker};
pub use control::{Config, ControlLoop, Mode};
pub use countdown::{Countdown, TimerState};
pub use display::Display;
pub use errors::Error;
pub use led::LedController;

// Logging goes through whichever backend the build carries: defmt on
// the board, `log` on hosts, nothing otherwise.
#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, info};

#[cfg(all(feature = "std", not(feature = "defmt")))]
pub(crate) use log::{debug, info};

#[cfg(not(any(feature = "std", feature = "defmt")))]
mod nolog {
    // Arguments still count as used so silent builds stay warning-free.
    macro_rules! debug {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }
    macro_rules! info {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }
    pub(crate) use {debug, info};
}
#[cfg(not(any(feature = "std", feature = "defmt")))]
pub(crate) use nolog::{debug, info};

#[cfg(test)]
pub(crate) mod test_support;
