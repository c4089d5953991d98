//! Terminal status lines.
//!
//! The link is output-only: every status change rewrites the current
//! terminal line in place with a carriage return, blank columns, a
//! carriage return, then the fresh text. Decimal fields are unsigned
//! with no leading zeros; downstream tooling matches these strings
//! byte for byte.

use core::fmt::Write as _;

use arrayvec::ArrayString;
use embedded_io::Write;

use crate::combos::ButtonCombo;
use crate::countdown::Countdown;

/// Columns blanked before each rewrite.
pub const CLEAR_COLUMNS: usize = 30;

/// Renders status lines into a serial sink.
pub struct Display<W> {
    serial: W,
}

impl<W: Write> Display<W> {
    pub fn new(serial: W) -> Self {
        Self { serial }
    }

    /// `SET {m}m : {s}s`, while the count is being adjusted or paused.
    pub fn show_set(&mut self, timer: &Countdown) -> Result<(), W::Error> {
        self.show_timer("SET", timer)
    }

    /// `CNT {m}m : {s}s`, once per second while counting.
    pub fn show_count(&mut self, timer: &Countdown) -> Result<(), W::Error> {
        self.show_timer("CNT", timer)
    }

    /// `FIN 00m : 00s -- ALARM`: the countdown reached zero.
    pub fn show_alarm(&mut self) -> Result<(), W::Error> {
        self.line("FIN 00m : 00s -- ALARM")
    }

    /// `CLR 00m : 00s`: after a long-press reset.
    pub fn show_reset(&mut self) -> Result<(), W::Error> {
        self.line("CLR 00m : 00s")
    }

    /// The fixed status string for a combination bucket.
    pub fn show_combo(&mut self, combo: ButtonCombo) -> Result<(), W::Error> {
        self.line(combo.label())
    }

    fn show_timer(&mut self, prefix: &str, timer: &Countdown) -> Result<(), W::Error> {
        let mut text = ArrayString::<24>::new();
        // Longest rendering is "SET 59m : 59s", well inside capacity.
        write!(text, "{} {}m : {}s", prefix, timer.minutes(), timer.seconds()).ok();
        self.line(&text)
    }

    fn line(&mut self, text: &str) -> Result<(), W::Error> {
        self.serial.write_all(b"\r")?;
        self.serial.write_all(&[b' '; CLEAR_COLUMNS])?;
        self.serial.write_all(b"\r")?;
        self.serial.write_all(text.as_bytes())?;
        self.serial.flush()
    }
}
