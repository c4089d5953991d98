//! SysTick-driven millisecond uptime, the board's monotonic clock.

use core::sync::atomic::{AtomicU32, Ordering};

use embedded_hal::delay::DelayNs;
use tickdown::MillisClock;

// Global millisecond counter, written only by the SysTick exception
static UPTIME_MS: AtomicU32 = AtomicU32::new(0);

/// Call from the SysTick exception, once per millisecond underflow.
pub fn on_systick() {
    // Sole writer; plain load/store is all thumbv6m offers anyway
    UPTIME_MS.store(
        UPTIME_MS.load(Ordering::Relaxed).wrapping_add(1),
        Ordering::Relaxed,
    );
}

/// Handle on the uptime counter. Reads wrap after ~49 days, far
/// beyond any countdown this panel runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uptime;

impl Uptime {
    pub const fn new() -> Self {
        Self
    }
}

impl MillisClock for Uptime {
    fn now_ms(&self) -> u64 {
        UPTIME_MS.load(Ordering::Relaxed) as u64
    }
}

impl DelayNs for Uptime {
    /// Sleeps until the deadline; every SysTick underflow wakes the
    /// core, so the wait resolves at millisecond granularity.
    fn delay_ns(&mut self, ns: u32) {
        let ms = ns.div_ceil(1_000_000) as u64;
        let deadline = self.now_ms() + ms;
        while self.now_ms() < deadline {
            cortex_m::asm::wfi();
        }
    }
}
