/// Monotonic millisecond time source.
///
/// The control loop paces every time-driven decision (countdown ticks,
/// auto-repeat, long-press detection, blink cadence) off this single
/// reading. On the board it is backed by the SysTick uptime counter;
/// hosts and tests substitute a virtual clock.
pub trait MillisClock {
    /// Milliseconds since an arbitrary epoch. Must never go backwards.
    fn now_ms(&self) -> u64;
}

impl<T: MillisClock + ?Sized> MillisClock for &T {
    fn now_ms(&self) -> u64 {
        (*self).now_ms()
    }
}
