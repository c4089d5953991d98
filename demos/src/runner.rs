//! Announce-then-poll pacing around a control loop.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_io::Write;

use tickdown::{ControlLoop, Error, MillisClock};

use super::info;

/// Drive `ctl` one pass per `quantum_ms`, forever when `passes` is
/// `None`, otherwise for the given number of passes.
///
/// The delay source is the scheduling primitive: on the board it
/// sleeps between timer ticks, on a host it advances the virtual
/// clock and feeds the scripted button timeline.
pub fn run<P1, P2, P3, L, W, C, D>(
    ctl: &mut ControlLoop<P1, P2, P3, L, W, C>,
    pacer: &mut D,
    quantum_ms: u32,
    passes: Option<u32>,
) -> Result<(), Error>
where
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
    L: OutputPin,
    W: Write,
    C: MillisClock,
    D: DelayNs,
{
    info!("-----Loop up, {} ms quantum-----", quantum_ms);
    ctl.announce()?;
    let mut remaining = passes;
    loop {
        if let Some(rem) = remaining.as_mut() {
            if *rem == 0 {
                info!("-----Pass limit reached-----");
                return Ok(());
            }
            *rem -= 1;
        }
        ctl.poll()?;
        pacer.delay_ms(quantum_ms);
    }
}
