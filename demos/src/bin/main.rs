use clap::Parser;
use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_io_adapters::std::FromStd;
use tickdown::{Buttons, Config, ControlLoop, MillisClock};

#[derive(Clone, clap::Subcommand, Debug)]
enum Mode {
    /// Dial in a few seconds, run to the alarm, long-press reset
    Countdown,
    /// Walk the eight button combinations
    Combos,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Scheduling quantum in virtual milliseconds
    #[arg(short, long, default_value_t = 10)]
    quantum: u32,
}

#[derive(Debug)]
enum LocalErrors {
    ControlFailed(tickdown::Error),
}

impl From<tickdown::Error> for LocalErrors {
    fn from(e: tickdown::Error) -> Self {
        LocalErrors::ControlFailed(e)
    }
}

/// Button line scripted by the timeline. Pressed reads low, like the
/// pull-up inputs on the board.
#[derive(Clone, Default)]
struct SimPin {
    pressed: Rc<Cell<bool>>,
}

impl ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed.get())
    }
}

/// Stand-in LED that logs level changes.
#[derive(Clone, Default)]
struct SimLed {
    on: Rc<Cell<bool>>,
}

impl SimLed {
    fn set(&mut self, on: bool) {
        if self.on.get() != on {
            log::info!("LED {}", if on { "on" } else { "off" });
        }
        self.on.set(on);
    }
}

impl ErrorType for SimLed {
    type Error = core::convert::Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SimClock {
    now_ms: Rc<Cell<u64>>,
}

impl MillisClock for SimClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

/// One scripted button edge.
struct ScriptEvent {
    at_ms: u64,
    line: usize,
    pressed: bool,
}

impl ScriptEvent {
    fn new(at_ms: u64, line: usize, pressed: bool) -> Self {
        Self {
            at_ms,
            line,
            pressed,
        }
    }
}

/// The simulated board: delaying advances virtual time and feeds due
/// script events into the button lines.
struct SimBoard {
    clock: SimClock,
    pins: [SimPin; 3],
    script: Vec<ScriptEvent>,
    next: usize,
}

impl DelayNs for SimBoard {
    fn delay_ns(&mut self, ns: u32) {
        let now = self.clock.now_ms.get() + (ns / 1_000_000) as u64;
        self.clock.now_ms.set(now);
        while let Some(event) = self.script.get(self.next) {
            if event.at_ms > now {
                break;
            }
            log::debug!(
                "t={} ms: PB{} {}",
                event.at_ms,
                event.line + 1,
                if event.pressed { "down" } else { "up" }
            );
            self.pins[event.line].pressed.set(event.pressed);
            self.next += 1;
        }
    }
}

/// Dial six seconds with PB2, run to the alarm, reset with a long
/// PB3 hold.
fn countdown_script() -> (Vec<ScriptEvent>, u64) {
    let script = vec![
        ScriptEvent::new(500, 1, true),
        ScriptEvent::new(2_300, 1, false),
        // short tap: start
        ScriptEvent::new(3_000, 2, true),
        ScriptEvent::new(3_200, 2, false),
        // the count finishes around t=9.2s; hold PB3 well past the
        // long-press threshold to clear the alarm
        ScriptEvent::new(10_000, 2, true),
        ScriptEvent::new(13_500, 2, false),
    ];
    (script, 14_000)
}

/// Walk through singles, chords and the all-held state.
fn combos_script() -> (Vec<ScriptEvent>, u64) {
    let script = vec![
        ScriptEvent::new(1_000, 0, true),
        ScriptEvent::new(2_000, 1, true),
        ScriptEvent::new(3_000, 0, false),
        ScriptEvent::new(4_000, 2, true),
        ScriptEvent::new(5_000, 0, true),
        ScriptEvent::new(6_000, 0, false),
        ScriptEvent::new(6_000, 1, false),
        ScriptEvent::new(6_000, 2, false),
    ];
    (script, 7_000)
}

fn main() -> Result<(), LocalErrors> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        1 => log::Level::Info,
        2 => log::Level::Debug,
        3 => log::Level::Trace,
        _ => log::Level::Warn,
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.to_string()),
    )
    .init();

    log::info!("Starting countdown panel simulator");

    let (cfg, (script, total_ms)) = match cli.mode {
        Mode::Countdown => (Config::countdown(), countdown_script()),
        Mode::Combos => (Config::combination(), combos_script()),
    };

    let clock = SimClock::default();
    let pins = [SimPin::default(), SimPin::default(), SimPin::default()];
    let led = SimLed::default();
    let buttons = Buttons::new(pins[0].clone(), pins[1].clone(), pins[2].clone());
    let terminal = FromStd::new(std::io::stdout());

    let mut ctl = ControlLoop::new(cfg, buttons, led, terminal, clock.clone());
    let quantum_ms = cli.quantum.max(1);
    let mut board = SimBoard {
        clock,
        pins,
        script,
        next: 0,
    };

    let passes = (total_ms / quantum_ms as u64) as u32;
    demos::runner::run(&mut ctl, &mut board, quantum_ms, Some(passes))?;

    // leave the rewritten status line behind
    println!();
    log::info!("Simulation complete");
    Ok(())
}
