//! Button-combination monitor: every change of the three buttons'
//! combined state prints a status line on the terminal and retunes
//! the red LED's blink cadence.

#![no_main]
#![no_std]

use cortex_m::peripheral::SYST;
use feather::init::init;
use feather::uptime::{self, Uptime};
use tickdown::{Buttons, Config, ControlLoop};

const QUANTUM_MS: u32 = 10;

#[cortex_m_rt::exception]
fn SysTick() {
    uptime::on_systick();
}

#[cortex_m_rt::entry]
fn main() -> ! {
    if let Ok(ini) = init() {
        let systick = unsafe { &*SYST::ptr() };
        unsafe {
            systick.csr.modify(|r| r | 1 << 1); // Set TICKINT bit
        }

        defmt::println!("Hello, button combos!");

        let buttons = Buttons::new(ini.button_a, ini.button_b, ini.button_c);
        let mut ctl = ControlLoop::new(
            Config::combination(),
            buttons,
            ini.red_led,
            ini.serial,
            Uptime::new(),
        );
        let mut pacer = Uptime::new();
        if let Err(e) = demos::runner::run(&mut ctl, &mut pacer, QUANTUM_MS, None) {
            defmt::panic!("control loop failed: {}", e);
        }
        loop {
            cortex_m::asm::wfi();
        }
    } else {
        panic!("Failed to initialize");
    }
}
