//! Countdown timer firmware: dial minutes with button A and seconds
//! with button B (hold to accelerate), tap button C to start or
//! pause, hold it three seconds to reset. Status goes to the terminal
//! on the D0/D1 UART; the red LED blinks while counting and goes
//! solid on the alarm.

#![no_main]
#![no_std]

use bsp::hal::ehal::digital::OutputPin;
use bsp::hal::prelude::*;
use cortex_m::peripheral::SYST;
use feather as bsp;
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
    if let Ok(mut ini) = init() {
        // Enable the SysTick interrupt so the uptime counter runs
        let systick = unsafe { &*SYST::ptr() };
        unsafe {
            systick.csr.modify(|r| r | 1 << 1); // Set TICKINT bit
        }

        // Flash once to show life before the loop takes the LED
        ini.red_led.set_high().unwrap();
        ini.delay_tick.delay_ms(150u32);
        ini.red_led.set_low().unwrap();

        defmt::println!("Hello, countdown timer!");

        let buttons = Buttons::new(ini.button_a, ini.button_b, ini.button_c);
        let mut ctl = ControlLoop::new(
            Config::countdown(),
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
