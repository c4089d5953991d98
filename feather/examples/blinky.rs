//! A mandatory blinky to verify the board is working

#![no_main]
#![no_std]

use bsp::hal::ehal::digital::OutputPin;
use bsp::hal::prelude::*;
use cortex_m::peripheral::SYST;
use feather as bsp;
use feather::init::init;
use feather::uptime::{self, Uptime};
use tickdown::MillisClock;

#[cortex_m_rt::exception]
fn SysTick() {
    uptime::on_systick();
}

#[cortex_m_rt::entry]
fn main() -> ! {
    if let Ok(mut ini) = init() {
        let delay = &mut ini.delay_tick;
        let red_led = &mut ini.red_led;

        // Enable the SysTick interrupt so the uptime counter runs
        let systick = unsafe { &*SYST::ptr() };
        unsafe {
            systick.csr.modify(|r| r | 1 << 1); // Set TICKINT bit
        }

        defmt::println!("Hello, blinky!");
        let clock = Uptime::new();
        let mut prev_seconds = 0u32;
        loop {
            delay.delay_ms(200u32);
            red_led.set_high().unwrap();
            delay.delay_ms(200u32);
            red_led.set_low().unwrap();

            let seconds = (clock.now_ms() / 1000) as u32;
            if seconds != prev_seconds {
                prev_seconds = seconds;
                defmt::println!("Uptime: {=u32} seconds", seconds);
            }
        }
    } else {
        panic!("Failed to initialize");
    }
}
