#![no_std]

//! Board support for the countdown timer panel: an Adafruit Feather M0
//! with the three-button OLED wing (buttons A/B/C on D9/D6/D5), the
//! red LED on D13 as the status LED, and the terminal on the D0/D1
//! UART.

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

pub use feather_m0 as bsp;

pub use bsp::hal;
pub use bsp::pac;

pub mod init;
pub mod serial;
pub mod uptime;
