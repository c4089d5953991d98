use super::bsp;
use super::hal;

use bsp::pac;

use pac::{CorePeripherals, Peripherals};

use bsp::{periph_alias, pin_alias};
use hal::clock::GenericClockController;
use hal::time::Hertz;

use hal::ehal::digital::{InputPin, OutputPin};
use hal::prelude::*;

use cortex_m_systick_countdown::{PollingSysTick, SysTickCalibration};

use super::serial::SerialOut;

const TERMINAL_BAUD: u32 = 115_200;

#[derive(Debug, defmt::Format)]
pub enum FailureSource {
    Periph,
    Core,
}

pub struct InitResult<OUTPUT1: OutputPin, INPUT1: InputPin, INPUT2: InputPin, INPUT3: InputPin, TX>
{
    pub delay_tick: PollingSysTick,
    pub red_led: OUTPUT1,
    pub button_a: INPUT1,
    pub button_b: INPUT2,
    pub button_c: INPUT3,
    pub serial: SerialOut<TX>,
}

/// Bring up clocks, the SysTick delay source, the status LED, the
/// three wing buttons and the terminal UART.
pub fn init() -> Result<
    InitResult<
        impl OutputPin,
        impl InputPin,
        impl InputPin,
        impl InputPin,
        impl embedded_hal_nb::serial::Write<u8>,
    >,
    FailureSource,
> {
    let mut peripherals = Peripherals::take().ok_or(FailureSource::Periph)?;
    let core = CorePeripherals::take().ok_or(FailureSource::Core)?;

    let mut clocks = GenericClockController::with_internal_32kosc(
        peripherals.gclk,
        &mut peripherals.pm,
        &mut peripherals.sysctrl,
        &mut peripherals.nvmctrl,
    );

    let gclk0 = clocks.gclk0();
    let pins = bsp::pins::Pins::new(peripherals.port);
    let red_led: bsp::RedLed = pin_alias!(pins.red_led).into();

    let hertz: Hertz = gclk0.into();
    let del = PollingSysTick::new(core.SYST, &SysTickCalibration::from_clock_hz(hertz.raw()));

    // Power Manager
    let mut pm = peripherals.pm;

    let uart = bsp::uart(
        &mut clocks,
        Hertz::from_raw(TERMINAL_BAUD),
        periph_alias!(peripherals.uart_sercom),
        &mut pm,
        pins.rx,
        pins.tx,
    );

    Ok(InitResult {
        delay_tick: del,
        red_led,
        button_a: pins.d9.into_pull_up_input(),
        button_b: pins.d6.into_pull_up_input(),
        button_c: pins.d5.into_pull_up_input(),
        serial: SerialOut::new(uart),
    })
}
