use crate::display::Display;
use crate::input::{Input, Joystick};
use crate::leds::RgbLed;
use crate::{interrupts, usb_logger};
use display_interface::DisplayError;
use hal::clocks::Clock;
use hal::gpio::{FunctionI2C, FunctionPwm, Pins};
use hal::pac;
use pico::hal;

pub const BUTTON_A_GPIO: usize = 5;
pub const BUTTON_B_GPIO: usize = 6;
pub const JOYSTICK_BUTTON_GPIO: usize = 22;

#[derive(Debug)]
pub enum HardwareError {
    PeripheralsTaken,
    Clocks,
    Logger,
    Display(DisplayError),
}

impl From<DisplayError> for HardwareError {
    fn from(err: DisplayError) -> Self {
        HardwareError::Display(err)
    }
}

pub struct Hardware {
    pub display: Display,
    pub leds: RgbLed,
    pub delay: cortex_m::delay::Delay,
    pub input: Input,
}

impl Hardware {
    pub fn new() -> Result<Self, HardwareError> {
        let mut pac = pac::Peripherals::take().ok_or(HardwareError::PeripheralsTaken)?;
        let core = pac::CorePeripherals::take().ok_or(HardwareError::PeripheralsTaken)?;
        let mut watchdog = hal::watchdog::Watchdog::new(pac.WATCHDOG);

        // The default is to generate a 125 MHz system clock
        let clocks = hal::clocks::init_clocks_and_plls(
            pico::XOSC_CRYSTAL_FREQ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .map_err(|_| HardwareError::Clocks)?;

        let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

        pac.RESETS.reset.modify(|_, w| w.timer().clear_bit());
        while pac.RESETS.reset_done.read().timer().bit_is_clear() {}

        usb_logger::init(
            pac.USBCTRL_REGS,
            pac.USBCTRL_DPRAM,
            &mut pac.RESETS,
            clocks.usb_clock,
        )
        .map_err(|_| HardwareError::Logger)?;

        #[cfg(feature = "wait-for-serial")]
        {
            // Wait for USB to be ready.
            delay.delay_ms(500);
            if usb_logger::connected() {
                // Wait for serial logger.
                delay.delay_ms(1000);
            }
        }

        log::info!("Logging initialized");

        log::info!("System clock: {}", clocks.system_clock.freq());

        let sio = hal::sio::Sio::new(pac.SIO);
        let pins = Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let leds = RgbLed::new(
            hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS),
            /*green_pin=*/ pins.gpio11.into_mode::<FunctionPwm>(),
            /*blue_pin=*/ pins.gpio12.into_mode::<FunctionPwm>(),
            /*red_pin=*/ pins.gpio13.into_mode::<FunctionPwm>(),
        );

        let display = Display::new(
            /*sda_pin=*/ pins.gpio14.into_mode::<FunctionI2C>(),
            /*scl_pin=*/ pins.gpio15.into_mode::<FunctionI2C>(),
            /*i2c_device=*/ pac.I2C1,
            /*resets=*/ &mut pac.RESETS,
            /*system_clock=*/ &clocks.system_clock,
        )?;

        let joystick = Joystick::new(
            hal::Adc::new(pac.ADC, &mut pac.RESETS),
            /*x_pin=*/ pins.gpio27.into_floating_input(),
            /*y_pin=*/ pins.gpio26.into_floating_input(),
        );
        let input = Input::new(
            joystick,
            /*button_a_pin=*/ pins.gpio5.into(),
            /*button_b_pin=*/ pins.gpio6.into(),
            /*joystick_button_pin=*/ pins.gpio22.into(),
        );
        unsafe {
            interrupts::enable_button_interrupts();
        }

        Ok(Hardware {
            display,
            leds,
            delay,
            input,
        })
    }
}

/// Restarts into the RP2040 ROM's USB mass-storage bootloader.
pub fn reboot_to_bootloader() -> ! {
    hal::rom_data::reset_to_usb_boot(0, 0);
    #[allow(clippy::empty_loop)]
    loop {}
}
