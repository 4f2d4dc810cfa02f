// Based on https://github.com/rp-rs/rp-hal/blob/c8bb2e43c792dd3975a255d7eba479547411aec6/boards/pico/examples/pico_usb_serial_interrupt.rs
use crate::{hardware, time};
use core::fmt;
use core::fmt::Write;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use pico::hal;
use pico::hal::pac;
use pico::hal::pac::interrupt;
use usb_device::{class_prelude::*, prelude::*};
use usbd_serial::SerialPort;

/// The USB Device Driver (shared with the interrupt).
static mut USB_DEVICE: Option<UsbDevice<hal::usb::UsbBus>> = None;

/// The USB Bus Driver (shared with the interrupt).
static mut USB_BUS: Option<UsbBusAllocator<hal::usb::UsbBus>> = None;

/// The USB Serial Device Driver (shared with the interrupt).
static mut USB_SERIAL: Option<SerialPort<hal::usb::UsbBus>> = None;

static LOGGER: UsbSerialLogger = UsbSerialLogger;

const LEVEL: Level = Level::Info;

pub fn init(
    regs: pac::USBCTRL_REGS,
    dpram: pac::USBCTRL_DPRAM,
    resets: &mut pac::RESETS,
    clock: hal::clocks::UsbClock,
) -> Result<(), SetLoggerError> {
    let usb_bus = UsbBusAllocator::new(hal::usb::UsbBus::new(regs, dpram, clock, true, resets));
    let usb_bus_ref: &'static UsbBusAllocator<hal::usb::UsbBus> =
        unsafe { USB_BUS.insert(usb_bus) };

    let serial = SerialPort::new(usb_bus_ref);

    // Create a USB device with a fake VID and PID
    let usb_dev = UsbDeviceBuilder::new(usb_bus_ref, UsbVidPid(0x16c0, 0x27dd))
        .manufacturer("BitDogLab")
        .product("Serial log")
        .serial_number("BDL")
        .device_class(2) // from: https://www.usb.org/defined-class-codes
        .build();

    unsafe {
        USB_DEVICE = Some(usb_dev);
        USB_SERIAL = Some(serial);
        log::set_logger_racy(&LOGGER)?;
    }
    unsafe { log::set_max_level_racy(LevelFilter::Info) };

    // Enable the USB interrupt
    unsafe {
        pac::NVIC::unmask(hal::pac::Interrupt::USBCTRL_IRQ);
    };
    Ok(())
}

/// Whether a host has configured the serial device.
pub fn connected() -> bool {
    pac::NVIC::mask(hal::pac::Interrupt::USBCTRL_IRQ);
    let configured = unsafe {
        USB_DEVICE
            .as_ref()
            .map(|dev| dev.state() == UsbDeviceState::Configured)
            .unwrap_or(false)
    };
    unsafe {
        pac::NVIC::unmask(hal::pac::Interrupt::USBCTRL_IRQ);
    }
    configured
}

#[allow(non_snake_case)]
#[interrupt]
unsafe fn USBCTRL_IRQ() {
    let (usb_dev, serial) = match (USB_DEVICE.as_mut(), USB_SERIAL.as_mut()) {
        (Some(usb_dev), Some(serial)) => (usb_dev, serial),
        _ => return,
    };

    if usb_dev.poll(&mut [serial]) {
        let mut buf = [0u8; 64];
        if let Ok(count) = serial.read(&mut buf) {
            if buf[..count].contains(&0) {
                log::info!("Entering flash mode");
                hardware::reboot_to_bootloader();
            }
        }
    }
}

struct UsbSerialLogger;

impl log::Log for UsbSerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut writer = UsbSerialWriter;
            pac::NVIC::mask(hal::pac::Interrupt::USBCTRL_IRQ);
            let _ = write!(
                &mut writer,
                "{} ms {} - {}\r\n",
                time::time_ms(),
                record.level(),
                record.args()
            );
            unsafe {
                pac::NVIC::unmask(hal::pac::Interrupt::USBCTRL_IRQ);
            }
        }
    }

    fn flush(&self) {}
}

struct UsbSerialWriter;

impl fmt::Write for UsbSerialWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        unsafe {
            if let Some(serial) = USB_SERIAL.as_mut() {
                let _ = serial.write(s.as_bytes());
            }
        }
        Ok(())
    }
}
