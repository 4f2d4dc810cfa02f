#![no_std]

pub mod display;
pub mod hardware;
pub mod input;
pub mod interrupts;
pub mod leds;
pub mod pacer;
pub mod panic;
pub mod time;
pub mod usb_logger;
