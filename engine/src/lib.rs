// Game logic for the BitDogLab joystick firmware.
//
// Everything in here is hardware independent: the board crate feeds one
// `FrameInput` per frame and provides a `Surface` to draw on.

#![no_std]

pub mod app;
pub mod axis;
pub mod bank;
pub mod config;
pub mod debounce;
pub mod event;
pub mod indicator;
pub mod paint;
pub mod snake;
pub mod surface;

#[cfg(test)]
#[macro_use]
extern crate std;
