//! The indicator firmware: a square that follows the joystick, a selectable
//! screen border and RGB LED brightness that tracks the stick deflection.

use crate::config::{
    HEIGHT, SQUARE_SIZE, SQUARE_STEP, TOGGLE_DEBOUNCE_MS, WIDTH, X_AXIS, Y_AXIS,
};
use crate::debounce::ButtonFilter;
use crate::event::{Button, FrameInput};
use crate::surface::Surface;
use embedded_graphics::prelude::*;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedChannel {
    Red,
    Green,
    Blue,
}

pub trait LedSink {
    fn set_brightness(&mut self, channel: LedChannel, level: u8);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Single,
    Double,
}

impl BorderStyle {
    pub fn next(self) -> BorderStyle {
        match self {
            BorderStyle::None => BorderStyle::Single,
            BorderStyle::Single => BorderStyle::Double,
            BorderStyle::Double => BorderStyle::None,
        }
    }

    pub fn draw<S: Surface>(self, surface: &mut S) -> Result<(), S::Error> {
        match self {
            BorderStyle::None => Ok(()),
            BorderStyle::Single => frame(surface, 0),
            BorderStyle::Double => {
                frame(surface, 0)?;
                frame(surface, 2)
            }
        }
    }
}

/// A one pixel rectangle `inset` pixels in from the screen edges.
fn frame<S: Surface>(surface: &mut S, inset: i32) -> Result<(), S::Error> {
    let left = inset;
    let top = inset;
    let right = WIDTH - 1 - inset;
    let bottom = HEIGHT - 1 - inset;
    surface.line(Point::new(left, top), Point::new(right, top))?;
    surface.line(Point::new(left, bottom), Point::new(right, bottom))?;
    surface.line(Point::new(left, top), Point::new(left, bottom))?;
    surface.line(Point::new(right, top), Point::new(right, bottom))
}

pub struct Indicator {
    square: Point,
    border: BorderStyle,
    feedback_enabled: bool,
    green_on: bool,
    buttons: ButtonFilter,
}

impl Indicator {
    pub fn new() -> Self {
        Indicator {
            square: Point::new(WIDTH / 2 - SQUARE_SIZE / 2, HEIGHT / 2 - SQUARE_SIZE / 2),
            border: BorderStyle::None,
            feedback_enabled: true,
            green_on: false,
            buttons: ButtonFilter::new(
                TOGGLE_DEBOUNCE_MS,
                TOGGLE_DEBOUNCE_MS,
                TOGGLE_DEBOUNCE_MS,
            ),
        }
    }

    pub fn square(&self) -> Point {
        self.square
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    pub fn feedback_enabled(&self) -> bool {
        self.feedback_enabled
    }

    pub fn green_on(&self) -> bool {
        self.green_on
    }

    pub fn frame<S: Surface, L: LedSink>(
        &mut self,
        input: &FrameInput,
        surface: &mut S,
        leds: &mut L,
    ) -> Result<(), S::Error> {
        let edges = input.edges.as_slice();
        if self.buttons.pressed(edges, Button::A) {
            self.feedback_enabled = !self.feedback_enabled;
            info!("indicator: rgb feedback {}", self.feedback_enabled);
            if !self.feedback_enabled {
                leds.set_brightness(LedChannel::Red, 0);
                leds.set_brightness(LedChannel::Blue, 0);
            }
        }
        if self.buttons.pressed(edges, Button::Joystick) {
            self.green_on = !self.green_on;
            leds.set_brightness(LedChannel::Green, if self.green_on { 255 } else { 0 });
            self.border = self.border.next();
            info!("indicator: border {:?}", self.border);
        }

        let signals = input.signals();
        let x = self.square.x + signals.x.delta() * SQUARE_STEP;
        let y = self.square.y - signals.y.delta() * SQUARE_STEP;
        self.square = Point::new(
            x.clamp(0, WIDTH - SQUARE_SIZE),
            y.clamp(0, HEIGHT - SQUARE_SIZE),
        );

        surface.clear_all()?;
        self.border.draw(surface)?;
        surface.fill_rect(
            self.square.x,
            self.square.y,
            SQUARE_SIZE as u32,
            SQUARE_SIZE as u32,
        )?;
        surface.present()?;

        if self.feedback_enabled {
            leds.set_brightness(LedChannel::Red, X_AXIS.intensity(input.axes.x));
            leds.set_brightness(LedChannel::Blue, Y_AXIS.intensity(input.axes.y));
        }
        Ok(())
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}
