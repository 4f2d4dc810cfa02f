//! The drawing surface the game logic renders to.
//!
//! Any monochrome `embedded_graphics` draw target can be a surface; it only has
//! to know how to push its buffer to the panel.

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

pub trait Surface: DrawTarget<Color = BinaryColor> {
    /// Sends the drawn frame to the panel.
    fn present(&mut self) -> Result<(), Self::Error>;

    fn clear_all(&mut self) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        self.clear(BinaryColor::Off)
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(self)
    }

    fn line(&mut self, from: Point, to: Point) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self)
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self)?;
        Ok(())
    }
}

#[cfg(test)]
pub use self::frame_buffer::FrameBuffer;
