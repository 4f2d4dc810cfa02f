use crate::axis::Signal;
use crate::config::{CURSOR_SIZE, HEIGHT, WIDTH};
use crate::surface::Surface;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

const BITMAP_BYTES: usize = (WIDTH * HEIGHT / 8) as usize;

/// Freehand drawing canvas.
///
/// Every painted pixel is also kept in a 1 bit per pixel bitmap so the canvas
/// can be restored on a freshly cleared surface.
pub struct PaintCanvas {
    cursor: Point,
    bitmap: [u8; BITMAP_BYTES],
}

impl PaintCanvas {
    pub fn new() -> Self {
        PaintCanvas {
            cursor: Point::new(WIDTH / 2, HEIGHT / 2),
            bitmap: [0; BITMAP_BYTES],
        }
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Moves the cursor one pixel along each deflected axis. Pushing the stick
    /// up (positive Y) moves towards the top of the screen.
    pub fn move_cursor(&mut self, x: Signal, y: Signal) {
        self.cursor.x = (self.cursor.x + x.delta()).clamp(0, WIDTH - 1);
        self.cursor.y = (self.cursor.y - y.delta()).clamp(0, HEIGHT - 1);
    }

    /// Paints the cell under the cursor.
    pub fn paint_at<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let Point { x, y } = self.cursor;
        for dy in 0..CURSOR_SIZE {
            for dx in 0..CURSOR_SIZE {
                self.set(Point::new(x + dx, y + dy));
            }
        }
        surface.fill_rect(x, y, CURSOR_SIZE as u32, CURSOR_SIZE as u32)
    }

    pub fn clear<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        log::info!("paint: canvas cleared");
        self.bitmap = [0; BITMAP_BYTES];
        surface.clear_all()
    }

    /// Draws every painted pixel onto `surface`.
    pub fn redraw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let painted = (0..HEIGHT)
            .flat_map(|y| (0..WIDTH).map(move |x| Point::new(x, y)))
            .filter(|p| self.is_painted(*p))
            .map(|p| Pixel(p, BinaryColor::On));
        surface.draw_iter(painted)
    }

    pub fn is_painted(&self, p: Point) -> bool {
        match Self::bit(p) {
            Some((byte, mask)) => self.bitmap[byte] & mask != 0,
            None => false,
        }
    }

    fn set(&mut self, p: Point) {
        if let Some((byte, mask)) = Self::bit(p) {
            self.bitmap[byte] |= mask;
        }
    }

    fn bit(p: Point) -> Option<(usize, u8)> {
        if !(0..WIDTH).contains(&p.x) || !(0..HEIGHT).contains(&p.y) {
            return None;
        }
        let index = (p.x + p.y * WIDTH) as usize;
        Some((index / 8, 1 << (index % 8)))
    }
}

impl Default for PaintCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FrameBuffer;

    #[test]
    fn test_starts_centered_and_empty() {
        let canvas = PaintCanvas::new();
        assert_eq!(canvas.cursor(), Point::new(64, 32));
        assert!(canvas.bitmap.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_move_cursor() {
        let mut canvas = PaintCanvas::new();
        canvas.move_cursor(Signal::Positive, Signal::Neutral);
        assert_eq!(canvas.cursor(), Point::new(65, 32));
        canvas.move_cursor(Signal::Negative, Signal::Positive);
        assert_eq!(canvas.cursor(), Point::new(64, 31));
        canvas.move_cursor(Signal::Neutral, Signal::Negative);
        assert_eq!(canvas.cursor(), Point::new(64, 32));
        canvas.move_cursor(Signal::Neutral, Signal::Neutral);
        assert_eq!(canvas.cursor(), Point::new(64, 32));
    }

    #[test]
    fn test_cursor_clamped() {
        let mut canvas = PaintCanvas::new();
        for _ in 0..200 {
            canvas.move_cursor(Signal::Negative, Signal::Positive);
        }
        assert_eq!(canvas.cursor(), Point::new(0, 0));
        for _ in 0..200 {
            canvas.move_cursor(Signal::Positive, Signal::Negative);
        }
        assert_eq!(canvas.cursor(), Point::new(WIDTH - 1, HEIGHT - 1));
    }

    #[test]
    fn test_paint_marks_cell() {
        let mut canvas = PaintCanvas::new();
        let mut fb = FrameBuffer::new();
        canvas.paint_at(&mut fb).unwrap();
        for p in [(64, 32), (65, 32), (64, 33), (65, 33)] {
            assert!(canvas.is_painted(Point::new(p.0, p.1)));
            assert!(fb.is_on(p.0, p.1));
        }
        assert!(!canvas.is_painted(Point::new(66, 32)));
        assert_eq!(fb.lit(), 4);
    }

    #[test]
    fn test_paint_at_edge_stays_in_bounds() {
        let mut canvas = PaintCanvas::new();
        let mut fb = FrameBuffer::new();
        for _ in 0..200 {
            canvas.move_cursor(Signal::Positive, Signal::Negative);
        }
        canvas.paint_at(&mut fb).unwrap();
        assert!(canvas.is_painted(Point::new(WIDTH - 1, HEIGHT - 1)));
        assert_eq!(fb.lit(), 1);
    }

    #[test]
    fn test_clear() {
        let mut canvas = PaintCanvas::new();
        let mut fb = FrameBuffer::new();
        canvas.paint_at(&mut fb).unwrap();
        canvas.clear(&mut fb).unwrap();
        assert!(!canvas.is_painted(Point::new(64, 32)));
        assert_eq!(fb.lit(), 0);
        // Clearing keeps the cursor where it was.
        assert_eq!(canvas.cursor(), Point::new(64, 32));
    }

    #[test]
    fn test_redraw_restores_strokes() {
        let mut canvas = PaintCanvas::new();
        let mut fb = FrameBuffer::new();
        for _ in 0..10 {
            canvas.move_cursor(Signal::Positive, Signal::Neutral);
            canvas.paint_at(&mut fb).unwrap();
        }
        let painted = fb.lit();

        let mut fresh = FrameBuffer::new();
        canvas.redraw(&mut fresh).unwrap();
        assert_eq!(fresh.lit(), painted);
        assert!(fresh.is_on(74, 33));
    }
}
