use crate::axis::AxisCalibration;
use embedded_graphics::prelude::Size;

pub const WIDTH: i32 = 128;
pub const HEIGHT: i32 = 64;

pub fn display_size() -> Size {
    Size::new(WIDTH as u32, HEIGHT as u32)
}

// Joystick calibration, measured on the board. The thresholds are the same for
// both axes but the resting centre is not.
pub const X_AXIS: AxisCalibration = AxisCalibration::new(2038, 16, 4083, 1000, 3000);
pub const Y_AXIS: AxisCalibration = AxisCalibration::new(1901, 17, 4083, 1000, 3000);

// Snake
pub const SNAKE_SIZE: i32 = 2;
pub const FOOD_SIZE: i32 = 2;
pub const MAX_SNAKE_LENGTH: usize = 100;
pub const INITIAL_SNAKE_LENGTH: usize = 3;

// Paint
pub const CURSOR_SIZE: i32 = 2;

// Indicator
pub const SQUARE_SIZE: i32 = 8;
pub const SQUARE_STEP: i32 = 2;

// Debounce and cooldown intervals.
pub const TOGGLE_DEBOUNCE_MS: u32 = 200;
pub const TRANSITION_COOLDOWN_MS: u32 = 500;
pub const MENU_REPEAT_MS: u32 = 200;

pub const SELECTED_SCREEN_MS: u32 = 3000;
pub const STARTUP_SCREEN_MS: u32 = 2000;

// Sleep after each frame. The snake interval sets the game speed.
pub const MENU_FRAME_MS: u32 = 10;
pub const PAINT_FRAME_MS: u32 = 20;
pub const SNAKE_FRAME_MS: u32 = 110;
pub const INDICATOR_FRAME_MS: u32 = 20;
