//! The arcade firmware: a two entry menu leading to Paint or Snake.
//!
//! There is no way back to the menu once a mode has been picked.

use crate::axis::Signal;
use crate::config::*;
use crate::debounce::{ButtonFilter, Debouncer};
use crate::event::{Button, FrameInput};
use crate::paint::PaintCanvas;
use crate::snake::Snake;
use crate::surface::Surface;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Paint,
    Snake,
}

impl MenuOption {
    const ALL: [MenuOption; 2] = [MenuOption::Paint, MenuOption::Snake];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Paint => "PAINT",
            MenuOption::Snake => "SNAKE",
        }
    }
}

pub struct Menu {
    selected_index: usize,
    repeat: Debouncer,
}

impl Menu {
    fn new() -> Self {
        Menu {
            selected_index: 0,
            repeat: Debouncer::new(MENU_REPEAT_MS),
        }
    }

    pub fn highlighted(&self) -> MenuOption {
        MenuOption::ALL[self.selected_index]
    }

    /// Stick up moves the highlight up, down moves it down. A held stick moves
    /// at most once per repeat interval.
    fn navigate(&mut self, y: Signal, now_ms: u32) {
        let target = match y {
            Signal::Positive if self.selected_index > 0 => self.selected_index - 1,
            Signal::Negative if self.selected_index < MenuOption::ALL.len() - 1 => {
                self.selected_index + 1
            }
            _ => return,
        };
        if self.repeat.accept(now_ms) {
            self.selected_index = target;
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear_all()?;
        surface.text("SELECT GAME:", 5, 10)?;
        for (i, option) in MenuOption::ALL.iter().enumerate() {
            let y = 30 + 15 * i as i32;
            if i == self.selected_index {
                surface.text(">", 20, y)?;
            }
            surface.text(option.label(), 30, y)?;
        }
        Ok(())
    }
}

pub enum Mode {
    Menu(Menu),
    Paint(PaintCanvas),
    Snake(Snake),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Menu,
    Paint,
    Snake,
}

struct SelectedScreen {
    label: &'static str,
    shown_at_ms: u32,
}

pub struct App {
    mode: Mode,
    buttons: ButtonFilter,
    selected_screen: Option<SelectedScreen>,
    seed: u64,
}

impl App {
    pub fn new(seed: u64) -> Self {
        App {
            mode: Mode::Menu(Menu::new()),
            buttons: ButtonFilter::new(
                TOGGLE_DEBOUNCE_MS,
                TRANSITION_COOLDOWN_MS,
                TRANSITION_COOLDOWN_MS,
            ),
            selected_screen: None,
            seed,
        }
    }

    pub fn mode(&self) -> ModeKind {
        match self.mode {
            Mode::Menu(_) => ModeKind::Menu,
            Mode::Paint(_) => ModeKind::Paint,
            Mode::Snake(_) => ModeKind::Snake,
        }
    }

    pub fn menu(&self) -> Option<&Menu> {
        match &self.mode {
            Mode::Menu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn canvas(&self) -> Option<&PaintCanvas> {
        match &self.mode {
            Mode::Paint(canvas) => Some(canvas),
            _ => None,
        }
    }

    pub fn snake(&self) -> Option<&Snake> {
        match &self.mode {
            Mode::Snake(snake) => Some(snake),
            _ => None,
        }
    }

    pub fn showing_selected_screen(&self) -> bool {
        self.selected_screen.is_some()
    }

    /// How long to sleep after the current frame.
    pub fn frame_interval_ms(&self) -> u32 {
        match self.mode {
            Mode::Menu(_) => MENU_FRAME_MS,
            Mode::Paint(_) => PAINT_FRAME_MS,
            Mode::Snake(_) => SNAKE_FRAME_MS,
        }
    }

    /// Runs one frame: update the active mode from `input`, draw it and
    /// present the surface.
    pub fn frame<S: Surface>(
        &mut self,
        input: &FrameInput,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if let Some(screen) = &self.selected_screen {
            if input.now_ms.wrapping_sub(screen.shown_at_ms) < SELECTED_SCREEN_MS {
                return draw_selected_screen(screen.label, surface);
            }
            self.selected_screen = None;
            surface.clear_all()?;
            if let Mode::Paint(canvas) = &self.mode {
                canvas.redraw(surface)?;
            }
        }

        let signals = input.signals();
        let edges = input.edges.as_slice();
        let a_pressed = self.buttons.pressed(edges, Button::A);
        let b_pressed = self.buttons.pressed(edges, Button::B);
        let confirm = self.buttons.pressed(edges, Button::Joystick);

        let mut chosen = None;
        match &mut self.mode {
            Mode::Menu(menu) => {
                menu.navigate(signals.y, input.now_ms);
                if confirm {
                    chosen = Some(menu.highlighted());
                } else {
                    menu.draw(surface)?;
                }
            }
            Mode::Paint(canvas) => {
                if a_pressed {
                    canvas.clear(surface)?;
                }
                canvas.move_cursor(signals.x, signals.y);
                canvas.paint_at(surface)?;
            }
            Mode::Snake(snake) => {
                if snake.is_game_over() {
                    if b_pressed {
                        snake.init();
                    }
                } else {
                    snake.set_direction(signals.x, signals.y);
                    snake.step();
                }
                snake.draw(surface)?;
            }
        }

        if let Some(option) = chosen {
            self.enter(option, input.now_ms);
            return draw_selected_screen(option.label(), surface);
        }
        surface.present()
    }

    fn enter(&mut self, option: MenuOption, now_ms: u32) {
        info!("menu: {} selected", option.label());
        self.mode = match option {
            MenuOption::Paint => Mode::Paint(PaintCanvas::new()),
            MenuOption::Snake => Mode::Snake(Snake::new(
                display_size(),
                self.seed.wrapping_add(now_ms as u64),
            )),
        };
        self.selected_screen = Some(SelectedScreen {
            label: option.label(),
            shown_at_ms: now_ms,
        });
    }
}

fn draw_selected_screen<S: Surface>(label: &str, surface: &mut S) -> Result<(), S::Error> {
    surface.clear_all()?;
    surface.text("GAME SELECTED:", 5, 10)?;
    surface.text(label, 30, 30)?;
    surface.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisReading;
    use crate::event::FrameInput;
    use crate::snake::Direction;
    use crate::surface::FrameBuffer;
    use embedded_graphics::prelude::Point;

    const UP: AxisReading = AxisReading { x: 2038, y: 3500 };
    const DOWN: AxisReading = AxisReading { x: 2038, y: 500 };
    const LEFT: AxisReading = AxisReading { x: 500, y: 1901 };
    const RIGHT: AxisReading = AxisReading { x: 3500, y: 1901 };

    fn idle(now_ms: u32) -> FrameInput {
        FrameInput::new(now_ms, AxisReading::centered())
    }

    fn run(app: &mut App, fb: &mut FrameBuffer, input: FrameInput) {
        app.frame(&input, fb).unwrap();
    }

    /// Picks `option` from the menu and waits out the selected screen.
    fn start(option: MenuOption) -> (App, FrameBuffer, u32) {
        let mut app = App::new(3);
        let mut fb = FrameBuffer::new();
        let mut now = 0;
        if option == MenuOption::Snake {
            run(&mut app, &mut fb, FrameInput::new(now, DOWN));
            now += 10;
        }
        run(&mut app, &mut fb, idle(now).with_edge(Button::Joystick));
        now += SELECTED_SCREEN_MS;
        (app, fb, now)
    }

    #[test]
    fn test_starts_in_menu() {
        let mut app = App::new(0);
        let mut fb = FrameBuffer::new();
        run(&mut app, &mut fb, idle(0));
        assert_eq!(app.mode(), ModeKind::Menu);
        assert_eq!(app.menu().unwrap().highlighted(), MenuOption::Paint);
        assert_eq!(fb.presented, 1);
        assert!(fb.lit() > 0);
        assert_eq!(app.frame_interval_ms(), MENU_FRAME_MS);
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = App::new(0);
        let mut fb = FrameBuffer::new();
        run(&mut app, &mut fb, FrameInput::new(0, DOWN));
        assert_eq!(app.menu().unwrap().highlighted(), MenuOption::Snake);
        // Already at the bottom.
        run(&mut app, &mut fb, FrameInput::new(500, DOWN));
        assert_eq!(app.menu().unwrap().highlighted(), MenuOption::Snake);
        run(&mut app, &mut fb, FrameInput::new(1000, UP));
        assert_eq!(app.menu().unwrap().highlighted(), MenuOption::Paint);
        run(&mut app, &mut fb, FrameInput::new(1500, LEFT));
        assert_eq!(app.menu().unwrap().highlighted(), MenuOption::Paint);
    }

    #[test]
    fn test_menu_cooldown() {
        let mut app = App::new(0);
        let mut fb = FrameBuffer::new();
        run(&mut app, &mut fb, FrameInput::new(0, DOWN));
        run(&mut app, &mut fb, FrameInput::new(50, UP));
        assert_eq!(app.menu().unwrap().highlighted(), MenuOption::Snake);
        run(&mut app, &mut fb, FrameInput::new(200, UP));
        assert_eq!(app.menu().unwrap().highlighted(), MenuOption::Paint);
    }

    #[test]
    fn test_menu_ignores_other_buttons() {
        let mut app = App::new(0);
        let mut fb = FrameBuffer::new();
        run(&mut app, &mut fb, idle(0).with_edge(Button::A).with_edge(Button::B));
        assert_eq!(app.mode(), ModeKind::Menu);
    }

    #[test]
    fn test_select_paint() {
        let mut app = App::new(0);
        let mut fb = FrameBuffer::new();
        run(&mut app, &mut fb, idle(100).with_edge(Button::Joystick));
        assert_eq!(app.mode(), ModeKind::Paint);
        assert!(app.showing_selected_screen());
        assert_eq!(fb.presented, 1);

        // The selected screen holds, and the canvas is untouched.
        run(&mut app, &mut fb, FrameInput::new(2000, RIGHT));
        assert!(app.showing_selected_screen());
        assert_eq!(app.canvas().unwrap().cursor(), Point::new(64, 32));

        run(&mut app, &mut fb, idle(100 + SELECTED_SCREEN_MS));
        assert!(!app.showing_selected_screen());
        assert!(app.canvas().unwrap().is_painted(Point::new(64, 32)));
        assert!(fb.is_on(64, 32));
        assert_eq!(fb.lit(), 4);
        assert_eq!(app.frame_interval_ms(), PAINT_FRAME_MS);
    }

    #[test]
    fn test_select_snake() {
        let (mut app, mut fb, now) = start(MenuOption::Snake);
        assert_eq!(app.mode(), ModeKind::Snake);
        let snake = app.snake().unwrap();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(60, 32));

        run(&mut app, &mut fb, idle(now));
        assert_eq!(app.snake().unwrap().head(), Point::new(62, 32));
        assert_eq!(app.frame_interval_ms(), SNAKE_FRAME_MS);
    }

    #[test]
    fn test_paint_draws_incrementally() {
        let (mut app, mut fb, mut now) = start(MenuOption::Paint);
        for _ in 0..5 {
            run(&mut app, &mut fb, FrameInput::new(now, RIGHT));
            now += PAINT_FRAME_MS;
        }
        // Earlier strokes are still there.
        assert!(fb.is_on(65, 32));
        assert!(fb.is_on(70, 33));
        assert_eq!(app.canvas().unwrap().cursor(), Point::new(69, 32));
    }

    #[test]
    fn test_paint_clear_button() {
        let (mut app, mut fb, now) = start(MenuOption::Paint);
        run(&mut app, &mut fb, FrameInput::new(now, UP));
        run(&mut app, &mut fb, FrameInput::new(now + 20, UP));
        assert!(fb.is_on(64, 30));

        run(&mut app, &mut fb, idle(now + 40).with_edge(Button::A));
        let canvas = app.canvas().unwrap();
        assert!(!canvas.is_painted(Point::new(64, 32)));
        assert!(!fb.is_on(64, 32));
        // The current cell is painted again right after the clear.
        assert!(canvas.is_painted(canvas.cursor()));
        assert_eq!(fb.lit(), 4);

        // A bounce right after is ignored.
        run(&mut app, &mut fb, FrameInput::new(now + 60, DOWN).with_edge(Button::A));
        assert!(app.canvas().unwrap().is_painted(Point::new(64, 30)));
    }

    #[test]
    fn test_snake_steering_and_game_over() {
        let (mut app, mut fb, mut now) = start(MenuOption::Snake);
        run(&mut app, &mut fb, FrameInput::new(now, LEFT));
        assert_eq!(app.snake().unwrap().direction(), Direction::Right);

        let mut frames = 0;
        while !app.snake().unwrap().is_game_over() {
            now += SNAKE_FRAME_MS;
            run(&mut app, &mut fb, FrameInput::new(now, DOWN));
            frames += 1;
            assert!(frames < 100);
        }
        let frozen = app.snake().unwrap().head();
        run(&mut app, &mut fb, FrameInput::new(now + SNAKE_FRAME_MS, UP));
        assert_eq!(app.snake().unwrap().head(), frozen);
        assert_eq!(app.mode(), ModeKind::Snake);

        // The joystick button does not leave the game.
        run(&mut app, &mut fb, idle(now + 1000).with_edge(Button::Joystick));
        assert!(app.snake().unwrap().is_game_over());

        run(&mut app, &mut fb, idle(now + 2000).with_edge(Button::B));
        let snake = app.snake().unwrap();
        assert!(!snake.is_game_over());
        assert_eq!(snake.len(), 3);
    }
}
