use crate::axis::Signal;
use crate::config::{FOOD_SIZE, INITIAL_SNAKE_LENGTH, MAX_SNAKE_LENGTH, SNAKE_SIZE};
use crate::surface::Surface;
use core::fmt::Write;
use embedded_graphics::prelude::*;
use heapless::Vec;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// One step of movement in pixels.
    fn offset(self) -> Point {
        match self {
            Direction::Right => Point::new(SNAKE_SIZE, 0),
            Direction::Down => Point::new(0, SNAKE_SIZE),
            Direction::Left => Point::new(-SNAKE_SIZE, 0),
            Direction::Up => Point::new(0, -SNAKE_SIZE),
        }
    }
}

pub struct Snake {
    bounds: Size,
    body: Vec<Point, MAX_SNAKE_LENGTH>,
    food: Point,
    direction: Direction,
    game_over: bool,
    rng: oorandom::Rand32,
}

impl Snake {
    pub fn new(bounds: Size, seed: u64) -> Self {
        let mut snake = Snake {
            bounds,
            body: Vec::new(),
            food: Point::zero(),
            direction: Direction::Right,
            game_over: false,
            rng: oorandom::Rand32::new(seed),
        };
        snake.init();
        snake
    }

    /// Starts a new game: three segments heading right across the middle of
    /// the board and fresh food.
    pub fn init(&mut self) {
        let head_x = self.width() / 2 - (INITIAL_SNAKE_LENGTH as i32 - 1) * SNAKE_SIZE;
        let y = self.height() / 2;
        self.body.clear();
        for i in 0..INITIAL_SNAKE_LENGTH {
            let _ = self
                .body
                .push(Point::new(head_x - i as i32 * SNAKE_SIZE, y));
        }
        self.direction = Direction::Right;
        self.game_over = false;
        self.spawn_food();
        info!("snake: new game, food at {:?}", self.food);
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> usize {
        self.body.len() - INITIAL_SNAKE_LENGTH
    }

    /// Changes direction unless that would reverse onto the body. Returns
    /// whether the turn was taken.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Steers from the joystick. A vertical deflection wins over a horizontal
    /// one; a reversing request falls through to the other axis.
    pub fn set_direction(&mut self, x: Signal, y: Signal) {
        let vertical = match y {
            Signal::Positive => Some(Direction::Up),
            Signal::Negative => Some(Direction::Down),
            Signal::Neutral => None,
        };
        let horizontal = match x {
            Signal::Positive => Some(Direction::Right),
            Signal::Negative => Some(Direction::Left),
            Signal::Neutral => None,
        };
        for requested in [vertical, horizontal].into_iter().flatten() {
            if self.turn(requested) {
                return;
            }
        }
    }

    /// Advances the game by one step. Does nothing once the game is over.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        let previous = self.body.clone();
        self.body[0] += self.direction.offset();
        for i in 1..self.body.len() {
            self.body[i] = previous[i - 1];
        }

        if self.head_on_food() {
            if let Some(&vacated) = previous.last() {
                if self.body.push(vacated).is_err() {
                    debug!("snake: at maximum length");
                }
            }
            self.spawn_food();
            debug!("snake: ate, length {}", self.body.len());
        }

        if self.collided() {
            self.game_over = true;
            info!("snake: game over at {:?}, score {}", self.head(), self.score());
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear_all()?;
        if self.game_over {
            let mut score: heapless::String<12> = heapless::String::new();
            let _ = write!(score, "{}", self.score());
            surface.text("GAME OVER", 30, 20)?;
            surface.text("SCORE:", 30, 35)?;
            return surface.text(&score, 80, 35);
        }
        for segment in self.body.iter() {
            surface.fill_rect(segment.x, segment.y, SNAKE_SIZE as u32, SNAKE_SIZE as u32)?;
        }
        surface.fill_rect(self.food.x, self.food.y, FOOD_SIZE as u32, FOOD_SIZE as u32)
    }

    // Food can land on the body; that is left as is.
    fn spawn_food(&mut self) {
        let x = self.rng.rand_range(0..(self.width() - FOOD_SIZE) as u32);
        let y = self.rng.rand_range(0..(self.height() - FOOD_SIZE) as u32);
        self.food = Point::new(x as i32, y as i32);
    }

    fn head_on_food(&self) -> bool {
        let d = self.head() - self.food;
        d.x.abs() < SNAKE_SIZE && d.y.abs() < SNAKE_SIZE
    }

    fn collided(&self) -> bool {
        let head = self.head();
        if head.x < 0 || head.x >= self.width() || head.y < 0 || head.y >= self.height() {
            return true;
        }
        self.body[1..].contains(&head)
    }

    fn width(&self) -> i32 {
        self.bounds.width as i32
    }

    fn height(&self) -> i32 {
        self.bounds.height as i32
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Point) {
        self.food = food;
    }
}
