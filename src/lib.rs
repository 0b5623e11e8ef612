use std::time::Duration;

pub mod clock;
pub mod driver;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;

pub use error::{Result, SnakeError};
pub use food::{Food, free_spot};
pub use game::{GameState, GameStatus, TickResult};
pub use input::Key;
pub use snake::{Segment, Snake};

/// Integer coordinate type for grid cells (not terminal columns)
pub type Coord = i32;

/// Period of the game clock.
pub const TICK: Duration = Duration::from_millis(80);

/// Moves of growth granted for every piece of food eaten.
pub const FOOD_BONUS: u32 = 10;

/// Where a fresh snake starts.
pub const SPAWN: Point = Point::new(5, 5);
pub const SPAWN_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.dx_dy();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Opposite directions are negatives of each other, so a reversal is
/// detected by their codes summing to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum Direction {
    Up = -1,
    Down = 1,
    Left = -2,
    Right = 2,
}

impl Direction {
    #[inline]
    pub fn dx_dy(self) -> (Coord, Coord) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[inline]
    pub fn is_opposite(self, other: Self) -> bool {
        self as i8 + other as i8 == 0
    }
}

/// Board dimensions in logical cells, border ring included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
}

impl GameConfig {
    /// Smallest board on which the spawn cell is still interior.
    pub const MIN_WIDTH: Coord = SPAWN.x + 2;
    pub const MIN_HEIGHT: Coord = SPAWN.y + 2;

    /// Builds a board from the terminal size. Every logical cell is two
    /// columns wide.
    pub fn from_terminal(columns: u16, rows: u16) -> Result<Self> {
        let cfg = Self {
            width: Coord::from(columns / 2),
            height: Coord::from(rows),
        };
        if cfg.width < Self::MIN_WIDTH || cfg.height < Self::MIN_HEIGHT {
            return Err(SnakeError::BoardTooSmall {
                width: cfg.width,
                height: cfg.height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            });
        }
        Ok(cfg)
    }

    /// True if `p` lies on the outer ring of wall cells.
    #[inline]
    pub fn on_border(&self, p: Point) -> bool {
        p.x <= 0 || p.y <= 0 || p.x >= self.width - 1 || p.y >= self.height - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_cancel_out() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn step_follows_screen_axes() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Up), Point::new(5, 4));
        assert_eq!(p.step(Direction::Down), Point::new(5, 6));
        assert_eq!(p.step(Direction::Left), Point::new(4, 5));
        assert_eq!(p.step(Direction::Right), Point::new(6, 5));
    }

    #[test]
    fn board_halves_terminal_columns() {
        let cfg = GameConfig::from_terminal(80, 24).unwrap();
        assert_eq!(cfg, GameConfig { width: 40, height: 24 });
    }

    #[test]
    fn tiny_terminal_is_rejected() {
        let err = GameConfig::from_terminal(10, 24).unwrap_err();
        assert!(matches!(err, SnakeError::BoardTooSmall { width: 5, .. }));
    }

    #[test]
    fn border_ring() {
        let cfg = GameConfig { width: 20, height: 10 };
        assert!(cfg.on_border(Point::new(0, 4)));
        assert!(cfg.on_border(Point::new(19, 4)));
        assert!(cfg.on_border(Point::new(3, 0)));
        assert!(cfg.on_border(Point::new(3, 9)));
        assert!(!cfg.on_border(Point::new(1, 1)));
        assert!(!cfg.on_border(Point::new(18, 8)));
    }
}
