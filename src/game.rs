use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::food::{Food, free_spot};
use crate::input::Key;
use crate::snake::Snake;
use crate::{Direction, FOOD_BONUS, GameConfig, Point, SPAWN, SPAWN_DIRECTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    /// Terminal; the driver stops once it sees this.
    Exited,
}

/// UI-agnostic result of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub ate_food: bool,
    pub status: GameStatus,
    pub score: u32,
}

#[derive(Debug)]
pub struct GameState {
    cfg: GameConfig,
    snake: Snake,
    food: Food,
    rng: ChaCha8Rng,
    status: GameStatus,
    score: u32,
}

impl GameState {
    pub fn with_seed(cfg: GameConfig, seed: u64) -> Self {
        Self::with_rng(cfg, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(cfg: GameConfig, mut rng: ChaCha8Rng) -> Self {
        let snake = Snake::new(SPAWN, SPAWN_DIRECTION);
        let food_pos = free_spot(&cfg, snake.segments().map(|s| s.pos), &mut rng)
            .unwrap_or_else(|| {
                warn!("no free cell for food on a {}x{} board", cfg.width, cfg.height);
                Point::new(1, 1)
            });
        Self {
            cfg,
            snake,
            food: Food::new(food_pos),
            rng,
            status: GameStatus::Playing,
            score: 0,
        }
    }

    /// Create a new game with non-deterministic seed
    pub fn new(cfg: GameConfig) -> Self {
        Self::with_rng(cfg, ChaCha8Rng::from_os_rng())
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Advance the game by one clock tick. Does nothing unless playing.
    pub fn tick(&mut self) -> TickResult {
        if self.status != GameStatus::Playing {
            return TickResult {
                ate_food: false,
                status: self.status,
                score: self.score,
            };
        }

        self.snake.move_step();
        let ate_food = self.consolidate();

        TickResult {
            ate_food,
            status: self.status,
            score: self.score,
        }
    }

    /// Resolve collisions and food for the head's new position.
    fn consolidate(&mut self) -> bool {
        let head = self.snake.head().pos;

        if self.snake.tail().any(|s| s.pos == head) {
            info!("snake bit itself at ({}, {})", head.x, head.y);
            self.status = GameStatus::GameOver;
        }

        if self.cfg.on_border(head) {
            info!("snake hit the wall at ({}, {})", head.x, head.y);
            self.status = GameStatus::GameOver;
        }

        if head != self.food.pos {
            return false;
        }

        self.snake.set_pending_growth(FOOD_BONUS);
        self.score += 1;
        let occupied = self.snake.segments().map(|s| s.pos);
        if self.food.relocate(&self.cfg, occupied, &mut self.rng) {
            debug!(
                "food eaten, score {}, next food at ({}, {})",
                self.score, self.food.pos.x, self.food.pos.y
            );
        } else {
            warn!("board is full, food stays at ({}, {})", head.x, head.y);
        }
        true
    }

    /// Apply one input key according to the current status.
    pub fn handle_key(&mut self, key: Key) {
        match self.status {
            GameStatus::Playing => match key {
                Key::Quit => self.exit(),
                Key::Up => self.redirect(Direction::Up),
                Key::Down => self.redirect(Direction::Down),
                Key::Left => self.redirect(Direction::Left),
                Key::Right => self.redirect(Direction::Right),
                Key::Space | Key::Escape => {}
            },
            GameStatus::GameOver => match key {
                Key::Quit | Key::Escape => self.exit(),
                Key::Space => self.restart(),
                _ => {}
            },
            GameStatus::Exited => {}
        }
    }

    /// Fresh snake and zero score. The food keeps its position.
    pub fn restart(&mut self) {
        info!("restarting after scoring {}", self.score);
        self.snake = Snake::new(SPAWN, SPAWN_DIRECTION);
        self.score = 0;
        self.status = GameStatus::Playing;
    }

    pub fn exit(&mut self) {
        info!("exit requested with score {}", self.score);
        self.status = GameStatus::Exited;
    }

    fn redirect(&mut self, dir: Direction) {
        if !self.snake.redirect(dir) {
            debug!("ignored reversal towards {dir:?}");
        }
    }
}
