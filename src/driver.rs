use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::render::BoardView;
use crate::{GameState, GameStatus, Key, Result, SnakeError};

/// How long to back off when neither a tick nor a key is ready, so an
/// idle loop does not spin a core at full load.
const IDLE_BACKOFF: Duration = Duration::from_millis(1);

/// What one pass of the loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Ticked,
    Key(Key),
    Idle,
}

/// Single consumer of the clock and input channels. Owns the game state
/// exclusively, so nothing else ever mutates it.
pub struct Driver<B: Backend> {
    game: GameState,
    terminal: Terminal<B>,
    ticks: Receiver<()>,
    keys: Receiver<Key>,
}

impl<B: Backend> Driver<B> {
    pub fn new(game: GameState, terminal: Terminal<B>, ticks: Receiver<()>, keys: Receiver<Key>) -> Self {
        Self {
            game,
            terminal,
            ticks,
            keys,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Runs until the game reaches `Exited`.
    pub fn run(&mut self) -> Result<()> {
        self.draw()?;
        loop {
            match self.game.status() {
                GameStatus::Playing => {
                    if self.step_playing()? == Step::Idle {
                        thread::sleep(IDLE_BACKOFF);
                    }
                }
                GameStatus::GameOver => {
                    self.step_game_over()?;
                }
                GameStatus::Exited => {
                    info!("leaving with score {}", self.game.score());
                    return Ok(());
                }
            }
        }
    }

    /// Handles at most one ready source without blocking. A pending tick
    /// wins over a pending key.
    pub fn step_playing(&mut self) -> Result<Step> {
        match self.ticks.try_recv() {
            Ok(()) => {
                let res = self.game.tick();
                if res.status == GameStatus::GameOver {
                    info!("game over with score {}", res.score);
                }
                self.draw()?;
                return Ok(Step::Ticked);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => return Err(SnakeError::ClockStopped),
        }

        match self.keys.try_recv() {
            Ok(key) => {
                debug!("key {key:?} while playing");
                self.game.handle_key(key);
                Ok(Step::Key(key))
            }
            Err(TryRecvError::Empty) => Ok(Step::Idle),
            Err(TryRecvError::Disconnected) => Err(SnakeError::InputClosed),
        }
    }

    /// Blocks for the next key; ticks are ignored until play resumes.
    pub fn step_game_over(&mut self) -> Result<Step> {
        let key = self.keys.recv().map_err(|_| SnakeError::InputClosed)?;
        debug!("key {key:?} after game over");
        self.game.handle_key(key);
        if self.game.status() == GameStatus::Playing {
            self.draw()?;
        }
        Ok(Step::Key(key))
    }

    fn draw(&mut self) -> Result<()> {
        let game = &self.game;
        self.terminal
            .draw(|f| f.render_widget(BoardView::new(game), f.area()))?;
        Ok(())
    }
}
