use std::io;

use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("terminal too small: board is {width}x{height} cells, need at least {min_width}x{min_height}")]
    BoardTooSmall {
        width: Coord,
        height: Coord,
        min_width: Coord,
        min_height: Coord,
    },
    #[error("input event source closed")]
    InputClosed,
    #[error("game clock stopped")]
    ClockStopped,
}

pub type Result<T> = core::result::Result<T, SnakeError>;
