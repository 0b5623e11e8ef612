use std::fs::File;
use std::io;
use std::sync::mpsc;

use term_snake::driver::Driver;
use term_snake::{GameConfig, GameState, Result, SnakeError, TICK, clock, input};

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Log file path; logging is off unless this is set.
const LOG_ENV: &str = "SNAKE_LOG";

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("fatal: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("could not install logger: {e}");
            }
        }
        Err(e) => eprintln!("could not open log file {}: {e}", path.to_string_lossy()),
    }
}

fn run() -> Result<()> {
    // --- Init terminal ---
    enable_raw_mode()?;
    let res = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
        .map_err(SnakeError::from)
        .and_then(play);

    // --- Restore terminal even on error ---
    restore_terminal();
    res
}

fn play(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    terminal.clear()?;
    let size = terminal.size()?;
    let cfg = GameConfig::from_terminal(size.width, size.height)?;
    info!("starting on a {}x{} board", cfg.width, cfg.height);

    let (tick_tx, tick_rx) = mpsc::sync_channel(1);
    let (key_tx, key_rx) = mpsc::channel();
    clock::spawn_ticker(TICK, tick_tx);
    input::spawn_poller(key_tx);

    Driver::new(GameState::new(cfg), terminal, tick_rx, key_rx).run()
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!("failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        error!("failed to leave alternate screen: {e}");
    }
}
