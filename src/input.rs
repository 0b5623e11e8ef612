use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error};

/// The only inputs the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Quit,
}

impl Key {
    /// Translate a terminal key press. Releases, repeats and unbound keys map
    /// to `None`.
    pub fn from_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let k = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('q') => Self::Quit,

            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::Left | KeyCode::Char('h') => Self::Left,
            KeyCode::Right | KeyCode::Char('l') => Self::Right,

            KeyCode::Char(' ') => Self::Space,
            KeyCode::Esc => Self::Escape,
            _ => return None,
        };
        Some(k)
    }
}

/// Reads terminal events on a background thread so that a slow or blocked
/// read never holds up the game clock. The thread ends when the receiver is
/// dropped (after the next key) or when reading fails.
pub fn spawn_poller(tx: Sender<Key>) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(e) => {
                    error!("reading terminal events failed: {e}");
                    return;
                }
            };
            let Event::Key(key) = ev else { continue };
            let Some(key) = Key::from_event(key) else { continue };
            if tx.send(key).is_err() {
                debug!("input receiver gone, poller stopping");
                return;
            }
        }
    })
}
