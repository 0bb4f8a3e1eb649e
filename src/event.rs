use std::time::Instant;

use crossterm::event::{KeyEvent, MouseEvent};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// A frame slot handed out by the frame scheduler.
    Frame(Instant),
    /// A key press event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// The terminal was resized to the given columns and rows.
    Resize(u16, u16),
}
