use crossterm::event::{MouseEvent, MouseEventKind};

use super::App;
use crate::ui::layout;

// Implementation block for mouse event handling in the App.
impl App {
    /// The main entry point for handling mouse events.
    ///
    /// Movement only records the pointer; the field picks it up on its next
    /// frame, so bursts of events never trigger extra work.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let point = layout::cell_to_point(self.field_area, event.column, event.row);
                self.field.pointer_moved(point);
            }
            _ => {}
        }
    }
}
