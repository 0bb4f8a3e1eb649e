use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Returns `true` when the key changed something that needs a redraw.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('c') => self.clear_translations(),
            KeyCode::Char('d') => self.toggle_device_class(),
            _ => return false,
        }
        true
    }

    /// Tears the field down and stops the render loop.
    pub(crate) fn quit(&mut self) {
        self.field.unmount();
        self.render_loop.cancel();
        self.should_quit = true;
    }
}
