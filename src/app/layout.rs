use ratatui::layout::Rect;

use super::App;
use crate::ui::layout;

// Implementation block for layout-related logic in the App.
impl App {
    /// Recomputes the screen areas after the terminal changed size.
    ///
    /// The field keeps its particles; only its surface dimensions follow.
    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        let screen = Rect::new(0, 0, width, height);
        self.field_area = layout::areas(screen).field;
        if let Some(size) = layout::surface_size(self.field_area) {
            self.field.resized(size);
        }
    }
}
