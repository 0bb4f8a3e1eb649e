use std::time::Instant;

use log::debug;
use scai::particles::DrawList;

use super::App;

// Implementation block for frame-related logic in the App.
impl App {
    /// Called for every slot of the frame scheduler.
    ///
    /// Advances the particle field and keeps its draw commands for the next
    /// render. A skipped frame leaves the previous commands on screen.
    /// Returns `true` when a new frame was produced.
    pub(crate) fn on_frame(&mut self, now: Instant) -> bool {
        let mut next = DrawList::new();
        if !self.field.frame(now, &mut next) {
            return false;
        }
        self.frame = next;

        if let Some(fps) = self.monitor.record_frame(now) {
            debug!("backdrop running at {} fps ({})", fps, self.monitor.status().label());
        }
        true
    }
}
