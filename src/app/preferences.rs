use log::{info, warn};
use scai::particles::{DeviceClass, DrawList, ParticleField};

use super::App;
use crate::ui::layout;

// Implementation block for preference-related logic in the App.
impl App {
    /// Switches to the next language and remembers the choice.
    pub(crate) fn toggle_language(&mut self) {
        let active = self.language.toggle(&mut self.translations).to_string();
        self.config.i18n.language = Some(active);
        match self.config.save_to_file(&self.workspace_root) {
            Ok(()) => self.status_message = Some(String::from("ui.languageSwitched")),
            Err(err) => {
                warn!("Failed to persist language preference: {err:#}");
                self.status_message = Some(String::from("common.error"));
            }
        }
    }

    /// Drops every cached translation.
    pub(crate) fn clear_translations(&mut self) {
        self.translations.clear_cache();
        self.status_message = Some(String::from("ui.cacheCleared"));
    }

    /// Remounts the field for the other device class.
    pub(crate) fn toggle_device_class(&mut self) {
        let device = match self.field.device() {
            DeviceClass::Fine => DeviceClass::Coarse,
            DeviceClass::Coarse => DeviceClass::Fine,
        };
        info!("Remounting particle field as {device:?}");
        self.field.unmount();
        self.field = ParticleField::mount(
            self.config.field.clone(),
            layout::surface_size(self.field_area),
            device,
        );
        self.frame = DrawList::new();
    }
}
