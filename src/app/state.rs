//! Defines the core state structure for the application.
//!
//! The `App` struct owns both hosted components (the translation service and
//! the mounted particle field) together with the little UI state the
//! terminal front end needs.

use std::path::PathBuf;
use std::sync::Arc;

use ratatui::layout::Rect;
use scai::config::AppConfig;
use scai::i18n::{LanguageSwitcher, TranslationService};
use scai::particles::{CancelHandle, DrawList, FpsMonitor, ParticleField};

/// The main application state.
///
/// This struct holds all the data required to render the UI and manage user
/// interactions. It is the single source of truth for the application's state.
pub struct App {
    // --- Core State ---
    /// Flag to indicate if the application should quit.
    pub should_quit: bool,
    /// Resolves every user-visible string.
    pub translations: TranslationService,
    /// The active language; switching it clears `translations`.
    pub language: LanguageSwitcher,
    /// The animated backdrop.
    pub field: ParticleField,
    /// Draw commands of the most recent rendered frame.
    pub frame: DrawList,
    /// Measured frame rate of the backdrop.
    pub monitor: FpsMonitor,

    // --- UI & Layout ---
    /// Translation key of the message shown in the status bar, if any.
    pub status_message: Option<String>,
    /// The area the particle field is drawn into.
    pub field_area: Rect,
    /// The root directory configuration is read from and saved to.
    pub workspace_root: PathBuf,
    /// Settings loaded at startup; the language preference is written back.
    pub config: AppConfig,

    // --- Internal State & Flags ---
    /// Stops the frame scheduler driving the main loop.
    pub(crate) render_loop: CancelHandle,
}

impl App {
    /// Shorthand for translating `key` into the active language.
    pub fn t(&mut self, key: &str) -> Arc<str> {
        self.translations.translate(key, self.language.active())
    }

    pub fn render_loop(&self) -> CancelHandle {
        self.render_loop.clone()
    }
}
