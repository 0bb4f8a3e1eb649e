use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};
use ratatui::layout::Rect;
use scai::config::AppConfig;
use scai::i18n::{LanguageSwitcher, TranslationService};
use scai::particles::{CancelHandle, DrawList, FpsMonitor, ParticleField};

use super::App;
use crate::ui::layout;

/// Keys every screen shows; warmed before the first frame.
const PRELOAD_KEYS: &[&str] = &[
    "home.title",
    "home.subtitle",
    "ui.languageHint",
    "ui.cacheHint",
    "ui.quitHint",
    "ui.particles",
];

impl App {
    /// Creates a new instance of the `App` state.
    ///
    /// # Arguments
    ///
    /// * `workspace_root` - Directory holding `config/`.
    /// * `config` - Settings loaded from that directory.
    /// * `screen` - Current terminal size, used to mount the particle field.
    pub fn new(workspace_root: PathBuf, config: AppConfig, screen: Rect) -> Result<Self> {
        let canonical_root = workspace_root.canonicalize().unwrap_or(workspace_root);
        debug!("Initializing App with workspace: {}", canonical_root.display());

        let resources = config.i18n.resource_tree(&canonical_root)?;
        let mut translations =
            TranslationService::new(resources).with_keep_list(config.i18n.keep_list());

        let supported = translations.languages();
        let locale = sys_locale::get_locale();
        let initial = LanguageSwitcher::resolve_initial(
            config.i18n.language.as_deref(),
            locale.as_deref(),
            &supported,
            &config.i18n.default_language,
        );
        let language = LanguageSwitcher::new(supported, &initial);
        info!("Starting in language {}", language.active());
        translations.preload(PRELOAD_KEYS, language.active());

        let field_area = layout::areas(screen).field;
        let device = config.field.device.resolve();
        let field = ParticleField::mount(
            config.field.clone(),
            layout::surface_size(field_area),
            device,
        );

        Ok(Self {
            should_quit: false,
            translations,
            language,
            field,
            frame: DrawList::new(),
            monitor: FpsMonitor::new(),
            status_message: None,
            field_area,
            workspace_root: canonical_root,
            config,
            render_loop: CancelHandle::new(),
        })
    }
}
