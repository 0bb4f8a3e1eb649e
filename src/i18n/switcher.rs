use log::info;

use super::service::TranslationService;

/// Tracks the active language and keeps the translation cache honest when it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSwitcher {
    active: String,
    supported: Vec<String>,
}

impl LanguageSwitcher {
    /// Creates a switcher; an unsupported `initial` falls back to the first supported tag.
    pub fn new(supported: Vec<String>, initial: &str) -> Self {
        let active = if supported.iter().any(|tag| tag == initial) || supported.is_empty() {
            initial.to_string()
        } else {
            supported[0].clone()
        };
        Self { active, supported }
    }

    /// Picks the starting language.
    ///
    /// A supported saved preference wins, then the system locale's primary
    /// subtag (`zh-CN` → `zh`), then `default`.
    pub fn resolve_initial(
        saved: Option<&str>,
        locale: Option<&str>,
        supported: &[String],
        default: &str,
    ) -> String {
        let is_supported = |tag: &str| supported.iter().any(|candidate| candidate == tag);

        if let Some(saved) = saved.filter(|tag| is_supported(tag)) {
            return saved.to_string();
        }
        if let Some(locale) = locale {
            let primary = locale
                .split(['-', '_', '.'])
                .next()
                .unwrap_or_default()
                .to_lowercase();
            if is_supported(&primary) {
                return primary;
            }
        }
        default.to_string()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switches to `tag`, clearing the cache on an actual change.
    ///
    /// Returns `false` for unsupported tags and for no-op switches.
    pub fn set(&mut self, tag: &str, translations: &mut TranslationService) -> bool {
        if tag == self.active || !self.supported.iter().any(|candidate| candidate == tag) {
            return false;
        }
        translations.clear_cache();
        info!("Language switched from {} to {}", self.active, tag);
        self.active = tag.to_string();
        true
    }

    /// Moves to the next supported language and returns it.
    pub fn toggle(&mut self, translations: &mut TranslationService) -> &str {
        let next = self.next_tag().to_string();
        self.set(&next, translations);
        &self.active
    }

    pub fn display_name(tag: &str) -> &str {
        match tag {
            "en" => "English",
            "zh" => "中文",
            other => other,
        }
    }

    pub fn active_display_name(&self) -> &str {
        Self::display_name(&self.active)
    }

    /// Label for a toggle button: the language a toggle would switch to.
    pub fn next_display_name(&self) -> &str {
        Self::display_name(self.next_tag())
    }

    fn next_tag(&self) -> &str {
        let position = self.supported.iter().position(|tag| *tag == self.active);
        match position {
            Some(index) => &self.supported[(index + 1) % self.supported.len()],
            None => &self.active,
        }
    }
}
