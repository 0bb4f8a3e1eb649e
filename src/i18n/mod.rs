//! Key-based localization with a per-instance memoizing cache.

mod keep;
mod resources;
mod service;
mod switcher;

pub use keep::{DEFAULT_KEEP_AS_IS, KeepList};
pub use resources::{LookupError, Node, ResourceError, ResourceTree};
pub use service::{CacheStats, TranslationService};
pub use switcher::LanguageSwitcher;
