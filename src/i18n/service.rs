use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use super::keep::KeepList;
use super::resources::ResourceTree;

/// Counters describing how the cache has been used since the service was built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Number of resource tree traversals performed.
    pub tree_walks: u64,
    /// Entries currently cached.
    pub entries: usize,
}

/// Resolves dotted keys against a [`ResourceTree`], memoizing every answer.
///
/// Each instance owns its cache. Lookups never fail: anything that cannot be
/// resolved to a string is answered with the key itself, and that answer is
/// cached like any other. The cache is only ever emptied as a whole through
/// [`TranslationService::clear_cache`]; callers switching the active language
/// must clear it before the next lookup.
#[derive(Debug)]
pub struct TranslationService {
    resources: Arc<ResourceTree>,
    keep: KeepList,
    cache: HashMap<String, Arc<str>>,
    stats: CacheStats,
}

impl TranslationService {
    pub fn new(resources: ResourceTree) -> Self {
        Self::with_shared(Arc::new(resources), KeepList::default())
    }

    /// Builds a service over a tree shared with other instances.
    pub fn with_shared(resources: Arc<ResourceTree>, keep: KeepList) -> Self {
        Self {
            resources,
            keep,
            cache: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn with_keep_list(mut self, keep: KeepList) -> Self {
        self.keep = keep;
        self
    }

    /// Returns the text for `key` in `language`, or `key` itself when unresolved.
    ///
    /// Repeated calls for the same pair return the same allocation until the
    /// cache is cleared.
    pub fn translate(&mut self, key: &str, language: &str) -> Arc<str> {
        let cache_key = format!("{language}:{key}");
        if let Some(cached) = self.cache.get(&cache_key) {
            self.stats.hits += 1;
            return Arc::clone(cached);
        }
        self.stats.misses += 1;
        self.stats.tree_walks += 1;

        let resolved: Arc<str> = match self.resources.walk(language, key) {
            Ok(text) => Arc::from(text),
            Err(reason) => {
                if self.keep.contains(key) {
                    debug!("keeping `{key}` as-is for {language}");
                } else {
                    debug!("unresolved translation for {language}: {reason}");
                }
                Arc::from(key)
            }
        };

        self.cache.insert(cache_key, Arc::clone(&resolved));
        self.stats.entries = self.cache.len();
        resolved
    }

    /// Translates every key, returning one entry per distinct input key.
    pub fn translate_batch<S: AsRef<str>>(
        &mut self,
        keys: &[S],
        language: &str,
    ) -> HashMap<String, Arc<str>> {
        keys.iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), self.translate(key, language))
            })
            .collect()
    }

    /// Warms the cache for `keys`.
    pub fn preload<S: AsRef<str>>(&mut self, keys: &[S], language: &str) {
        for key in keys {
            self.translate(key.as_ref(), language);
        }
    }

    pub fn clear_cache(&mut self) {
        debug!("clearing {} cached translations", self.cache.len());
        self.cache.clear();
        self.stats.entries = 0;
    }

    pub fn is_kept_as_is(&self, word: &str) -> bool {
        self.keep.contains(word)
    }

    pub fn is_cached(&self, key: &str, language: &str) -> bool {
        self.cache.contains_key(&format!("{language}:{key}"))
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn resources(&self) -> &ResourceTree {
        &self.resources
    }

    /// Shared handle to the tree, for building sibling services.
    pub fn shared_resources(&self) -> Arc<ResourceTree> {
        Arc::clone(&self.resources)
    }

    /// Mutable access to the tree (copied first if shared).
    ///
    /// Cached answers are left alone; call [`Self::clear_cache`] to observe edits.
    pub fn resources_mut(&mut self) -> &mut ResourceTree {
        Arc::make_mut(&mut self.resources)
    }

    pub fn languages(&self) -> Vec<String> {
        self.resources.languages()
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new(ResourceTree::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_lookup_is_served_from_cache() {
        let mut service = TranslationService::default();
        let first = service.translate("home.title", "en");
        let second = service.translate("home.title", "en");

        assert!(Arc::ptr_eq(&first, &second));
        let stats = service.stats();
        assert_eq!(stats.tree_walks, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn keep_list_words_fall_back_to_themselves() {
        let mut service = TranslationService::default();
        assert!(service.is_kept_as_is("SCAI"));
        assert_eq!(&*service.translate("SCAI", "zh"), "SCAI");
        assert_eq!(&*service.translate("unlisted", "zh"), "unlisted");
    }

    #[test]
    fn shared_trees_are_copied_before_mutation() {
        let base = TranslationService::default();
        let mut edited =
            TranslationService::with_shared(base.shared_resources(), KeepList::empty());
        edited.resources_mut().insert("en", "home.title", "Edited");

        assert_eq!(
            base.resources().resolve("en", "home.title"),
            Some("SCAI - Scientific AI Collaboration Framework")
        );
        assert_eq!(edited.resources().resolve("en", "home.title"), Some("Edited"));
    }

    #[test]
    fn unknown_language_degrades_to_key() {
        let mut service = TranslationService::default();
        assert_eq!(&*service.translate("home.title", "fr"), "home.title");
        assert!(service.is_cached("home.title", "fr"));
    }
}
