use std::collections::HashSet;

/// Brand terms that stay in English in every language.
pub const DEFAULT_KEEP_AS_IS: &[&str] = &["sai", "sacich", "saibox", "scai", "scaich", "scibox"];

/// Case-insensitive allow-list of words that must never be translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepList {
    words: HashSet<String>,
}

impl KeepList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeepList {
    fn default() -> Self {
        Self::new(DEFAULT_KEEP_AS_IS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        let keep = KeepList::default();
        assert!(keep.contains("SCAI"));
        assert!(keep.contains("SciBox"));
        assert!(!keep.contains("science"));
    }

    #[test]
    fn custom_lists_are_normalized() {
        let keep = KeepList::new(["Web3", "IPFS"]);
        assert_eq!(keep.len(), 2);
        assert!(keep.contains("web3"));
        assert!(keep.contains("ipfs"));
        assert!(KeepList::empty().is_empty());
    }
}
