use std::collections::HashSet;

use lingo_types::VocabularyEntry;
use unicode_normalization::UnicodeNormalization;

/// Comparison form of a word: NFKC, trimmed, lower-cased
pub fn normalize_word(word: &str) -> String {
    word.trim().nfkc().collect::<String>().to_lowercase()
}

/// Words the owner already has, used to reject repeats before any lookup
#[derive(Debug, Default, Clone)]
pub struct KnownWords {
    words: HashSet<String>,
}

impl KnownWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a VocabularyEntry>) -> Self {
        Self::from_words(entries.into_iter().map(|e| e.word.as_str()))
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(normalize_word).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    /// Returns false when the word was already known
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(normalize_word(word))
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_ignores_case_and_whitespace() {
        let mut known = KnownWords::from_words(["Harbor"]);
        assert!(known.contains("harbor"));
        assert!(known.contains("  HARBOR "));
        assert!(!known.insert("harBOR"));
        assert!(known.insert("meadow"));
        assert_eq!(known.len(), 2);
    }

    #[test]
    fn compatibility_forms_collapse() {
        // fullwidth letters normalize to ASCII under NFKC
        let known = KnownWords::from_words(["ｃａｆｅ"]);
        assert!(known.contains("cafe"));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut known = KnownWords::from_words(["harbor", "meadow"]);
        known.clear();
        assert!(known.is_empty());
        assert!(!known.contains("harbor"));
    }
}
