//! Stopword filtering
//!
//! Wraps the bundled lists from the `stop-words` crate behind a small
//! membership set, with support for custom lists when callers need
//! deterministic behavior independent of the bundled data.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Membership test against a fixed stopword set.
///
/// Lookups are case-insensitive; the set stores lowercase words.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Filter with the bundled list for a language code.
    ///
    /// Unknown codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "pl" | "polish" => LANGUAGE::Polish,
            "tr" | "turkish" => LANGUAGE::Turkish,
            _ => LANGUAGE::English,
        };
        Self {
            words: get(lang).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Filter that matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Filter over an explicit word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add a word to the set.
    pub fn add(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Remove a word from the set.
    pub fn remove(&mut self, word: &str) {
        self.words.remove(&word.to_lowercase());
    }

    /// Whether `word` is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let filter = StopwordFilter::for_language("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("ranking"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::for_language("xx");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_german_list() {
        let filter = StopwordFilter::for_language("de");

        assert!(filter.is_stopword("und"));
        assert!(filter.is_stopword("der"));
        assert!(!filter.is_stopword("ranking"));
    }

    #[test]
    fn test_custom_list() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("CUSTOM"));
        assert!(!filter.is_stopword("the"));

        filter.add("extra");
        assert!(filter.is_stopword("extra"));

        filter.remove("custom");
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
