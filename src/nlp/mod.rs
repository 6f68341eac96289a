//! Natural Language Processing components
//!
//! The core algorithm never touches an NLP toolkit directly: everything
//! it needs from one is the narrow [`Analyzer`] capability (sentence
//! splitting, word tokenization, and a stopword membership test), which
//! is injected into the builders and the similarity metric.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;

/// Tokenization and stopword capabilities required by the core.
///
/// Implementations must be `Send + Sync` so graph construction and
/// scoring can fan out across threads.
pub trait Analyzer: Send + Sync {
    /// Split raw text into an ordered sequence of sentences.
    fn tokenize_sentences(&self, text: &str) -> Vec<String>;

    /// Split a sentence into lower-cased, punctuation-stripped words.
    fn tokenize_words(&self, text: &str) -> Vec<String>;

    /// Whether `word` belongs to the stopword set.
    fn is_stopword(&self, word: &str) -> bool;
}

/// Default analyzer: punctuation-based tokenization plus a bundled
/// stopword list.
///
/// The tokenizer itself is language-agnostic for whitespace-delimited
/// scripts; only the stopword list is language-specific, and it can be
/// swapped via [`EnglishAnalyzer::with_stopwords`].
#[derive(Debug, Clone)]
pub struct EnglishAnalyzer {
    stopwords: StopwordFilter,
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishAnalyzer {
    /// Analyzer with the bundled English stopword list.
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::for_language("en"),
        }
    }

    /// Analyzer with a caller-supplied stopword filter.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }
}

impl Analyzer for EnglishAnalyzer {
    fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize_sentences(text)
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize_words(text)
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }
}
